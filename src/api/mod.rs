//! # Local Proxy Surface
//!
//! HTTP endpoints mirroring the upstream field-service API one-for-one.
//! The surface exists to sidestep cross-origin restrictions for browser
//! consumers; there is no business logic here beyond the query cache and
//! error-shape normalization.
//!
//! ## Endpoints
//!
//! - `GET  /api/active-cases` - Active case list
//! - `GET  /api/triage/:ticket_id` - Triage assessment
//! - `GET  /api/cost/:ticket_id` - Cost breakdown
//! - `GET  /api/worker/:ticket_id` - Ranked worker matches
//! - `POST /api/assign/:ticket_id/:worker_id` - Assign a worker (write)
//! - `POST /api/servicecall` - Create a service call (multipart write)
//! - `GET  /api/issue-image/:ticket_id` - Issue image (failures in-band, always 200)
//! - `GET  /api/table/:table_name` - Raw HTML table passthrough (failures in-band, always 200)
//! - `POST /api/reset-database` - Reset the upstream database (destructive write)
//! - `GET  /health` - Gateway health
//!
//! ## Example
//!
//! ```no_run
//! use foreman::api::{create_router, AppState};
//! use foreman::config::ForemanConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(ForemanConfig::default());
//! let state = Arc::new(AppState::from_config(config)?);
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4400").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Request flow
//!
//! 1. Request received, correlation id generated
//! 2. Read queries consult the query cache (staleness window + single-flight)
//! 3. Cache miss or write: one call to the upstream through the shared client
//! 4. Response returned as-is, or an error envelope with the mapped status
//!
//! The issue-image and table routes normalize failures to HTTP 200 with an
//! in-band error field so their consumers handle both outcomes uniformly.

mod assign;
mod cases;
mod cost;
pub mod error;
mod health;
mod image;
mod reset;
mod servicecall;
mod table;
mod triage;
mod workers;

pub use error::{ApiError, ApiErrorBody};

use crate::cache::QueryCache;
use crate::client::{
    ActiveCase, ClientError, CostBreakdown, TriageAssessment, WorkerMatches, WorkforceApi,
    WorkforceClient,
};
use crate::config::{CacheConfig, ForemanConfig};
use crate::session::SelectionState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (10 MB). Service-call image uploads are the
/// only large payloads.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// One query cache per read-operation family.
pub struct Caches {
    pub cases: QueryCache<Vec<ActiveCase>>,
    pub triage: QueryCache<TriageAssessment>,
    pub cost: QueryCache<CostBreakdown>,
    pub workers: QueryCache<WorkerMatches>,
}

impl Caches {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            cases: QueryCache::new("active_cases", config.read_policy()),
            triage: QueryCache::new("triage", config.slow_read_policy()),
            cost: QueryCache::new("cost", config.slow_read_policy()),
            workers: QueryCache::new("workers", config.read_policy()),
        }
    }

    /// Propagate a foreground-visibility signal to every cache; each one
    /// honors or ignores it per its own policy.
    pub fn mark_foreground(&self) {
        self.cases.mark_foreground();
        self.triage.mark_foreground();
        self.cost.mark_foreground();
        self.workers.mark_foreground();
    }
}

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub client: Arc<dyn WorkforceApi>,
    pub config: Arc<ForemanConfig>,
    pub caches: Caches,
    pub selection: SelectionState,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create application state around an existing upstream client.
    /// Primarily useful for substituting a scripted client in tests.
    pub fn new(client: Arc<dyn WorkforceApi>, config: Arc<ForemanConfig>) -> Self {
        let caches = Caches::new(&config.cache);
        Self {
            client,
            config,
            caches,
            selection: SelectionState::new(),
            start_time: Instant::now(),
        }
    }

    /// Create application state with a real HTTP client built from the
    /// upstream configuration.
    pub fn from_config(config: Arc<ForemanConfig>) -> Result<Self, ClientError> {
        let client = WorkforceClient::new(
            config.upstream.base_url.clone(),
            config.upstream.request_timeout_seconds,
        )?;
        Ok(Self::new(Arc::new(client), config))
    }
}

/// Create the main proxy router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/active-cases", get(cases::handle))
        .route("/api/triage/:ticket_id", get(triage::handle))
        .route("/api/cost/:ticket_id", get(cost::handle))
        .route("/api/worker/:ticket_id", get(workers::handle))
        .route("/api/assign/:ticket_id/:worker_id", post(assign::handle))
        .route("/api/servicecall", post(servicecall::handle))
        .route("/api/issue-image/:ticket_id", get(image::handle))
        .route("/api/table/:table_name", get(table::handle))
        .route("/api/reset-database", post(reset::handle))
        .route("/health", get(health::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .with_state(state)
}
