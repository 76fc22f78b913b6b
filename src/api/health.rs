//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub upstream_url: String,
    pub cached: CacheCounts,
}

/// Cached key counts per query family.
#[derive(Debug, Serialize)]
pub struct CacheCounts {
    pub cases: usize,
    pub triage: usize,
    pub cost: usize,
    pub workers: usize,
}

/// GET /health - Return gateway health status.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        upstream_url: state.config.upstream.base_url.clone(),
        cached: CacheCounts {
            cases: state.caches.cases.len(),
            triage: state.caches.triage.len(),
            cost: state.caches.cost.len(),
            workers: state.caches.workers.len(),
        },
    })
}
