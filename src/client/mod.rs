//! Upstream client for the field-service API.
//!
//! This module provides the `WorkforceApi` trait and the reqwest-backed
//! `WorkforceClient` implementation. Every operation maps to exactly one
//! HTTP call against a fixed upstream host: no retries, no batching. Retry
//! policy lives in the query cache layer, not here.

use async_trait::async_trait;

pub mod error;
mod http;
pub mod types;

pub use error::ClientError;
pub use http::WorkforceClient;
pub use types::*;

/// Unified interface to the upstream field-service API.
///
/// Object-safe so callers can hold `Arc<dyn WorkforceApi>` and tests can
/// substitute a scripted implementation for the HTTP client.
///
/// # Failure reporting
///
/// All three failure classes (transport, non-2xx status, malformed payload)
/// surface as a rejected operation; callers are not expected to branch on
/// the variant beyond user-facing messaging.
#[async_trait]
pub trait WorkforceApi: Send + Sync + 'static {
    /// List all active service cases.
    async fn active_cases(&self) -> Result<Vec<ActiveCase>, ClientError>;

    /// Fetch the triage assessment for a ticket.
    async fn triage_assessment(&self, ticket_id: &str) -> Result<TriageAssessment, ClientError>;

    /// Fetch the cost breakdown for a ticket.
    async fn cost_breakdown(&self, ticket_id: &str) -> Result<CostBreakdown, ClientError>;

    /// Fetch ranked worker matches for a ticket.
    async fn worker_matches(&self, ticket_id: &str) -> Result<WorkerMatches, ClientError>;

    /// Assign a worker to a ticket. The only operation that causes an entity
    /// to be created upstream during normal browsing.
    async fn assign(
        &self,
        ticket_id: &str,
        worker_id: &str,
    ) -> Result<AssignmentResponse, ClientError>;

    /// Create a new service call from metadata plus an optional image
    /// attachment (multipart upload).
    async fn create_service_call(
        &self,
        input: &ServiceCallInput,
        image: Option<ImageAttachment>,
    ) -> Result<ServiceCallResponse, ClientError>;

    /// Fetch the reported-issue image for a ticket, if any.
    async fn issue_image(&self, ticket_id: &str) -> Result<IssueImage, ClientError>;

    /// Reset the upstream database. Destructive.
    async fn reset_database(&self) -> Result<ResetResponse, ClientError>;

    /// Fetch a raw table rendering. The upstream returns rendered HTML for
    /// this endpoint, not JSON; see [`crate::scrape`] for the parser.
    async fn table_html(&self, table_name: &str) -> Result<String, ClientError>;
}

/// An image file to attach to a service call.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Build an attachment from raw bytes, guessing the content type from
    /// the file name.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}
