//! Triage assessment endpoint handler.

use crate::api::{ApiError, AppState};
use crate::client::TriageAssessment;
use crate::logging::generate_request_id;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

/// GET /api/triage/:ticket_id - Triage assessment for a ticket.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> Result<Json<TriageAssessment>, ApiError> {
    let request_id = generate_request_id();

    let assessment = state
        .caches
        .triage
        .get_or_fetch(&ticket_id, || {
            let client = Arc::clone(&state.client);
            let ticket_id = ticket_id.clone();
            async move { client.triage_assessment(&ticket_id).await }
        })
        .await?;

    info!(request_id = %request_id, ticket_id = %ticket_id, "Triage assessment served");
    Ok(Json(assessment))
}
