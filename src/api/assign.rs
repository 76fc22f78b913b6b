//! Worker assignment endpoint handler.

use crate::api::{ApiError, AppState};
use crate::client::AssignmentResponse;
use crate::logging::generate_request_id;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

/// POST /api/assign/:ticket_id/:worker_id - Assign a worker to a ticket.
///
/// Writes bypass the query cache; the upstream response (success flag,
/// message, assignment record) is forwarded unchanged. The cosmetic
/// progress sequencing lives in the consuming surface, not here.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Path((ticket_id, worker_id)): Path<(String, String)>,
) -> Result<Json<AssignmentResponse>, ApiError> {
    let request_id = generate_request_id();

    let response = state.client.assign(&ticket_id, &worker_id).await?;

    info!(
        request_id = %request_id,
        ticket_id = %ticket_id,
        worker_id = %worker_id,
        success = response.success,
        "Assignment submitted"
    );
    Ok(Json(response))
}
