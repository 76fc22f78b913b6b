//! Worker match endpoint handler.

use crate::api::{ApiError, AppState};
use crate::client::WorkerMatches;
use crate::logging::generate_request_id;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

/// GET /api/worker/:ticket_id - Ranked worker matches for a ticket.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> Result<Json<WorkerMatches>, ApiError> {
    let request_id = generate_request_id();

    let matches = state
        .caches
        .workers
        .get_or_fetch(&ticket_id, || {
            let client = Arc::clone(&state.client);
            let ticket_id = ticket_id.clone();
            async move { client.worker_matches(&ticket_id).await }
        })
        .await?;

    info!(
        request_id = %request_id,
        ticket_id = %ticket_id,
        candidates = matches.matches.len(),
        "Worker matches served"
    );
    Ok(Json(matches))
}
