//! Database reset endpoint handler.

use crate::api::{ApiError, AppState};
use crate::client::ResetResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::warn;

/// POST /api/reset-database - Reset the upstream database.
///
/// Destructive. Reported through the same generic path as any other write;
/// the local caches are flushed so stale pre-reset data is not served.
pub async fn handle(State(state): State<Arc<AppState>>) -> Result<Json<ResetResponse>, ApiError> {
    warn!("Database reset requested");

    let response = state.client.reset_database().await?;

    state.caches.cases.invalidate_all();
    state.caches.triage.invalidate_all();
    state.caches.cost.invalidate_all();
    state.caches.workers.invalidate_all();

    Ok(Json(response))
}
