//! Active case list endpoint handler.

use crate::api::{ApiError, AppState};
use crate::cache::SINGLETON_KEY;
use crate::client::ActiveCase;
use crate::logging::generate_request_id;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

/// GET /api/active-cases - List active service cases.
///
/// Served through the query cache; on a fresh load the first case becomes
/// the default selection if nothing is selected yet.
pub async fn handle(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ActiveCase>>, ApiError> {
    let request_id = generate_request_id();

    let cases = state
        .caches
        .cases
        .get_or_fetch(SINGLETON_KEY, || {
            let client = Arc::clone(&state.client);
            async move { client.active_cases().await }
        })
        .await?;

    state.selection.select_first_if_empty(&cases);

    info!(request_id = %request_id, count = cases.len(), "Active cases served");
    Ok(Json(cases))
}
