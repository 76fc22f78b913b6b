//! Cost breakdown endpoint handler.

use crate::api::{ApiError, AppState};
use crate::client::CostBreakdown;
use crate::logging::generate_request_id;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

/// GET /api/cost/:ticket_id - Cost breakdown for a ticket.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> Result<Json<CostBreakdown>, ApiError> {
    let request_id = generate_request_id();

    let breakdown = state
        .caches
        .cost
        .get_or_fetch(&ticket_id, || {
            let client = Arc::clone(&state.client);
            let ticket_id = ticket_id.clone();
            async move { client.cost_breakdown(&ticket_id).await }
        })
        .await?;

    info!(request_id = %request_id, ticket_id = %ticket_id, "Cost breakdown served");
    Ok(Json(breakdown))
}
