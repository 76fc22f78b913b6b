//! Issue image endpoint handler.

use crate::api::AppState;
use crate::client::IssueImage;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::warn;

/// GET /api/issue-image/:ticket_id - Reported-issue image for a ticket.
///
/// Failures are normalized to HTTP 200 with an in-band `status`/`message`
/// pair so image consumers handle every outcome through one shape. A
/// success payload without image data becomes `no_image`.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> Json<IssueImage> {
    match state.client.issue_image(&ticket_id).await {
        Ok(image) if image.status == "success" && image.image_base64.is_none() => {
            Json(IssueImage {
                status: "no_image".to_string(),
                image_base64: None,
                message: Some("No image available for this ticket".to_string()),
            })
        }
        Ok(image) => Json(image),
        Err(e) => {
            warn!(ticket_id = %ticket_id, error = %e, "Issue image fetch failed");
            Json(IssueImage {
                status: "error".to_string(),
                image_base64: None,
                message: Some("Failed to fetch issue image".to_string()),
            })
        }
    }
}
