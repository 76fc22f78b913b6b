//! Raw table endpoint handler.

use crate::api::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// GET /api/table/:table_name - Upstream HTML table passthrough.
///
/// The upstream renders this endpoint as HTML, not JSON; the body is
/// forwarded untouched (see [`crate::scrape`] for turning it back into
/// rows). Failures are normalized to HTTP 200 with an in-band error field,
/// mirroring the issue-image route.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Path(table_name): Path<String>,
) -> Response {
    match state.client.table_html(&table_name).await {
        Ok(html) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response(),
        Err(e) => {
            warn!(table = %table_name, error = %e, "Table fetch failed");
            Json(json!({ "error": "Failed to fetch table data" })).into_response()
        }
    }
}
