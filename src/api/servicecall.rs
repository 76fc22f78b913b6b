//! Service call creation endpoint handler.

use crate::api::{ApiError, AppState};
use crate::client::{ImageAttachment, ServiceCallInput, ServiceCallResponse};
use crate::logging::generate_request_id;
use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

/// POST /api/servicecall - Create a new service call.
///
/// Multipart passthrough: the `service_call_input` field carries the
/// JSON-encoded metadata, `issue_image` an optional image file. Both are
/// re-posted to the upstream unchanged.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ServiceCallResponse>, ApiError> {
    let request_id = generate_request_id();

    let mut input: Option<ServiceCallInput> = None;
    let mut image: Option<ImageAttachment> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(&format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("service_call_input") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(&e.to_string()))?;
                let parsed = serde_json::from_str(&text).map_err(|e| {
                    ApiError::bad_request(&format!("Invalid service_call_input: {}", e))
                })?;
                input = Some(parsed);
            }
            Some("issue_image") => {
                let file_name = field.file_name().unwrap_or("issue_image").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(&e.to_string()))?;

                let mut attachment = ImageAttachment::new(file_name, bytes.to_vec());
                if let Some(content_type) = content_type {
                    attachment.content_type = content_type;
                }
                image = Some(attachment);
            }
            _ => {}
        }
    }

    let input =
        input.ok_or_else(|| ApiError::bad_request("Missing or invalid service_call_input"))?;

    let response = state.client.create_service_call(&input, image).await?;

    info!(
        request_id = %request_id,
        ticket_id = response.ticket_id.as_deref().unwrap_or("unknown"),
        "Service call created"
    );
    Ok(Json(response))
}
