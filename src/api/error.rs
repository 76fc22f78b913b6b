//! Error envelope for the local proxy surface.
//!
//! All JSON endpoints report failures in one shape:
//!
//! ```json
//! {
//!   "error": {
//!     "message": "Upstream error 503: maintenance window",
//!     "type": "upstream_error",
//!     "code": "upstream_error"
//!   }
//! }
//! ```
//!
//! Upstream non-2xx statuses pass through unchanged; transport failures map
//! to 502 and timeouts to 504. The issue-image and table routes bypass this
//! envelope entirely (they normalize failures to 200 with an in-band error
//! field).

use crate::client::ClientError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Error response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
    #[serde(skip)]
    status: u16,
}

/// Error details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    fn new(status: StatusCode, r#type: &str, code: &str, message: String) -> Self {
        Self {
            error: ApiErrorBody {
                message,
                r#type: r#type.to_string(),
                code: Some(code.to_string()),
            },
            status: status.as_u16(),
        }
    }

    /// Create a bad request error (400).
    pub fn bad_request(message: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "invalid_request_error",
            "invalid_request_error",
            message.to_string(),
        )
    }

    /// Create a bad gateway error (502).
    pub fn bad_gateway(message: &str) -> Self {
        Self::new(
            StatusCode::BAD_GATEWAY,
            "upstream_error",
            "bad_gateway",
            message.to_string(),
        )
    }

    /// Create a gateway timeout error (504).
    pub fn gateway_timeout() -> Self {
        Self::new(
            StatusCode::GATEWAY_TIMEOUT,
            "upstream_error",
            "gateway_timeout",
            "Upstream request timed out".to_string(),
        )
    }

    /// Pass an upstream error status through with its body text.
    pub fn upstream(status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
        Self::new(
            status,
            "upstream_error",
            "upstream_error",
            format!("API error ({}): {}", status.as_u16(), body),
        )
    }

    /// Create an internal error (500).
    pub fn internal(message: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "internal_error",
            message.to_string(),
        )
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(msg) => ApiError::bad_gateway(&format!("Network error: {}", msg)),
            ClientError::Timeout(_) => ApiError::gateway_timeout(),
            ClientError::Upstream { status, message } => ApiError::upstream(status, &message),
            ClientError::InvalidResponse(msg) => {
                ApiError::bad_gateway(&format!("Invalid upstream response: {}", msg))
            }
            ClientError::Configuration(msg) => ApiError::internal(&msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
