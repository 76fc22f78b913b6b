//! Error types for upstream client operations.

use thiserror::Error;

/// Errors that can occur while talking to the upstream service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Upstream returned an error response (4xx, 5xx).
    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Upstream response doesn't match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Map a reqwest transport error onto the client taxonomy.
    pub(crate) fn from_transport(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(timeout_ms)
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
