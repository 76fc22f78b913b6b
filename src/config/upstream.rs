//! Upstream API configuration

use serde::{Deserialize, Serialize};

/// Settings for the external field-service API this gateway fronts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the upstream host
    pub base_url: String,
    /// Request timeout applied to every upstream call, in seconds
    pub request_timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://workforcev2.elevatics.site".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_defaults() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, "https://workforcev2.elevatics.site");
        assert_eq!(config.request_timeout_seconds, 30);
    }
}
