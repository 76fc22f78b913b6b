//! Configuration module for Foreman
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`FOREMAN_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use foreman::config::ForemanConfig;
//!
//! // Load defaults
//! let config = ForemanConfig::default();
//! assert_eq!(config.server.port, 4400);
//!
//! // Parse from TOML
//! let toml = r#"
//! [server]
//! port = 9000
//! "#;
//! let config: ForemanConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```

pub mod cache;
pub mod error;
pub mod logging;
pub mod server;
pub mod upstream;

pub use cache::CacheConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the Foreman gateway.
///
/// Aggregates all configuration sections: the local HTTP server, the
/// upstream field-service API, query-cache freshness, and logging.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForemanConfig {
    /// Local HTTP server configuration
    pub server: ServerConfig,
    /// Upstream field-service API settings
    pub upstream: UpstreamConfig,
    /// Query cache freshness settings
    pub cache: CacheConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ForemanConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports FOREMAN_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("FOREMAN_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("FOREMAN_HOST") {
            self.server.host = host;
        }
        if let Ok(url) = std::env::var("FOREMAN_UPSTREAM_URL") {
            self.upstream.base_url = url;
        }

        if let Ok(level) = std::env::var("FOREMAN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FOREMAN_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.upstream.base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "upstream.base_url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }
        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation {
                field: "upstream.base_url".to_string(),
                message: "URL must start with http:// or https://".to_string(),
            });
        }

        if self.cache.read_stale_secs == 0 || self.cache.default_stale_secs == 0 {
            return Err(ConfigError::Validation {
                field: "cache".to_string(),
                message: "staleness windows must be non-zero".to_string(),
            });
        }

        Ok(())
    }

    /// Render the default configuration as a commented TOML document for
    /// `config init`.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
