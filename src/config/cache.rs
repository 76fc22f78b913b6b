//! Query cache configuration

use crate::cache::FreshnessPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Freshness settings for the query cache layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Staleness window for the slow-moving read queries (cases, triage,
    /// cost, worker matches), in seconds
    pub read_stale_secs: u64,
    /// Default staleness window for everything else, in seconds
    pub default_stale_secs: u64,
    /// Flat retry budget applied to every cached fetch
    pub retries: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            read_stale_secs: 300,
            default_stale_secs: 60,
            retries: 1,
        }
    }
}

impl CacheConfig {
    /// Policy for read queries that refetch on foreground visibility
    /// (the active case list).
    pub fn read_policy(&self) -> FreshnessPolicy {
        FreshnessPolicy {
            stale_after: Duration::from_secs(self.read_stale_secs),
            refetch_on_focus: true,
            retries: self.retries,
        }
    }

    /// Policy for read queries not expected to change quickly (triage,
    /// cost): same window, no focus refetch.
    pub fn slow_read_policy(&self) -> FreshnessPolicy {
        FreshnessPolicy {
            refetch_on_focus: false,
            ..self.read_policy()
        }
    }

    /// Fallback policy for anything unlisted.
    pub fn default_policy(&self) -> FreshnessPolicy {
        FreshnessPolicy {
            stale_after: Duration::from_secs(self.default_stale_secs),
            refetch_on_focus: true,
            retries: self.retries,
        }
    }
}
