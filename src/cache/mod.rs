//! Query cache module.
//!
//! Thread-safe read-through cache for upstream queries. One `QueryCache`
//! instance covers one operation family (active cases, triage, cost, worker
//! matches); the cache key is the operation's parameter, so the composite
//! "operation + parameters" identity is (instance, key).
//!
//! Guarantees:
//!
//! - A cached value younger than the staleness window is returned without a
//!   network call.
//! - Concurrent requests for the same key share a single in-flight fetch
//!   (per-key async mutex; callers queue behind the fetch and see its
//!   result as fresh).
//! - A flat retry budget is applied per fetch, uniformly for every query.
//! - No capacity-bounded eviction: entries are only superseded by a newer
//!   fetch once stale and requested again.
//!
//! Between *different* keys there is no ordering guarantee: whichever fetch
//! completes last is what ends up stored (last write wins).


use crate::client::ClientError;
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Cache key for parameterless queries.
pub const SINGLETON_KEY: &str = "_";

/// Per-cache freshness policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    /// Maximum age of a cached result before a refetch is attempted.
    pub stale_after: Duration,
    /// Whether a foreground-visibility signal marks entries stale. Off for
    /// data not expected to change quickly (triage, cost).
    pub refetch_on_focus: bool,
    /// Flat retry budget per fetch.
    pub retries: u32,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(60),
            refetch_on_focus: true,
            retries: 1,
        }
    }
}

impl FreshnessPolicy {
    /// Policy for the slow-moving read queries: five-minute window.
    pub fn reads() -> Self {
        Self {
            stale_after: Duration::from_secs(300),
            ..Self::default()
        }
    }

    /// Disable focus-triggered refetch.
    pub fn without_focus_refetch(mut self) -> Self {
        self.refetch_on_focus = false;
        self
    }
}

#[derive(Debug)]
struct Slot<V> {
    value: Option<V>,
    fetched_at: Option<Instant>,
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self {
            value: None,
            fetched_at: None,
        }
    }
}

/// Read-through cache for one query family.
pub struct QueryCache<V> {
    name: &'static str,
    policy: FreshnessPolicy,
    slots: DashMap<String, Arc<Mutex<Slot<V>>>>,
}

impl<V: Clone> QueryCache<V> {
    /// Create a cache with the given display name (used in log fields) and
    /// freshness policy.
    pub fn new(name: &'static str, policy: FreshnessPolicy) -> Self {
        Self {
            name,
            policy,
            slots: DashMap::new(),
        }
    }

    /// Policy this cache was built with.
    pub fn policy(&self) -> FreshnessPolicy {
        self.policy
    }

    /// Number of keys with a stored value.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Return the cached value for `key` if fresh, otherwise run `fetch`
    /// (with the flat retry budget) and store its result.
    ///
    /// The per-key slot lock is held across the fetch: concurrent callers
    /// for the same key wait for the in-flight request and then read the
    /// freshly stored value instead of issuing their own.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<V, ClientError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<V, ClientError>>,
    {
        let slot = self.slot(key);
        let mut guard = slot.lock().await;

        if let (Some(value), Some(fetched_at)) = (&guard.value, guard.fetched_at) {
            if fetched_at.elapsed() < self.policy.stale_after {
                tracing::debug!(cache = self.name, key, "Cache hit");
                return Ok(value.clone());
            }
        }

        let mut attempt: u32 = 0;
        loop {
            match fetch().await {
                Ok(value) => {
                    guard.value = Some(value.clone());
                    guard.fetched_at = Some(Instant::now());
                    tracing::debug!(cache = self.name, key, attempt, "Cache fill");
                    return Ok(value);
                }
                Err(e) if attempt < self.policy.retries => {
                    attempt += 1;
                    tracing::warn!(cache = self.name, key, attempt, error = %e, "Fetch failed, retrying");
                }
                Err(e) => {
                    tracing::warn!(cache = self.name, key, error = %e, "Fetch failed");
                    return Err(e);
                }
            }
        }
    }

    /// Mark a single key stale. The stored value remains until the next
    /// `get_or_fetch` supersedes it.
    pub fn invalidate(&self, key: &str) {
        if let Some(slot) = self.slots.get(key) {
            if let Ok(mut guard) = slot.try_lock() {
                guard.fetched_at = None;
            }
        }
    }

    /// Mark every key stale.
    pub fn invalidate_all(&self) {
        for entry in self.slots.iter() {
            if let Ok(mut guard) = entry.value().try_lock() {
                guard.fetched_at = None;
            }
        }
    }

    /// Foreground-visibility signal. Caches with `refetch_on_focus` mark all
    /// entries stale so the next read refetches; others ignore the signal.
    ///
    /// Slots with a fetch in flight are skipped: their result will be fresh
    /// when it lands.
    pub fn mark_foreground(&self) {
        if self.policy.refetch_on_focus {
            tracing::debug!(cache = self.name, "Foreground signal, marking entries stale");
            self.invalidate_all();
        }
    }

    fn slot(&self, key: &str) -> Arc<Mutex<Slot<V>>> {
        self.slots
            .entry(key.to_string())
            .or_default()
            .value()
            .clone()
    }
}
