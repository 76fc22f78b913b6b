//! Foreman - Workforce management gateway
//!
//! This library provides the core functionality for fronting a fixed
//! field-service HTTP API: a typed upstream client, a staleness-window
//! query cache with single-flight deduplication, session-scoped selection
//! state, an HTML-table scraper for the one non-JSON upstream endpoint,
//! and the local proxy surface plus CLI built on top of them.

pub mod api;
pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod format;
pub mod logging;
pub mod scrape;
pub mod session;
pub mod workflow;
