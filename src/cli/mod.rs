//! CLI module for Foreman
//!
//! Command-line interface definitions and handlers for the workforce
//! management gateway.
//!
//! # Commands
//!
//! - `serve` - Start the local proxy server
//! - `tickets` - List active service cases
//! - `triage` - Show the triage assessment for a ticket
//! - `cost` - Show the cost breakdown for a ticket
//! - `workers` - Show ranked worker matches for a ticket
//! - `assign` - Assign a worker to a ticket
//! - `table` - Browse a raw upstream table
//! - `create` - Create a new service call
//! - `reset` - Reset the upstream database (destructive)
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start the proxy with default config
//! foreman serve
//!
//! # Show the active case list
//! foreman tickets
//!
//! # Assign the recommended worker
//! foreman assign SC001 W42
//! ```

pub mod assign;
pub mod completions;
pub mod config;
pub mod cost;
pub mod create;
pub mod output;
pub mod reset;
pub mod serve;
pub mod table;
pub mod tickets;
pub mod triage;
pub mod workers;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Foreman - Workforce Management Gateway
#[derive(Parser, Debug)]
#[command(
    name = "foreman",
    version,
    about = "Workforce management gateway for a field-service dispatch API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the local proxy server
    Serve(ServeArgs),
    /// List active service cases
    Tickets(TicketsArgs),
    /// Show the triage assessment for a ticket
    Triage(TicketQueryArgs),
    /// Show the cost breakdown for a ticket
    Cost(TicketQueryArgs),
    /// Show ranked worker matches for a ticket
    Workers(TicketQueryArgs),
    /// Assign a worker to a ticket
    Assign(AssignArgs),
    /// Browse a raw upstream table
    Table(TableArgs),
    /// Create a new service call
    Create(CreateArgs),
    /// Reset the upstream database (destructive)
    Reset(ResetArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "foreman.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "FOREMAN_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "FOREMAN_HOST")]
    pub host: Option<String>,

    /// Override upstream base URL
    #[arg(short = 'u', long, env = "FOREMAN_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FOREMAN_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct TicketsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Filter by priority (low, medium, high, critical)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "foreman.toml")]
    pub config: PathBuf,
}

/// Arguments shared by the per-ticket read commands.
#[derive(Args, Debug)]
pub struct TicketQueryArgs {
    /// Ticket identifier (e.g. SC001)
    pub ticket_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "foreman.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Ticket identifier
    pub ticket_id: String,

    /// Worker identifier
    pub worker_id: String,

    /// Skip the workflow progress display and print the outcome directly
    #[arg(long)]
    pub no_progress: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "foreman.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Table name (e.g. workers, service_calls)
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "foreman.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Issue category (Electrical, Mechanical, Plumbing, HVAC, IT, Security, Other)
    #[arg(long)]
    pub category: String,

    /// Free-text issue description
    #[arg(long)]
    pub description: String,

    /// Location name
    #[arg(long)]
    pub location: String,

    /// Latitude
    #[arg(long, default_value_t = 47.6062)]
    pub latitude: f64,

    /// Longitude
    #[arg(long, default_value_t = -122.3321)]
    pub longitude: f64,

    /// Priority (Low, Medium, High, Critical)
    #[arg(long, default_value = "Medium")]
    pub priority: String,

    /// Path to an image of the issue to attach
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, default_value = "foreman.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm the reset without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "foreman.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "foreman.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Build an upstream client from a config file path, falling back to
/// defaults when the file is absent.
pub fn load_config(path: &std::path::Path) -> crate::config::ForemanConfig {
    let config = if path.exists() {
        crate::config::ForemanConfig::load(Some(path)).unwrap_or_else(|e| {
            eprintln!("Warning: failed to load config: {}", e);
            crate::config::ForemanConfig::default()
        })
    } else {
        crate::config::ForemanConfig::default()
    };
    config.with_env_overrides()
}

/// Build the upstream HTTP client for a one-shot command.
pub fn build_client(
    config: &crate::config::ForemanConfig,
) -> anyhow::Result<crate::client::WorkforceClient> {
    Ok(crate::client::WorkforceClient::new(
        config.upstream.base_url.clone(),
        config.upstream.request_timeout_seconds,
    )?)
}
