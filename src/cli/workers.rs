//! Workers command implementation

use crate::cli::{output, TicketQueryArgs};
use crate::client::WorkforceApi;
use anyhow::Context;

/// Handle the workers command: show ranked worker matches for a ticket.
pub async fn handle_workers(
    args: &TicketQueryArgs,
    client: &dyn WorkforceApi,
) -> anyhow::Result<String> {
    let matches = client
        .worker_matches(&args.ticket_id)
        .await
        .with_context(|| format!("Failed to fetch worker matches for {}", args.ticket_id))?;

    if args.json {
        Ok(output::format_workers_json(&matches))
    } else {
        Ok(output::format_workers_table(&matches))
    }
}
