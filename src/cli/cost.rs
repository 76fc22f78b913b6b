//! Cost command implementation

use crate::cli::{output, TicketQueryArgs};
use crate::client::WorkforceApi;
use anyhow::Context;

/// Handle the cost command: show the cost estimate for a ticket.
pub async fn handle_cost(
    args: &TicketQueryArgs,
    client: &dyn WorkforceApi,
) -> anyhow::Result<String> {
    let breakdown = client
        .cost_breakdown(&args.ticket_id)
        .await
        .with_context(|| format!("Failed to fetch cost breakdown for {}", args.ticket_id))?;

    if args.json {
        Ok(serde_json::to_string_pretty(&breakdown)?)
    } else {
        Ok(output::format_cost(&breakdown))
    }
}
