//! Tickets command implementation

use crate::cli::{output, TicketsArgs};
use crate::client::WorkforceApi;
use anyhow::Context;

/// Handle the tickets command: list active cases, optionally filtered by
/// priority.
pub async fn handle_tickets(
    args: &TicketsArgs,
    client: &dyn WorkforceApi,
) -> anyhow::Result<String> {
    let mut cases = client
        .active_cases()
        .await
        .context("Failed to fetch active cases")?;

    if let Some(ref priority) = args.priority {
        let wanted = priority.to_lowercase();
        cases.retain(|c| c.priority.to_lowercase() == wanted);
    }

    if cases.is_empty() {
        return Ok("No active cases".to_string());
    }

    if args.json {
        Ok(output::format_tickets_json(&cases))
    } else {
        Ok(output::format_tickets_table(&cases))
    }
}
