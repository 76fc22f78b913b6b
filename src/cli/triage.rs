//! Triage command implementation

use crate::cli::{output, TicketQueryArgs};
use crate::client::WorkforceApi;
use anyhow::Context;

/// Handle the triage command: show the requirement estimate for a ticket.
pub async fn handle_triage(
    args: &TicketQueryArgs,
    client: &dyn WorkforceApi,
) -> anyhow::Result<String> {
    let assessment = client
        .triage_assessment(&args.ticket_id)
        .await
        .with_context(|| format!("Failed to fetch triage assessment for {}", args.ticket_id))?;

    if args.json {
        Ok(serde_json::to_string_pretty(&assessment)?)
    } else {
        Ok(output::format_triage(&assessment))
    }
}
