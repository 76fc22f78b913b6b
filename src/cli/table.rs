//! Table command implementation

use crate::cli::{output, TableArgs};
use crate::client::WorkforceApi;
use crate::scrape;
use anyhow::Context;

/// Handle the table command: fetch the rendered table, scrape it back into
/// rows and display them.
pub async fn handle_table(args: &TableArgs, client: &dyn WorkforceApi) -> anyhow::Result<String> {
    let html = client
        .table_html(&args.name)
        .await
        .with_context(|| format!("Failed to fetch table '{}'", args.name))?;

    let parsed = scrape::parse_table(&html);

    if args.json {
        Ok(output::format_scraped_json(&parsed))
    } else {
        Ok(output::format_scraped_table(&parsed))
    }
}
