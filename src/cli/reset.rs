//! Reset command implementation

use crate::cli::ResetArgs;
use crate::client::WorkforceApi;
use anyhow::Context;

/// Handle the reset command: wipe the upstream database.
///
/// The upstream call itself has no confirmation step; the `--yes` flag is a
/// terminal affordance so the command cannot be run by accident.
pub async fn handle_reset(args: &ResetArgs, client: &dyn WorkforceApi) -> anyhow::Result<String> {
    if !args.yes {
        anyhow::bail!("Refusing to reset the database without --yes");
    }

    let response = client
        .reset_database()
        .await
        .context("Failed to reset database")?;

    if response.message.is_empty() {
        Ok("Database reset".to_string())
    } else {
        Ok(response.message)
    }
}
