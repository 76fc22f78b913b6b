//! Assign command implementation

use crate::cli::AssignArgs;
use crate::client::WorkforceApi;
use crate::workflow::{run_progress, AssignmentOutcome, WorkflowStep};
use colored::Colorize;

/// Handle the assign command: submit the assignment, then walk the display
/// sequence on success and print the confirmation record.
///
/// Failures short-circuit: the error prints immediately and the progress
/// display never starts.
pub async fn handle_assign(args: &AssignArgs, client: &dyn WorkforceApi) -> anyhow::Result<String> {
    let result = client.assign(&args.ticket_id, &args.worker_id).await;

    match AssignmentOutcome::from_result(result) {
        AssignmentOutcome::Confirmed(record) => {
            if !args.no_progress {
                println!(
                    "{} {}",
                    "✓".green(),
                    WorkflowStep::ResourceAllocation.label()
                );
                run_progress(WorkflowStep::ResourceAllocation, |step| {
                    println!("{} {}", "✓".green(), step.label());
                })
                .await;
            }

            Ok(format!(
                "\n{}\nTicket:     {}\nWorker:     {} ({})\nAssigned:   {}\nStatus:     {}",
                "Assignment confirmed".green().bold(),
                record.ticket_id,
                record.worker_name,
                record.worker_id,
                record.assignment_time,
                record.status,
            ))
        }
        AssignmentOutcome::Failed(message) => {
            anyhow::bail!("Assignment failed: {}", message)
        }
    }
}
