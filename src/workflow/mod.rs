//! Assignment submission flow.
//!
//! Splits the flow into a decision (`AssignmentOutcome`) and a cosmetic
//! progress sequence. The six workflow steps are a fixed client-side timer
//! sequence with no relation to backend state transitions: the upstream
//! exposes no step-completion events, so the original product faked the
//! timeline and that behavior is kept. The sequence runs only on the
//! confirmed path; failures surface immediately with no animation.

use crate::client::{AssignmentRecord, AssignmentResponse, ClientError};
use std::time::Duration;

/// Delay between cosmetic progress steps.
pub const STEP_DELAY: Duration = Duration::from_millis(1500);

/// The six display-only workflow stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkflowStep {
    TicketCreated,
    ResourceAllocation,
    DispatchAcceptance,
    OnSiteTracking,
    RepairExecution,
    Completion,
}

impl WorkflowStep {
    /// All steps in display order.
    pub const ALL: [WorkflowStep; 6] = [
        WorkflowStep::TicketCreated,
        WorkflowStep::ResourceAllocation,
        WorkflowStep::DispatchAcceptance,
        WorkflowStep::OnSiteTracking,
        WorkflowStep::RepairExecution,
        WorkflowStep::Completion,
    ];

    /// 1-based position in the sequence.
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }

    /// Steps strictly after `self`, in order.
    pub fn remaining(self) -> impl Iterator<Item = WorkflowStep> {
        Self::ALL.into_iter().filter(move |s| *s > self)
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkflowStep::TicketCreated => "Ticket Created",
            WorkflowStep::ResourceAllocation => "Resource Allocation",
            WorkflowStep::DispatchAcceptance => "Dispatch & Acceptance",
            WorkflowStep::OnSiteTracking => "On-Site & Tracking",
            WorkflowStep::RepairExecution => "Repair Execution",
            WorkflowStep::Completion => "Completion",
        }
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Terminal outcome of an assignment submission.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
    /// Upstream accepted the assignment; confirmation dialog path.
    Confirmed(AssignmentRecord),
    /// Upstream rejected the assignment or the call failed; error dialog
    /// path, shown immediately.
    Failed(String),
}

impl AssignmentOutcome {
    /// Decide the outcome from an upstream response.
    ///
    /// Only `success: true` with an assignment record present reaches the
    /// confirmation path; everything else is a failure.
    pub fn from_response(response: AssignmentResponse) -> Self {
        match response {
            AssignmentResponse {
                success: true,
                assignment: Some(record),
                ..
            } => AssignmentOutcome::Confirmed(record),
            AssignmentResponse { message, .. } => {
                let message = if message.is_empty() {
                    "Failed to assign worker".to_string()
                } else {
                    message
                };
                AssignmentOutcome::Failed(message)
            }
        }
    }

    /// Decide the outcome from a client-level result.
    pub fn from_result(result: Result<AssignmentResponse, ClientError>) -> Self {
        match result {
            Ok(response) => Self::from_response(response),
            Err(e) => AssignmentOutcome::Failed(e.to_string()),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, AssignmentOutcome::Confirmed(_))
    }
}

/// Run the cosmetic progress sequence from `from` (exclusive) through
/// `Completion`, invoking `on_step` as each stage is reached.
///
/// Purely a timed display sequence: no cancellation, no rollback, nothing
/// observed from the backend. Callers must only invoke this on the
/// confirmed path.
pub async fn run_progress<F: FnMut(WorkflowStep)>(from: WorkflowStep, mut on_step: F) {
    for step in from.remaining() {
        tokio::time::sleep(STEP_DELAY).await;
        on_step(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AssignmentResponse;

    fn record() -> AssignmentRecord {
        AssignmentRecord {
            ticket_id: "SC001".to_string(),
            worker_id: "W42".to_string(),
            worker_name: "Dana Fox".to_string(),
            assignment_time: "2025-06-01T09:00:00".to_string(),
            status: "assigned".to_string(),
        }
    }

    #[test]
    fn test_success_with_record_confirms() {
        let outcome = AssignmentOutcome::from_response(AssignmentResponse {
            success: true,
            message: "assigned".to_string(),
            assignment: Some(record()),
        });
        assert!(outcome.is_confirmed());
    }

    #[test]
    fn test_success_flag_false_fails() {
        let outcome = AssignmentOutcome::from_response(AssignmentResponse {
            success: false,
            message: "worker unavailable".to_string(),
            assignment: None,
        });
        assert_eq!(
            outcome,
            AssignmentOutcome::Failed("worker unavailable".to_string())
        );
    }

    #[test]
    fn test_success_without_record_fails() {
        let outcome = AssignmentOutcome::from_response(AssignmentResponse {
            success: true,
            message: String::new(),
            assignment: None,
        });
        assert!(!outcome.is_confirmed());
    }

    #[test]
    fn test_client_error_fails() {
        let outcome = AssignmentOutcome::from_result(Err(ClientError::Upstream {
            status: 500,
            message: "boom".to_string(),
        }));
        assert!(matches!(outcome, AssignmentOutcome::Failed(_)));
    }

    #[test]
    fn test_step_order_and_positions() {
        assert_eq!(WorkflowStep::TicketCreated.position(), 1);
        assert_eq!(WorkflowStep::Completion.position(), 6);
        let after: Vec<_> = WorkflowStep::ResourceAllocation.remaining().collect();
        assert_eq!(after.len(), 4);
        assert_eq!(after[0], WorkflowStep::DispatchAcceptance);
        assert_eq!(after[3], WorkflowStep::Completion);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_sequence_walks_remaining_steps() {
        let mut seen = Vec::new();
        run_progress(WorkflowStep::ResourceAllocation, |step| seen.push(step)).await;
        assert_eq!(
            seen,
            vec![
                WorkflowStep::DispatchAcceptance,
                WorkflowStep::OnSiteTracking,
                WorkflowStep::RepairExecution,
                WorkflowStep::Completion,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_from_completion_is_empty() {
        let mut seen = Vec::new();
        run_progress(WorkflowStep::Completion, |step| seen.push(step)).await;
        assert!(seen.is_empty());
    }
}
