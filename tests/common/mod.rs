//! Shared test utilities for Foreman integration tests.
//!
//! Provides sample-record builders and a scripted upstream client so API
//! tests can run without a network.

#![allow(dead_code)]

use async_trait::async_trait;
use foreman::api::AppState;
use foreman::client::{
    ActiveCase, AssignmentRecord, AssignmentResponse, BestWorker, ClientError, CostBreakdown,
    CostCategory, CostItem, ImageAttachment, IssueImage, LaborCost, MatchedSkill, RequiredPart,
    RequiredSkill, RequiredTool, ResetResponse, ServiceCallInput, ServiceCallResponse,
    TriageAssessment, WorkerMatch, WorkerMatches, WorkforceApi,
};
use foreman::config::ForemanConfig;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// =============================================================================
// Sample Record Builders
// =============================================================================

/// Create a minimal active case with sensible defaults.
pub fn make_case(ticket_id: &str) -> ActiveCase {
    ActiveCase {
        ticket_id: ticket_id.to_string(),
        datetime_received: "2025-06-01T08:30:00".to_string(),
        category: "Electrical".to_string(),
        priority: "High".to_string(),
        location: "Building A".to_string(),
        latitude: 47.6062,
        longitude: -122.3321,
        description: "Breaker tripping repeatedly".to_string(),
        status: "Open".to_string(),
    }
}

/// Create a triage assessment keyed to the given ticket.
pub fn make_triage(ticket_id: &str) -> TriageAssessment {
    TriageAssessment {
        ticket_id: ticket_id.to_string(),
        required_skills: vec![RequiredSkill {
            skill_name: "electrical".to_string(),
            criticality: "high".to_string(),
        }],
        required_tools: vec![RequiredTool {
            tool_name: "multimeter".to_string(),
        }],
        required_parts: vec![RequiredPart {
            part_name: "breaker_panel".to_string(),
        }],
        criticality: "high".to_string(),
        description: "Replace breaker panel".to_string(),
        estimated_hours: 3.5,
        assessment_date: "2025-06-01T09:00:00".to_string(),
    }
}

/// Create a cost breakdown keyed to nothing in particular.
pub fn make_cost() -> CostBreakdown {
    CostBreakdown {
        parts: CostCategory {
            items: vec![CostItem {
                name: "breaker_panel".to_string(),
                cost: Some(120.0),
                usage_fee: None,
            }],
            total: 120.0,
        },
        tools: CostCategory {
            items: vec![CostItem {
                name: "multimeter".to_string(),
                cost: None,
                usage_fee: Some(15.0),
            }],
            total: 15.0,
        },
        labor: LaborCost {
            estimated_hours: 3.5,
            hourly_rate: 45.0,
            total: 157.5,
            best_worker: BestWorker {
                name: "Dana Fox".to_string(),
                match_score: 0.92,
            },
        },
        total_cost: 292.5,
    }
}

/// Create a worker match.
pub fn make_worker(worker_id: &str) -> WorkerMatch {
    WorkerMatch {
        worker_id: worker_id.to_string(),
        name: "Dana Fox".to_string(),
        skills: "electrical;wiring".to_string(),
        matched_skills: vec![MatchedSkill {
            required: "electrical".to_string(),
            matched: "electrical".to_string(),
            score: 1.0,
        }],
        location: "Depot 3".to_string(),
        distance: 3218.7,
        eta_minutes: 25.0,
        hourly_rate: 45.0,
        match_score: 0.92,
        availability: "available".to_string(),
    }
}

/// Create a worker-match response with one recommended candidate.
pub fn make_matches(ticket_id: &str) -> WorkerMatches {
    let _ = ticket_id;
    WorkerMatches {
        recommended: make_worker("W1"),
        matches: vec![make_worker("W1"), make_worker("W2")],
    }
}

/// Create a successful assignment response.
pub fn make_assignment(ticket_id: &str, worker_id: &str) -> AssignmentResponse {
    AssignmentResponse {
        success: true,
        message: "assigned".to_string(),
        assignment: Some(AssignmentRecord {
            ticket_id: ticket_id.to_string(),
            worker_id: worker_id.to_string(),
            worker_name: "Dana Fox".to_string(),
            assignment_time: "2025-06-01T09:30:00".to_string(),
            status: "assigned".to_string(),
        }),
    }
}

// =============================================================================
// Scripted Upstream Client
// =============================================================================

/// In-memory `WorkforceApi` implementation with per-operation call
/// counters. Every read returns canned data keyed to the requested id.
#[derive(Default)]
pub struct ScriptedUpstream {
    pub cases_calls: AtomicU32,
    pub triage_calls: AtomicU32,
    pub cost_calls: AtomicU32,
    pub worker_calls: AtomicU32,
    pub assign_calls: AtomicU32,
    pub reset_calls: AtomicU32,
    /// When true, the assignment operation reports `success: false`.
    pub refuse_assignment: bool,
    /// When true, every read fails with an upstream 500.
    pub fail_reads: bool,
    /// Issue image returned; `None` means a success payload without data.
    pub image: Option<String>,
    /// HTML served from the table endpoint.
    pub table_html: String,
}

impl ScriptedUpstream {
    pub fn new() -> Self {
        Self {
            table_html: concat!(
                "<table><thead><tr><th>Ticket ID</th><th>Status</th></tr></thead>",
                "<tbody><tr><td>SC001</td><td>Open</td></tr></tbody></table>"
            )
            .to_string(),
            ..Self::default()
        }
    }

    fn read_failure() -> ClientError {
        ClientError::Upstream {
            status: 500,
            message: "scripted failure".to_string(),
        }
    }
}

#[async_trait]
impl WorkforceApi for ScriptedUpstream {
    async fn active_cases(&self) -> Result<Vec<ActiveCase>, ClientError> {
        self.cases_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(vec![make_case("SC001"), make_case("SC002")])
    }

    async fn triage_assessment(&self, ticket_id: &str) -> Result<TriageAssessment, ClientError> {
        self.triage_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(make_triage(ticket_id))
    }

    async fn cost_breakdown(&self, _ticket_id: &str) -> Result<CostBreakdown, ClientError> {
        self.cost_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(make_cost())
    }

    async fn worker_matches(&self, ticket_id: &str) -> Result<WorkerMatches, ClientError> {
        self.worker_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(Self::read_failure());
        }
        Ok(make_matches(ticket_id))
    }

    async fn assign(
        &self,
        ticket_id: &str,
        worker_id: &str,
    ) -> Result<AssignmentResponse, ClientError> {
        self.assign_calls.fetch_add(1, Ordering::SeqCst);
        if self.refuse_assignment {
            return Ok(AssignmentResponse {
                success: false,
                message: "worker unavailable".to_string(),
                assignment: None,
            });
        }
        Ok(make_assignment(ticket_id, worker_id))
    }

    async fn create_service_call(
        &self,
        _input: &ServiceCallInput,
        _image: Option<ImageAttachment>,
    ) -> Result<ServiceCallResponse, ClientError> {
        Ok(ServiceCallResponse {
            ticket_id: Some("SC099".to_string()),
            message: "created".to_string(),
            extra: serde_json::Map::new(),
        })
    }

    async fn issue_image(&self, _ticket_id: &str) -> Result<IssueImage, ClientError> {
        Ok(IssueImage {
            status: "success".to_string(),
            image_base64: self.image.clone(),
            message: None,
        })
    }

    async fn reset_database(&self) -> Result<ResetResponse, ClientError> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ResetResponse {
            message: "Database reset".to_string(),
            extra: serde_json::Map::new(),
        })
    }

    async fn table_html(&self, _table_name: &str) -> Result<String, ClientError> {
        Ok(self.table_html.clone())
    }
}

// =============================================================================
// App Builders
// =============================================================================

/// Build application state around a scripted upstream.
pub fn make_state(upstream: Arc<ScriptedUpstream>) -> Arc<AppState> {
    let config = Arc::new(ForemanConfig::default());
    Arc::new(AppState::new(upstream, config))
}
