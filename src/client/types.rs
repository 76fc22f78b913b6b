//! Wire types for the upstream field-service API.
//!
//! These are plain passthrough records: fields mirror the upstream payloads
//! exactly and no validation is performed beyond serde deserialization.

use serde::{Deserialize, Serialize};

/// An active service case as returned by `GET /api/active_cases`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveCase {
    pub ticket_id: String,
    pub datetime_received: String,
    pub category: String,
    pub priority: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub status: String,
}

/// A (skill, criticality) requirement pair from a triage assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub skill_name: String,
    pub criticality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredTool {
    pub tool_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredPart {
    pub part_name: String,
}

/// Derived requirement estimate for a ticket, keyed by ticket id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageAssessment {
    pub ticket_id: String,
    pub required_skills: Vec<RequiredSkill>,
    pub required_tools: Vec<RequiredTool>,
    pub required_parts: Vec<RequiredPart>,
    pub criticality: String,
    pub description: String,
    pub estimated_hours: f64,
    pub assessment_date: String,
}

/// A single line item in a cost category. Parts carry `cost`, tools carry
/// `usage_fee`; the upstream omits whichever does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_fee: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCategory {
    pub items: Vec<CostItem>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestWorker {
    pub name: String,
    pub match_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCost {
    pub estimated_hours: f64,
    pub hourly_rate: f64,
    pub total: f64,
    pub best_worker: BestWorker,
}

/// Computed cost estimate for completing a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub parts: CostCategory,
    pub tools: CostCategory,
    pub labor: LaborCost,
    pub total_cost: f64,
}

/// How one required skill matched against a worker's skill set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub required: String,
    pub matched: String,
    pub score: f64,
}

/// A scored candidate worker for a ticket.
///
/// `skills` is a semicolon-joined string as the upstream sends it; use
/// [`crate::format::parse_skills`] to split it. `distance` is in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerMatch {
    pub worker_id: String,
    pub name: String,
    pub skills: String,
    pub matched_skills: Vec<MatchedSkill>,
    pub location: String,
    pub distance: f64,
    pub eta_minutes: f64,
    pub hourly_rate: f64,
    pub match_score: f64,
    pub availability: String,
}

/// Worker-match response: one designated recommendation plus the ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerMatches {
    pub recommended: WorkerMatch,
    pub matches: Vec<WorkerMatch>,
}

/// Assignment record embedded in a successful assignment response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub ticket_id: String,
    pub worker_id: String,
    pub worker_name: String,
    pub assignment_time: String,
    pub status: String,
}

/// Result of `POST /api/assign/{ticket}/{worker}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<AssignmentRecord>,
}

/// Metadata for a new service call, sent as the `service_call_input`
/// multipart field (JSON-encoded string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCallInput {
    pub category: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub priority: String,
}

/// Result of creating a service call. The upstream returns at least the new
/// ticket id; everything else is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCallResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Issue image payload. `status` is `success`, `no_image` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueImage {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of the destructive database reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetResponse {
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
