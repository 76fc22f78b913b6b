//! Output formatting helpers for CLI commands

use crate::client::{ActiveCase, CostBreakdown, TriageAssessment, WorkerMatch, WorkerMatches};
use crate::format::{
    format_currency, format_distance, format_name, format_percentage, format_relative_time,
    parse_skills,
};
use crate::scrape::ParsedTable;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// View model for ticket display
#[derive(Debug, Clone, serde::Serialize)]
pub struct TicketView {
    pub ticket_id: String,
    pub category: String,
    pub priority: String,
    pub location: String,
    pub status: String,
    pub received: String,
}

impl From<&ActiveCase> for TicketView {
    fn from(case: &ActiveCase) -> Self {
        Self {
            ticket_id: case.ticket_id.clone(),
            category: case.category.clone(),
            priority: case.priority.clone(),
            location: case.location.clone(),
            status: case.status.clone(),
            received: format_relative_time(&case.datetime_received),
        }
    }
}

/// Color a priority label the way the views do everywhere.
fn colored_priority(priority: &str) -> String {
    match priority.to_lowercase().as_str() {
        "critical" | "high" => priority.red().to_string(),
        "medium" => priority.yellow().to_string(),
        "low" => priority.blue().to_string(),
        _ => priority.to_string(),
    }
}

/// Format tickets as a table
pub fn format_tickets_table(cases: &[ActiveCase]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Ticket", "Category", "Priority", "Location", "Status", "Received",
    ]);

    for case in cases {
        let view = TicketView::from(case);
        table.add_row(vec![
            Cell::new(&view.ticket_id),
            Cell::new(&view.category),
            Cell::new(colored_priority(&view.priority)),
            Cell::new(&view.location),
            Cell::new(&view.status),
            Cell::new(&view.received),
        ]);
    }

    table.to_string()
}

/// Format tickets as JSON
pub fn format_tickets_json(cases: &[ActiveCase]) -> String {
    let views: Vec<TicketView> = cases.iter().map(TicketView::from).collect();
    serde_json::to_string_pretty(&json!({ "tickets": views })).unwrap_or_default()
}

/// Format a triage assessment as a readable block
pub fn format_triage(assessment: &TriageAssessment) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Triage for {} ({} overall)\n",
        assessment.ticket_id.bold(),
        colored_priority(&assessment.criticality)
    ));
    out.push_str(&format!(
        "Estimated hours: {:.1}\n\n",
        assessment.estimated_hours
    ));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Required Skill", "Criticality"]);
    for skill in &assessment.required_skills {
        table.add_row(vec![
            Cell::new(format_name(&skill.skill_name)),
            Cell::new(colored_priority(&skill.criticality)),
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');

    let tools: Vec<String> = assessment
        .required_tools
        .iter()
        .map(|t| format_name(&t.tool_name))
        .collect();
    let parts: Vec<String> = assessment
        .required_parts
        .iter()
        .map(|p| format_name(&p.part_name))
        .collect();
    out.push_str(&format!("Tools: {}\n", tools.join(", ")));
    out.push_str(&format!("Parts: {}\n", parts.join(", ")));

    if !assessment.description.is_empty() {
        out.push_str(&format!("\n{}\n", assessment.description));
    }

    out
}

/// Format a cost breakdown as a table plus totals
pub fn format_cost(breakdown: &CostBreakdown) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Item", "Kind", "Cost"]);

    for item in &breakdown.parts.items {
        table.add_row(vec![
            Cell::new(format_name(&item.name)),
            Cell::new("Part"),
            Cell::new(format_currency(item.cost.unwrap_or(0.0))),
        ]);
    }
    for item in &breakdown.tools.items {
        table.add_row(vec![
            Cell::new(format_name(&item.name)),
            Cell::new("Tool"),
            Cell::new(format_currency(item.usage_fee.unwrap_or(0.0))),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!(
            "Labor ({:.1}h @ {}/h, {})",
            breakdown.labor.estimated_hours,
            format_currency(breakdown.labor.hourly_rate),
            breakdown.labor.best_worker.name
        )),
        Cell::new("Labor"),
        Cell::new(format_currency(breakdown.labor.total)),
    ]);

    format!(
        "{}\nTotal: {}\n",
        table,
        format_currency(breakdown.total_cost).bold()
    )
}

/// View model for worker display
#[derive(Debug, Clone, serde::Serialize)]
pub struct WorkerView {
    pub worker_id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub match_score: String,
    pub distance: String,
    pub eta_minutes: u64,
    pub hourly_rate: String,
    pub availability: String,
    pub recommended: bool,
}

impl WorkerView {
    fn new(worker: &WorkerMatch, recommended: bool) -> Self {
        Self {
            worker_id: worker.worker_id.clone(),
            name: worker.name.clone(),
            skills: parse_skills(&worker.skills),
            match_score: format_percentage(worker.match_score),
            distance: format_distance(worker.distance),
            eta_minutes: worker.eta_minutes.ceil() as u64,
            hourly_rate: format_currency(worker.hourly_rate),
            availability: worker.availability.clone(),
            recommended,
        }
    }
}

/// Format worker matches as a table, recommended candidate first
pub fn format_workers_table(matches: &WorkerMatches) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Worker", "Name", "Match", "Distance", "ETA", "Rate", "Availability",
    ]);

    for worker in &matches.matches {
        let recommended = worker.worker_id == matches.recommended.worker_id;
        let view = WorkerView::new(worker, recommended);
        let name = if recommended {
            format!("{} {}", view.name, "(recommended)".green())
        } else {
            view.name.clone()
        };
        table.add_row(vec![
            Cell::new(&view.worker_id),
            Cell::new(name),
            Cell::new(&view.match_score),
            Cell::new(&view.distance),
            Cell::new(format!("{} min", view.eta_minutes)),
            Cell::new(&view.hourly_rate),
            Cell::new(&view.availability),
        ]);
    }

    table.to_string()
}

/// Format worker matches as JSON
pub fn format_workers_json(matches: &WorkerMatches) -> String {
    let views: Vec<WorkerView> = matches
        .matches
        .iter()
        .map(|w| WorkerView::new(w, w.worker_id == matches.recommended.worker_id))
        .collect();
    serde_json::to_string_pretty(&json!({
        "recommended": matches.recommended.worker_id,
        "matches": views
    }))
    .unwrap_or_default()
}

/// Render a scraped table in source column order
pub fn format_scraped_table(parsed: &ParsedTable) -> String {
    if parsed.is_empty() {
        return "No rows found".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        parsed
            .headers
            .iter()
            .map(|h| format_name(h))
            .collect::<Vec<_>>(),
    );

    for row in &parsed.rows {
        table.add_row(
            parsed
                .headers
                .iter()
                .map(|h| Cell::new(row.get(h).map(String::as_str).unwrap_or("")))
                .collect::<Vec<_>>(),
        );
    }

    table.to_string()
}

/// Format scraped rows as JSON
pub fn format_scraped_json(parsed: &ParsedTable) -> String {
    serde_json::to_string_pretty(&json!({ "rows": parsed.rows })).unwrap_or_default()
}
