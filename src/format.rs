//! Display formatting helpers.
//!
//! The extent of local "computation" in this system: currency, percentage,
//! relative time, name casing and distance formatting for terminal views.
//! All of it is presentation-only; the underlying records pass through
//! unchanged.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Format a numeric value as a dollar amount with two decimal places.
///
/// ```
/// assert_eq!(foreman::format::format_currency(12.5), "$12.50");
/// ```
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a decimal fraction as a whole percentage (nearest integer).
///
/// ```
/// assert_eq!(foreman::format::format_percentage(0.4285), "43%");
/// ```
pub fn format_percentage(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

/// Format a timestamp as relative time ("2 hours ago").
///
/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DDTHH:MM:SS` naive
/// datetimes (the upstream sends the latter, interpreted as UTC). Inputs
/// that parse as neither are returned unchanged.
pub fn format_relative_time(timestamp: &str) -> String {
    let Some(then) = parse_timestamp(timestamp) else {
        return timestamp.to_string();
    };

    let seconds = (Utc::now() - then).num_seconds();
    relative_from_seconds(seconds)
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

fn relative_from_seconds(seconds: i64) -> String {
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86400)
    }
}

/// Convert a snake_case identifier into Title Case for display
/// ("breaker_panel" → "Breaker Panel").
pub fn format_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a distance in meters as miles with one decimal place.
pub fn format_distance(meters: f64) -> String {
    format!("{:.1} miles", meters / 1609.34)
}

/// Split a semicolon-joined skill string into individual skills, dropping
/// empty segments.
pub fn parse_skills(skills: &str) -> Vec<String> {
    skills
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
