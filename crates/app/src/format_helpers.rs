//! Date formatting for tables and log entries.
//!
//! The API sends plain `YYYY-MM-DD` dates and ISO-8601 timestamps with or
//! without an offset. Anything unparseable is shown as received.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
}

/// "2026-01-20" or a timestamp on that day → "Jan 20, 2026".
pub fn format_date_human(value: &str) -> String {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(value).map(|dt| dt.date()));
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// "2026-01-20T21:35:00" → "Jan 20, 2026 9:35 PM". Date-only input keeps
/// the date-only form.
pub fn format_datetime_human(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => format_date_human(value),
    }
}
