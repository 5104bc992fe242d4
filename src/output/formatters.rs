//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Parse a server timestamp.
///
/// Accepts RFC 3339 and naive ISO 8601 (`2025-01-15T12:00:00.123456`, with
/// `T` or a space), the latter taken as UTC.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Format a server timestamp as local date/time.
///
/// Unparseable input is returned unchanged.
///
/// # Example output
/// `01/15/2025 14:30 PST`
pub fn format_timestamp_local(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => {
            let local = dt.with_timezone(&Local);
            let date_time = local.format("%m/%d/%Y %H:%M").to_string();
            let tz_abbrev = offset_to_tz_abbrev(local.offset().local_minus_utc());
            format!("{} {}", date_time, tz_abbrev)
        }
        None => timestamp.to_string(),
    }
}

/// Convert UTC offset (seconds) to timezone abbreviation.
///
/// Maps common UTC offsets to standard timezone abbreviations. Falls back to
/// `UTC+N` format for uncommon offsets.
pub fn offset_to_tz_abbrev(offset_secs: i32) -> String {
    let offset_hours = offset_secs / 3600;
    let abbrev = match offset_hours {
        -10 => "HST",
        -9 => "AKST",
        -8 => "PST",
        -7 => "MST",
        -6 => "CST",
        -5 => "EST",
        -4 => "AST",
        -3 => "ART",
        0 => "UTC",
        1 => "CET",
        2 => "EET",
        3 => "MSK",
        9 => "JST",
        10 => "AEST",
        12 => "NZST",
        _ => return format!("UTC{:+}", offset_hours),
    };
    abbrev.to_string()
}
