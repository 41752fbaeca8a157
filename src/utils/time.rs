//! Timestamp utilities: parsing persisted timestamps, rendering them for the CLI.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Parse a persisted timestamp. RFC 3339 is what we write; a naive
/// `YYYY-MM-DD HH:MM:SS` (or `T` separated) value is read as local time.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

pub fn parse_timestamp_strict(s: &str) -> AppResult<DateTime<Local>> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// `YYYY-MM-DD HH:MM` for tables; unparseable values are shown as-is.
pub fn short_timestamp(s: &str) -> String {
    parse_timestamp(s)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| s.to_string())
}
