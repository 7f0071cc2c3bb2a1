//! Date Formatting
//!
//! Human-readable creation dates. Timestamps are shown in the offset they
//! were sent with.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Short form used on tiles: `Mar 05, 2024 14:07`
pub const TILE_FORMAT: &str = "%b %d, %Y %H:%M";
/// Long form used in the detail dialog: `March 05, 2024 at 14:07`
pub const DETAIL_FORMAT: &str = "%B %d, %Y at %H:%M";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format a backend timestamp; unparseable input is returned as-is
pub fn format_created(raw: &str, pattern: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(pattern).to_string(),
        None => raw.to_string(),
    }
}
