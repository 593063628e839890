//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats carrying a time of day
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Calendar-date formats. `%B` also accepts the abbreviated month name.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"];

/// Parse a date string in the formats posts are written with.
/// Dates without a time of day are taken at midnight.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

/// Format a date string for display, like "Jan 5, 2024".
///
/// Strings that don't parse as a date are returned unchanged.
pub fn format_date_display(s: &str) -> String {
    match parse_date(s) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => s.to_string(),
    }
}
