//! Comment date parsing and display
//!
//! Stored dates are kept verbatim. Older data files use ISO timestamps
//! without seconds (`2018-10-25T16:30Z`), which RFC 3339 parsers reject, so
//! parsing tries a short list of formats in order.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Display format: abbreviated month, two-digit day, full year
pub const DISPLAY_FORMAT: &str = "%b %d, %Y";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a stored comment date into UTC
pub fn parse_comment_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a stored date for display; unparsable input is shown as-is
pub fn format_comment_date(raw: &str) -> String {
    match parse_comment_date(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::warn!("Unrecognized comment date: {:?}", raw);
            raw.to_string()
        }
    }
}

/// Timestamp string for a newly stored comment
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
