//! Timestamp display for treasury transactions.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%b %d, %Y %H:%M";

/// Format an ISO-8601 timestamp as `Mar 01, 2024 09:30`.
///
/// Accepts RFC 3339 with an offset, naive date-times (as emitted by the
/// backend without a zone) and bare dates. Anything else is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        && let Some(dt) = date.and_hms_opt(0, 0, 0)
    {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}
