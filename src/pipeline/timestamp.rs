//! Lenient timestamp parsing
//!
//! Asset timestamps arrive as free-form strings. Anything that cannot be
//! read is reported as `None`, which the rest of the pipeline treats as
//! "older than every valid date".

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parse an ISO 8601-ish timestamp. Values without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Parse a date range bound. A date-only upper bound covers the whole day.
pub fn parse_range_bound(raw: &str, upper: bool) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if upper {
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            let end_of_day = date.and_hms_milli_opt(23, 59, 59, 999)?;
            return Some(Utc.from_utc_datetime(&end_of_day));
        }
    }
    parse_timestamp(raw)
}
