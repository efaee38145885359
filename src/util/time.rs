//! Timestamp formatting for server-provided ISO-8601 strings.
//!
//! Times render in the viewer's local zone. On `wasm32` chrono resolves
//! `Local` through the JS `Date` API.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Format `iso` in the viewer's local time zone using a chrono `fmt` string.
///
/// Empty input gives an empty string; input that is not a recognizable
/// timestamp is returned unchanged.
pub fn format_local(iso: &str, fmt: &str) -> String {
    format_in(iso, fmt, &Local)
}

/// Format `iso` in `tz` using a chrono `fmt` string.
pub fn format_in<Tz>(iso: &str, fmt: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let iso = iso.trim();
    if iso.is_empty() {
        return String::new();
    }
    match parse(iso, tz) {
        Some(dt) => dt.format(fmt).to_string(),
        None => iso.to_owned(),
    }
}

fn parse<Tz: TimeZone>(iso: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_str(iso, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(tz));
    }
    // Offset-less date-times are wall-clock times in the viewer's zone.
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(iso, pattern) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    // Bare dates are UTC midnight.
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}
