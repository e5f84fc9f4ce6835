//! Date utility functions
//!
//! Release dates travel over the wire either as plain `YYYY-MM-DD` strings
//! (what the form sends) or as full timestamps (what the backend stores).
//! This module parses both into calendar dates and formats them for display.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Date format the backend accepts for `releaseDate`
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, RELEASE_DATE_FORMAT)
}

/// Parse a release date as sent by the backend.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (`2010-07-16T00:00:00.000Z`)
/// and naive `YYYY-MM-DDTHH:MM:SS` timestamps. Returns `None` for anything
/// else, including empty strings.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = parse_date(value) {
        return Some(date);
    }

    // Timestamps carry the calendar date of the UTC instant; do not shift
    // to local time or a midnight release lands on the previous day.
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc().date());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    None
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(RELEASE_DATE_FORMAT).to_string()
}

/// Render `date` with `format`, or `None` if the format needs fields a
/// calendar date does not carry (times, offsets) or is malformed
fn try_format(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Format an optional release date with a user-supplied chrono format.
///
/// Falls back to `YYYY-MM-DD` when `format` cannot render a date.
pub fn format_release_date(date: Option<NaiveDate>, format: &str) -> String {
    match date {
        Some(d) => try_format(d, format).unwrap_or_else(|| format_ymd(d)),
        None => "unknown".to_string(),
    }
}

/// Check whether a chrono format string can render a date
pub fn is_valid_date_format(format: &str) -> bool {
    let sample = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or(NaiveDate::MIN);
    !format.is_empty() && try_format(sample, format).is_some()
}

/// Describe how long ago a movie was released, relative to `today`
pub fn describe_release(date: NaiveDate, today: NaiveDate) -> String {
    if date > today {
        return "upcoming".to_string();
    }

    let mut years = today.year() - date.year();
    if (today.month(), today.day()) < (date.month(), date.day()) {
        years -= 1;
    }

    match years {
        0 => "less than a year ago".to_string(),
        1 => "1 year ago".to_string(),
        n => format!("{} years ago", n),
    }
}
