//! Display-time formatting for provider timestamps.
//!
//! The departures provider emits ISO-8601-like timestamps, with or
//! without a UTC-offset suffix. Display keeps the local wall-clock value.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Error returned for a timestamp the provider should never emit.
///
/// An unparseable timestamp is a provider contract violation worth
/// surfacing, not something to silently truncate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparseable provider timestamp: {input}")]
pub struct TimeParseError {
    input: String,
}

/// Format a provider timestamp as `YYYY-MM-DD @HH:MM AM|PM`.
///
/// Month, day, hour, and minute are zero-padded to two digits. The hour
/// stays on the 24-hour clock; AM applies when the hour-of-day is below
/// twelve, so midnight reads `@00:05 AM` and evening reads `@19:52 PM`.
///
/// # Examples
///
/// ```
/// use ride_server::domain::format_display_time;
///
/// assert_eq!(
///     format_display_time("2021-08-23T05:35:42").unwrap(),
///     "2021-08-23 @05:35 AM"
/// );
/// assert_eq!(
///     format_display_time("2021-08-22T19:52:00-04:00").unwrap(),
///     "2021-08-22 @19:52 PM"
/// );
/// ```
pub fn format_display_time(timestamp: &str) -> Result<String, TimeParseError> {
    let dt = parse_provider_timestamp(timestamp).ok_or_else(|| TimeParseError {
        input: timestamp.to_string(),
    })?;

    let meridiem = if dt.hour() < 12 { "AM" } else { "PM" };
    Ok(format!(
        "{:04}-{:02}-{:02} @{:02}:{:02} {}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        meridiem
    ))
}

/// Accepts both offset-carrying (RFC 3339) and bare timestamps.
fn parse_provider_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok()
}
