use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Storage format for event timestamps (ISO 8601, second precision, local).
pub const EVENT_TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted input layouts for `parse_event_ts`, tried in order.
const EVENT_TS_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Format an event timestamp for storage.
pub fn format_event_ts(ts: &NaiveDateTime) -> String {
    ts.format(EVENT_TS_FORMAT).to_string()
}

/// Parse a user-supplied event timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]` with either `T` or a space separator,
/// or a bare `YYYY-MM-DD` (interpreted as midnight).
pub fn parse_event_ts(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    for format in EVENT_TS_INPUT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }
    Err(Error::InvalidTimestamp(trimmed.to_string()))
}

/// Parse a filter date (`YYYY-MM-DD`).
pub fn parse_filter_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(trimmed.to_string()))
}

/// Current instant for record bookkeeping fields (RFC3339, UTC).
pub fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Calendar-date portion of a stored event timestamp.
pub fn date_of_ts(ts: &str) -> &str {
    match ts.split_once('T') {
        Some((date, _)) => date,
        None => ts,
    }
}
