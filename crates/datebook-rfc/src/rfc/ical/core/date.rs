//! iCalendar DATE and DATE-TIME values (RFC 5545 §3.3.4, §3.3.5).

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{RfcError, RfcResult};

/// Length of an extended ISO 8601 calendar date (`YYYY-MM-DD`).
const ISO_DATE_LEN: usize = 10;

/// Parses an extended ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Only the four-digit-year, zero-padded form is accepted, so every valid
/// input maps to exactly one basic-format DATE value.
///
/// ## Errors
/// Returns `ParseError` if the value is not shaped like `YYYY-MM-DD` or does
/// not name a real calendar day.
pub fn parse_iso_date(value: &str) -> RfcResult<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == ISO_DATE_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shaped {
        return Err(RfcError::ParseError(format!(
            "Expected a YYYY-MM-DD date, got '{value}'"
        )));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| RfcError::ParseError(format!("Invalid calendar date '{value}': {e}")))
}

/// Formats a DATE value in basic format (`YYYYMMDD`).
#[must_use]
pub fn format_basic_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Formats a UTC DATE-TIME value (`YYYYMMDDTHHMMSSZ`).
#[must_use]
pub fn format_utc_stamp(stamp: DateTime<Utc>) -> String {
    stamp.format("%Y%m%dT%H%M%SZ").to_string()
}
