//! Single-event VCALENDAR export.

use chrono::{DateTime, NaiveDate, Utc};
use datebook_core::types::IcsTextMode;

use super::escape::escape_text;
use super::fold::fold_line;
use crate::rfc::ical::core::{format_basic_date, format_utc_stamp};

const CALENDAR_VERSION: &str = "2.0";

/// The VEVENT fields written by [`export_event`].
#[derive(Debug, Clone, Copy)]
pub struct VEvent<'a> {
    pub uid: &'a str,
    pub dtstart: NaiveDate,
    pub summary: &'a str,
    /// Written as an empty `DESCRIPTION:` line when blank.
    pub description: &'a str,
}

/// ## Summary
/// Serializes one event into a VCALENDAR document.
///
/// Property order is fixed: `UID`, `DTSTAMP`, `DTSTART`, `SUMMARY`,
/// `DESCRIPTION`. In
/// [`IcsTextMode::Escaped`] TEXT values are escaped and every line is folded
/// and CRLF-terminated; [`IcsTextMode::Literal`] writes the values verbatim
/// joined by `\n` with no trailing newline.
#[must_use]
pub fn export_event(event: &VEvent<'_>, dtstamp: DateTime<Utc>, mode: IcsTextMode) -> String {
    let text = |value: &str| match mode {
        IcsTextMode::Escaped => escape_text(value),
        IcsTextMode::Literal => value.to_string(),
    };

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        format!("VERSION:{CALENDAR_VERSION}"),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.uid),
        format!("DTSTAMP:{}", format_utc_stamp(dtstamp)),
        format!("DTSTART:{}", format_basic_date(event.dtstart)),
        format!("SUMMARY:{}", text(event.summary)),
        format!("DESCRIPTION:{}", text(event.description)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    match mode {
        IcsTextMode::Escaped => lines.iter().map(|line| fold_line(line)).collect(),
        IcsTextMode::Literal => lines.join("\n"),
    }
}
