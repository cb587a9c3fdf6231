//! iCalendar (RFC 5545) text handling for Datebook.

pub mod error;
pub mod rfc;
