//! iCalendar support.
//!
//! - `core`: DATE and DATE-TIME value formatting and ISO date parsing
//! - `build`: text escaping, line folding and single-event export

pub mod build;
pub mod core;
