//! iCalendar serialization (RFC 5545).
//!
//! - Escape: TEXT value escaping
//! - Fold: Content line folding at 75 octets
//! - Export: Single-event VCALENDAR documents

mod escape;
mod export;
mod fold;

pub use escape::escape_text;
pub use export::{VEvent, export_event};
pub use fold::fold_line;
