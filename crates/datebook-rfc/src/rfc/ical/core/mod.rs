mod date;

pub use date::{format_basic_date, format_utc_stamp, parse_iso_date};
