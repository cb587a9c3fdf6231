//! Event lifecycle (create, delete, lookup) and per-user queries.

pub mod query;
pub mod service;

pub use query::{EventOverview, EventsByDate, event_overview, events_by_date, events_on_date};
pub use service::{NewEventInput, create_event, delete_event, get_event};
