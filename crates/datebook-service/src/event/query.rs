//! Per-user event queries over the User-Event Index.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use datebook_db::{db::Store, model::event::Event};
use datebook_rfc::rfc::ical::core::parse_iso_date;

use crate::error::ServiceResult;

/// Events grouped by date. Within a date, index-insertion order is kept.
pub type EventsByDate = BTreeMap<NaiveDate, Vec<Event>>;

/// A user's events both grouped by date and as a flat list, newest date first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOverview {
    pub events_by_date: EventsByDate,
    pub events: Vec<Event>,
}

fn group_by_date(events: Vec<Event>) -> EventsByDate {
    let mut grouped = EventsByDate::new();
    for event in events {
        grouped.entry(event.date).or_default().push(event);
    }
    grouped
}

/// ## Summary
/// All of `owner`'s events keyed by date.
pub async fn events_by_date(store: &Store, owner: &str) -> EventsByDate {
    group_by_date(store.events_for_owner(owner).await)
}

/// ## Summary
/// `owner`'s events on one `YYYY-MM-DD` date, in insertion order.
///
/// ## Errors
/// Returns a parse error if `date` is not an ISO calendar date.
pub async fn events_on_date(store: &Store, owner: &str, date: &str) -> ServiceResult<Vec<Event>> {
    let date = parse_iso_date(date)?;
    Ok(store
        .events_for_owner(owner)
        .await
        .into_iter()
        .filter(|event| event.date == date)
        .collect())
}

/// ## Summary
/// Grouped events plus the flat list: dates descending, insertion order
/// within a date.
pub async fn event_overview(store: &Store, owner: &str) -> EventOverview {
    let events_by_date = events_by_date(store, owner).await;
    let events = events_by_date.values().rev().flatten().cloned().collect();

    EventOverview {
        events_by_date,
        events,
    }
}
