use datebook_db::{
    db::Store,
    model::event::{Event, EventId, NewEvent},
};
use datebook_rfc::rfc::ical::core::parse_iso_date;

use crate::error::{ServiceError, ServiceResult};

/// Fields supplied by the owner when creating an event.
#[derive(Debug, Clone, Default)]
pub struct NewEventInput {
    pub title: String,
    /// ISO `YYYY-MM-DD`
    pub date: String,
    pub time: Option<String>,
    pub description: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// ## Summary
/// Creates an event for `owner` and appends it to their index.
///
/// ## Errors
/// Returns `ValidationError` for a blank title and a parse error for a date
/// that is not `YYYY-MM-DD`.
#[tracing::instrument(skip(store, input), fields(title = %input.title, date = %input.date))]
pub async fn create_event(store: &Store, owner: &str, input: NewEventInput) -> ServiceResult<Event> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ServiceError::ValidationError("Title is required".to_string()));
    }
    let date = parse_iso_date(&input.date)?;

    let event = store
        .insert_event(NewEvent {
            owner: owner.to_string(),
            title: title.to_string(),
            date,
            time: non_blank(input.time),
            description: non_blank(input.description),
        })
        .await;

    tracing::info!(event_id = %event.id, "Event created");
    Ok(event)
}

/// ## Summary
/// Deletes `id` if it belongs to `owner`.
///
/// Unknown or foreign ids are ignored so callers cannot probe for events
/// owned by other users. Returns whether an event was removed.
#[tracing::instrument(skip(store))]
pub async fn delete_event(store: &Store, owner: &str, id: &EventId) -> bool {
    let removed = store.remove_event(owner, id).await;
    if removed {
        tracing::info!("Event deleted");
    } else {
        tracing::debug!("Delete ignored, event not found for owner");
    }
    removed
}

/// ## Errors
/// Returns `NotFound` if the event does not exist or belongs to someone else.
pub async fn get_event(store: &Store, owner: &str, id: &EventId) -> ServiceResult<Event> {
    Ok(store.event_for_owner(owner, id).await?)
}
