//! ICS export of a single owned event.

use chrono::{DateTime, Utc};

use datebook_core::types::IcsTextMode;
use datebook_db::{db::Store, model::event::EventId};
use datebook_rfc::rfc::ical::build::{VEvent, export_event};

use crate::error::ServiceResult;
use crate::event::service::get_event;

/// A rendered `.ics` attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsExport {
    /// Suggested download name, `event_<id>.ics`
    pub filename: String,
    pub body: String,
}

/// ## Summary
/// Renders `owner`'s event `id` as an iCalendar document stamped with `now`.
///
/// ## Errors
/// Returns `NotFound` if the event does not exist or is not owned by `owner`.
#[tracing::instrument(skip(store, now))]
pub async fn export_ics(
    store: &Store,
    owner: &str,
    id: &EventId,
    mode: IcsTextMode,
    now: DateTime<Utc>,
) -> ServiceResult<IcsExport> {
    let event = get_event(store, owner, id).await?;

    let body = export_event(
        &VEvent {
            uid: event.id.as_str(),
            dtstart: event.date,
            summary: &event.title,
            description: event.description.as_deref().unwrap_or_default(),
        },
        now,
        mode,
    );

    Ok(IcsExport {
        filename: format!("event_{}.ics", event.id),
        body,
    })
}
