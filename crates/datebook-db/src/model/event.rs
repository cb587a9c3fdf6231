use std::fmt;

use serde::{Deserialize, Serialize};

/// Globally unique event identifier.
///
/// Freshly created events get a UUIDv7 string, but any string is accepted so
/// identifiers arriving from request paths can be looked up as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dated calendar entry owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: EventId,
    #[serde(skip_serializing)]
    pub owner: String,
    pub title: String,
    pub date: chrono::NaiveDate,
    pub time: Option<String>,
    pub description: Option<String>,
}

/// Insert struct for creating new events; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub owner: String,
    pub title: String,
    pub date: chrono::NaiveDate,
    pub time: Option<String>,
    pub description: Option<String>,
}

impl NewEvent {
    #[must_use]
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            owner: self.owner,
            title: self.title,
            date: self.date,
            time: self.time,
            description: self.description,
        }
    }
}
