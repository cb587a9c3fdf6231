//! Process-lifetime in-memory store.
//!
//! Users, the Event Store (id -> event) and the User-Event Index
//! (username -> ordered ids) live behind one `RwLock`. Every mutation touches
//! the event map and the index inside the same write guard, so callers never
//! observe one updated without the other. Reads clone records out under the
//! read guard and therefore see a consistent snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{DbError, DbResult};
use crate::model::event::{Event, EventId, NewEvent};
use crate::model::user::User;

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<String, User>,
    events: HashMap<EventId, Event>,
    index: HashMap<String, Vec<EventId>>,
}

impl StoreState {
    fn owns(&self, owner: &str, id: &EventId) -> bool {
        self.index
            .get(owner)
            .is_some_and(|ids| ids.iter().any(|owned| owned == id))
    }

    fn fresh_id(&self) -> EventId {
        loop {
            let id = EventId::generate();
            if !self.events.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Shared handle to the in-memory store. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<StoreState>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Registers a new user.
    ///
    /// ## Errors
    /// Returns `DuplicateUser` if the username is already taken.
    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    pub async fn insert_user(&self, user: User) -> DbResult<()> {
        let mut state = self.state.write().await;
        if state.users.contains_key(&user.username) {
            return Err(DbError::DuplicateUser(user.username));
        }
        state.users.insert(user.username.clone(), user);
        Ok(())
    }

    pub async fn find_user(&self, username: &str) -> Option<User> {
        self.state.read().await.users.get(username).cloned()
    }

    /// ## Summary
    /// Inserts an event under a freshly generated id and appends the id to
    /// the owner's index sequence.
    #[tracing::instrument(skip(self, new_event), fields(owner = %new_event.owner))]
    pub async fn insert_event(&self, new_event: NewEvent) -> Event {
        let mut state = self.state.write().await;
        let id = state.fresh_id();
        let event = new_event.into_event(id.clone());

        state
            .index
            .entry(event.owner.clone())
            .or_default()
            .push(id.clone());
        state.events.insert(id, event.clone());

        tracing::trace!(event_id = %event.id, "Event inserted");
        event
    }

    /// ## Summary
    /// Removes an event if, and only if, it exists and belongs to `owner`.
    ///
    /// Returns whether anything was removed.
    #[tracing::instrument(skip(self))]
    pub async fn remove_event(&self, owner: &str, id: &EventId) -> bool {
        let mut state = self.state.write().await;
        if !state.events.contains_key(id) || !state.owns(owner, id) {
            return false;
        }

        state.events.remove(id);
        if let Some(ids) = state.index.get_mut(owner) {
            ids.retain(|owned| owned != id);
        }
        true
    }

    /// ## Summary
    /// Resolves the owner's index sequence against the event map, in
    /// insertion order.
    ///
    /// Ids present in the index but missing from the map are skipped.
    pub async fn events_for_owner(&self, owner: &str) -> Vec<Event> {
        let state = self.state.read().await;
        let Some(ids) = state.index.get(owner) else {
            return Vec::new();
        };

        ids.iter()
            .filter_map(|id| {
                let event = state.events.get(id);
                if event.is_none() {
                    tracing::warn!(owner, event_id = %id, "Indexed event missing from store");
                }
                event.cloned()
            })
            .collect()
    }

    /// ## Summary
    /// Looks up a single event owned by `owner`.
    ///
    /// ## Errors
    /// Returns `NotFound` if the id is unknown or owned by someone else.
    pub async fn event_for_owner(&self, owner: &str, id: &EventId) -> DbResult<Event> {
        let state = self.state.read().await;
        state
            .events
            .get(id)
            .filter(|_| state.owns(owner, id))
            .cloned()
            .ok_or_else(|| DbError::NotFound(format!("Event {id}")))
    }

    pub async fn contains_event(&self, id: &EventId) -> bool {
        self.state.read().await.events.contains_key(id)
    }
}
