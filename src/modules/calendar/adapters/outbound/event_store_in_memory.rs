// In memory implementation of the EventStore port.
//
// Responsibilities
// - Keep each user's events in one Vec keyed by user id.
// - Serialize all operations behind one store-wide mutex. The guard lives for a
//   single operation and nothing is awaited while it is held.
// - Drop a user's key once their last event is deleted, so "known user" always
//   means "has at least one event".

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::period::Period;
use crate::modules::calendar::core::ports::{EventStore, StoreError};

#[derive(Default)]
pub struct InMemoryEventStore {
    events: Mutex<HashMap<i64, Vec<Event>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(events: &[Event], user_id: i64, event_id: i64) -> Result<usize, StoreError> {
    events
        .iter()
        .position(|event| event.event_id == event_id)
        .ok_or(StoreError::EventNotFound { user_id, event_id })
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, event: Event) -> Result<(), StoreError> {
        let mut guard = self.events.lock().await;
        let events = guard.entry(event.user_id).or_default();
        if events.iter().any(|stored| stored.event_id == event.event_id) {
            return Err(StoreError::DuplicateEvent {
                user_id: event.user_id,
                event_id: event.event_id,
            });
        }
        events.push(event);
        Ok(())
    }

    async fn update(&self, event: Event) -> Result<(), StoreError> {
        let mut guard = self.events.lock().await;
        let user_id = event.user_id;
        let events = guard
            .get_mut(&user_id)
            .ok_or(StoreError::UnknownUser { user_id })?;
        let index = position(events, user_id, event.event_id)?;
        events[index] = event;
        Ok(())
    }

    async fn delete(&self, user_id: i64, event_id: i64) -> Result<Event, StoreError> {
        let mut guard = self.events.lock().await;
        let events = guard
            .get_mut(&user_id)
            .ok_or(StoreError::UnknownUser { user_id })?;
        let index = position(events, user_id, event_id)?;
        // Moves the last event into the freed slot; order is not kept.
        let removed = events.swap_remove(index);
        if events.is_empty() {
            guard.remove(&user_id);
        }
        Ok(removed)
    }

    async fn query(
        &self,
        user_id: i64,
        date: NaiveDate,
        period: Period,
    ) -> Result<Vec<Event>, StoreError> {
        let guard = self.events.lock().await;
        let events = guard
            .get(&user_id)
            .ok_or(StoreError::UnknownUser { user_id })?;
        Ok(events
            .iter()
            .filter(|event| period.contains(date, event.date))
            .cloned()
            .collect())
    }

    async fn count_for_user(&self, user_id: i64) -> usize {
        self.events
            .lock()
            .await
            .get(&user_id)
            .map_or(0, Vec::len)
    }
}
