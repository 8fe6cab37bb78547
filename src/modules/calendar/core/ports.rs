// Port for the calendar event store.
//
// Responsibilities
// - Define the operations the HTTP handlers need and the domain-rule errors they
//   can fail with.
// - Implementations must serialize every operation against every other one.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::period::Period;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {user_id} doesn't exist")]
    UnknownUser { user_id: i64 },

    #[error("event {event_id} not found for user {user_id}")]
    EventNotFound { user_id: i64, event_id: i64 },

    #[error("event {event_id} already exists for user {user_id}")]
    DuplicateEvent { user_id: i64, event_id: i64 },
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fails with `DuplicateEvent` when `(user_id, event_id)` is taken.
    async fn create(&self, event: Event) -> Result<(), StoreError>;

    /// Replaces the stored record with the same `(user_id, event_id)`.
    async fn update(&self, event: Event) -> Result<(), StoreError>;

    /// Removes a record and hands back the removed copy.
    async fn delete(&self, user_id: i64, event_id: i64) -> Result<Event, StoreError>;

    /// Every event of `user_id` inside `period` around `date`, in store order.
    async fn query(
        &self,
        user_id: i64,
        date: NaiveDate,
        period: Period,
    ) -> Result<Vec<Event>, StoreError>;

    async fn count_for_user(&self, user_id: i64) -> usize;
}
