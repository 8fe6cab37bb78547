use std::sync::Arc;

use crate::modules::calendar::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::calendar::core::event::Event;
use crate::modules::calendar::core::ports::EventStore;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryEventStore::new()))
}

pub async fn make_seeded_state(events: Vec<Event>) -> AppState {
    let store = InMemoryEventStore::new();
    for event in events {
        store.create(event).await.expect("seeding failed");
    }
    AppState::new(Arc::new(store))
}
