use crate::modules::calendar::core::ports::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(event_store: Arc<dyn EventStore>) -> Self {
        Self { event_store }
    }
}
