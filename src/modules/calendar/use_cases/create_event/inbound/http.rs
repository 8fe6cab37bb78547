use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::modules::calendar::adapters::inbound::envelope::{ApiResult, Success};
use crate::modules::calendar::core::event::Event;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Event>, JsonRejection>,
) -> ApiResult {
    let Json(event) = body?;
    event.validate()?;
    state.event_store.create(event.clone()).await?;
    Ok(Success::created("event created", vec![event]))
}
