use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;

use crate::modules::calendar::adapters::inbound::envelope::{ApiResult, Success};
use crate::modules::calendar::core::event::validate_ids;
use crate::shell::state::AppState;

/// Only the key is needed; any other event fields in the body are ignored.
#[derive(Debug, Deserialize)]
pub struct DeleteEventBody {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub event_id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteEventBody>, JsonRejection>,
) -> ApiResult {
    let Json(body) = body?;
    validate_ids(body.user_id, body.event_id)?;
    let deleted = state
        .event_store
        .delete(body.user_id, body.event_id)
        .await?;
    Ok(Success::ok("event deleted", vec![deleted]))
}
