use axum::extract::{Query, State, rejection::QueryRejection};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::calendar::adapters::inbound::envelope::{ApiError, ApiResult, Success};
use crate::modules::calendar::core::event::{parse_date, validate_user_id};
use crate::modules::calendar::core::period::Period;
use crate::shell::state::AppState;

/// Raw query string values; parsed by hand so bad values surface as parse errors.
#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    pub user_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PeriodQuery {
    pub user_id: i64,
    pub date: NaiveDate,
}

impl TryFrom<ListEventsParams> for PeriodQuery {
    type Error = ApiError;

    fn try_from(params: ListEventsParams) -> Result<Self, Self::Error> {
        let user_id = params
            .user_id
            .ok_or_else(|| ApiError::Parse("missing user_id".into()))?;
        let user_id = user_id
            .parse::<i64>()
            .map_err(|err| ApiError::Parse(format!("invalid user_id {user_id:?}: {err}")))?;
        let date = params
            .date
            .ok_or_else(|| ApiError::Parse("missing date".into()))?;
        let date = parse_date(&date).map_err(|err| ApiError::Parse(err.to_string()))?;
        validate_user_id(user_id)?;
        Ok(Self { user_id, date })
    }
}

async fn list(
    state: AppState,
    params: Result<Query<ListEventsParams>, QueryRejection>,
    period: Period,
) -> ApiResult {
    let Query(params) = params?;
    let query = PeriodQuery::try_from(params)?;
    let events = state
        .event_store
        .query(query.user_id, query.date, period)
        .await?;
    Ok(Success::ok("request completed", events))
}

pub async fn handle_day(
    State(state): State<AppState>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> ApiResult {
    list(state, params, Period::Day).await
}

pub async fn handle_week(
    State(state): State<AppState>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> ApiResult {
    list(state, params, Period::Week).await
}

pub async fn handle_month(
    State(state): State<AppState>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> ApiResult {
    list(state, params, Period::Month).await
}
