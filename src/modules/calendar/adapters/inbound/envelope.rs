// JSON envelope shared by every calendar endpoint.
//
// - Success: {"result": "...", "events": [...]}
// - Failure: {"error": "..."}
//
// Input errors and domain-rule errors map to 400. Failing to encode a success
// envelope maps to 500.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::calendar::core::event::{Event, ValidationError};
use crate::modules::calendar::core::ports::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to encode response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Decode(_)
            | ApiError::Parse(_)
            | ApiError::Validation(_)
            | ApiError::Store(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Decode(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Parse(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "failed to build response");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub result: String,
    pub events: Vec<Event>,
}

/// Successful outcome of a handler, encoded on the way out.
#[derive(Debug)]
pub struct Success {
    status: StatusCode,
    envelope: Envelope,
}

impl Success {
    pub fn new(status: StatusCode, result: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            status,
            envelope: Envelope {
                result: result.into(),
                events,
            },
        }
    }

    pub fn ok(result: impl Into<String>, events: Vec<Event>) -> Self {
        Self::new(StatusCode::OK, result, events)
    }

    pub fn created(result: impl Into<String>, events: Vec<Event>) -> Self {
        Self::new(StatusCode::CREATED, result, events)
    }
}

impl IntoResponse for Success {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.envelope) {
            Ok(body) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(err) => ApiError::from(err).into_response(),
        }
    }
}

pub type ApiResult = Result<Success, ApiError>;
