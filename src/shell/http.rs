use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::modules::calendar::use_cases::create_event::inbound::http as create_http;
use crate::modules::calendar::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::calendar::use_cases::list_events_for_period::inbound::http as list_http;
use crate::modules::calendar::use_cases::update_event::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create_event", post(create_http::handle))
        .route("/update_event", post(update_http::handle))
        .route("/delete_event", post(delete_http::handle))
        .route("/events_for_day", get(list_http::handle_day))
        .route("/events_for_week", get(list_http::handle_week))
        .route("/events_for_month", get(list_http::handle_month))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(log_response),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn log_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    tracing::info!(
        status = response.status().as_u16(),
        ?latency,
        "request served"
    );
}
