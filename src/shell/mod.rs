// Composition root for the calendar service.
//
// Responsibilities
// - Read config from the environment.
// - Wire the in-memory event store into the HTTP handlers.
// - Wrap the router in the request tracing layer.

pub mod config;
pub mod http;
pub mod state;
