//! HTTP boundary for the AM Estate backend
//!
//! Maps incoming requests to service calls and serializes results. All
//! error responses share the `{ success, statusCode, message }` envelope.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
