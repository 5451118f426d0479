// ABOUTME: HTTP server for anonboard, exposing the message board REST API.
// ABOUTME: Uses axum with a shared message service, env config, and graceful-shutdown lifecycle.

pub mod api;
pub mod app_state;
pub mod config;
pub mod lifecycle;
pub mod routes;
pub mod service;

pub use app_state::{AppState, SharedState};
pub use config::{AnonboardConfig, ConfigError};
pub use lifecycle::{ServeError, serve, shutdown_signal};
pub use routes::create_router;
pub use service::{MessageService, ServiceError};
