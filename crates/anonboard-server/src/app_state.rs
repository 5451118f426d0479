// ABOUTME: Shared application state for the anonboard HTTP server.
// ABOUTME: Carries the message service handle; constructed once at startup and Arc-shared.

use std::sync::Arc;

use crate::service::MessageService;

/// Shared application state accessible by all axum handlers.
pub struct AppState {
    pub service: MessageService,
}

/// Type alias for the Arc-wrapped state used with axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState around the given message service.
    pub fn new(service: MessageService) -> Self {
        Self { service }
    }
}
