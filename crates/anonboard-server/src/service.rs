// ABOUTME: The MessageService, a transport-independent façade over the durable store.
// ABOUTME: Validates input before it reaches the store; holds no state of its own.

use std::sync::Arc;

use anonboard_core::Message;
use anonboard_store::{DurableStore, StoreError};
use thiserror::Error;

/// Errors surfaced by the message service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("message text is missing or empty")]
    Validation,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Validates submissions and exposes append/list/count independent of the
/// HTTP transport. Cheap to clone; all clones share the same store.
#[derive(Clone)]
pub struct MessageService {
    store: Arc<DurableStore>,
}

impl MessageService {
    /// Create a service over the given store.
    pub fn new(store: Arc<DurableStore>) -> Self {
        Self { store }
    }

    /// Validate and append a message. Fails with `ServiceError::Validation`
    /// when the text is absent or blank; the stored text is otherwise kept
    /// verbatim. A store failure means the message was NOT received.
    pub async fn submit(&self, raw_text: Option<String>) -> Result<Message, ServiceError> {
        let text = raw_text.ok_or(ServiceError::Validation)?;
        if text.trim().is_empty() {
            return Err(ServiceError::Validation);
        }

        Ok(self.store.append(text).await?)
    }

    /// All messages in append order.
    pub async fn all_messages(&self) -> Vec<Message> {
        self.store.list().await
    }

    /// Total number of messages.
    pub async fn total_count(&self) -> usize {
        self.store.count().await
    }

    /// Write the current log to disk. Used by the shutdown path.
    pub async fn flush(&self) -> Result<(), StoreError> {
        self.store.flush().await
    }
}
