// ABOUTME: The DurableStore, owner of the canonical in-memory message log and its snapshot file.
// ABOUTME: Serializes all appends, reads, and flushes behind one mutex; every acknowledged append is on disk.

use std::path::{Path, PathBuf};

use anonboard_core::Message;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::snapshot::{load_snapshot, write_snapshot};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt snapshot at {}: {source}", .path.display())]
    CorruptSnapshot {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The process-wide message store. Holds the canonical message log in memory
/// and mirrors it to a single snapshot file. The mutex covers the critical
/// section "mutate in-memory log, then rewrite snapshot", so reads never
/// observe a half-applied append and flushes never interleave.
#[derive(Debug)]
pub struct DurableStore {
    path: PathBuf,
    log: Mutex<Vec<Message>>,
}

impl DurableStore {
    /// Open the store, hydrating the log from the snapshot file at `path`.
    /// A missing file starts an empty log. An unparseable file is fatal;
    /// startup must not silently discard history. Creates parent directories
    /// so the first flush can succeed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let messages = match load_snapshot(path)? {
            Some(messages) => {
                tracing::info!("loaded {} messages from {}", messages.len(), path.display());
                messages
            }
            None => {
                tracing::info!("no snapshot at {}, starting empty", path.display());
                Vec::new()
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            log: Mutex::new(messages),
        })
    }

    /// Returns the path to the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a message with a server-assigned timestamp and persist the full
    /// log before returning. If the snapshot write fails, the in-memory push
    /// is rolled back and the error propagates, so the caller never
    /// acknowledges a message that is not on disk.
    pub async fn append(&self, text: String) -> Result<Message, StoreError> {
        let mut log = self.log.lock().await;

        let timestamp = clamp_monotonic(Utc::now(), log.last().map(|m| m.timestamp));
        let message = Message::new(text, timestamp);

        log.push(message.clone());
        if let Err(e) = write_snapshot(&self.path, &log) {
            log.pop();
            return Err(e);
        }

        Ok(message)
    }

    /// Return a copy of the current log in append order.
    pub async fn list(&self) -> Vec<Message> {
        self.log.lock().await.clone()
    }

    /// Return the current log length.
    pub async fn count(&self) -> usize {
        self.log.lock().await.len()
    }

    /// Rewrite the snapshot file from the current log. Used by the shutdown
    /// path; takes the same lock as appends, so it cannot interleave with one.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let log = self.log.lock().await;
        write_snapshot(&self.path, &log)
    }
}

/// Timestamps must be monotonically non-decreasing across appends even if the
/// wall clock steps backwards. A regression is clamped to the previous
/// message's timestamp.
fn clamp_monotonic(now: DateTime<Utc>, last: Option<DateTime<Utc>>) -> DateTime<Utc> {
    match last {
        Some(prev) if prev > now => prev,
        _ => now,
    }
}
