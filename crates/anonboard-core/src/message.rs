// ABOUTME: Defines the Message struct, the single record type of the message board.
// ABOUTME: Messages are immutable once created; the server owns timestamp assignment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single posted message. The text is stored verbatim as the sender
/// supplied it; the timestamp is assigned by the server at append time and
/// serializes as an RFC 3339 UTC string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with the given text, timestamped at the given instant.
    pub fn new(text: String, timestamp: DateTime<Utc>) -> Self {
        Self { text, timestamp }
    }
}
