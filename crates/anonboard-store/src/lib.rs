// ABOUTME: Persistence layer for anonboard, handling message storage and recovery.
// ABOUTME: Provides the durable in-memory message log and atomic snapshot file management.

pub mod snapshot;
pub mod store;

pub use snapshot::{load_snapshot, write_snapshot};
pub use store::{DurableStore, StoreError};
