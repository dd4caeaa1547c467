//! # archon-storage
//!
//! SQLite persistence: plans keyed by id (with the description they were built
//! from) and the append-only feedback log with acknowledgement marks.
//! One serialized writer connection, a pool of WAL readers.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

use archon_core::errors::{ArchonError, StorageError};

pub use engine::StorageEngine;

/// Wrap a message as a storage error.
pub fn to_storage_err(message: impl Into<String>) -> ArchonError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
