//! The single write connection. Writes are serialized behind one mutex.
//!
//! A blocking `std::sync::Mutex` is used because every write is a short
//! synchronous transaction and callers may already be inside an async runtime.

use std::path::Path;
use std::sync::Mutex;

use archon_core::config::StorageConfig;
use archon_core::errors::{ArchonResult, StorageError};
use rusqlite::Connection;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, config: &StorageConfig) -> ArchonResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory(config: &StorageConfig) -> ArchonResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> ArchonResult<T>
    where
        F: FnOnce(&Connection) -> ArchonResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            details: format!("write connection: {e}"),
        })?;
        f(&guard)
    }
}
