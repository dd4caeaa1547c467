//! Connection pool managing the write connection and read connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use archon_core::config::StorageConfig;
use archon_core::errors::ArchonResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
}

impl ConnectionPool {
    /// Open the writer first so the file and WAL exist before readers attach.
    pub fn open(path: &Path, config: &StorageConfig) -> ArchonResult<Self> {
        let writer = WriteConnection::open(path, config)?;
        let readers = ReadPool::open(path, config)?;
        Ok(Self { writer, readers })
    }

    /// In-memory pool. Readers are isolated databases here, so callers must
    /// route reads through the writer.
    pub fn open_in_memory(config: &StorageConfig) -> ArchonResult<Self> {
        let writer = WriteConnection::open_in_memory(config)?;
        let readers = ReadPool::open_in_memory(config)?;
        Ok(Self { writer, readers })
    }
}
