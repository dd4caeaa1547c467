//! PRAGMA configuration applied to every SQLite connection.

use archon_core::config::StorageConfig;
use archon_core::errors::ArchonResult;
use rusqlite::Connection;

use crate::to_storage_err;

/// Writer pragmas: journal mode, sync level, cache, busy timeout, foreign keys.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> ArchonResult<()> {
    let journal = if config.wal_mode { "WAL" } else { "DELETE" };
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = {journal};
        PRAGMA synchronous = NORMAL;
        PRAGMA mmap_size = {mmap};
        PRAGMA cache_size = {cache};
        PRAGMA busy_timeout = {busy};
        PRAGMA foreign_keys = ON;
        ",
        mmap = config.mmap_size,
        cache = config.cache_size,
        busy = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Reader pragmas. Skips write-side settings.
pub fn apply_read_pragmas(conn: &Connection, config: &StorageConfig) -> ArchonResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA query_only = ON;
        PRAGMA mmap_size = {mmap};
        PRAGMA cache_size = {cache};
        PRAGMA busy_timeout = {busy};
        PRAGMA temp_store = MEMORY;
        ",
        mmap = config.mmap_size,
        cache = config.cache_size,
        busy = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Whether WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> ArchonResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
