//! Schema migrations using PRAGMA user_version.

pub mod v001_plans;
pub mod v002_feedback;

use archon_core::errors::StorageError;
use rusqlite::Connection;

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Run all pending migrations, each in its own transaction.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = current_version(conn)?;
    if current > LATEST_VERSION {
        return Err(StorageError::MigrationFailed {
            version: current,
            reason: format!("database schema is newer than this build (max {LATEST_VERSION})"),
        });
    }

    let migrations: &[(&str, u32)] = &[
        (v001_plans::MIGRATION_SQL, 1),
        (v002_feedback::MIGRATION_SQL, 2),
    ];

    for (sql, version) in migrations {
        if current >= *version {
            continue;
        }
        let fail = |e: rusqlite::Error| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        };
        let tx = conn.unchecked_transaction().map_err(fail)?;
        tx.execute_batch(sql).map_err(fail)?;
        tx.pragma_update(None, "user_version", version)
            .map_err(fail)?;
        tx.commit().map_err(fail)?;
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}
