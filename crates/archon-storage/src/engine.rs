//! StorageEngine: owns the ConnectionPool, runs migrations at startup, and
//! implements IPlanStore + IFeedbackStore.

use std::path::Path;

use archon_core::config::StorageConfig;
use archon_core::errors::ArchonResult;
use archon_core::models::{ArchitecturePlan, Correction, FeedbackRecord, ProjectDescription};
use archon_core::traits::{IFeedbackStore, IPlanStore};

use crate::migrations;
use crate::pool::{pragmas, ConnectionPool};
use crate::queries::{feedback_ops, plan_ops};

/// Path value that selects an in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

pub struct StorageEngine {
    pool: ConnectionPool,
    /// File-backed mode reads through the pool. In-memory mode routes reads
    /// through the writer, since in-memory readers are isolated databases.
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> ArchonResult<Self> {
        if config.db_path == IN_MEMORY_PATH {
            Self::open_in_memory_with(config)
        } else {
            Self::open_with(Path::new(&config.db_path), config)
        }
    }

    /// Open a file-backed engine with default pool settings.
    pub fn open(path: &Path) -> ArchonResult<Self> {
        Self::open_with(path, &StorageConfig::default())
    }

    pub fn open_with(path: &Path, config: &StorageConfig) -> ArchonResult<Self> {
        let pool = ConnectionPool::open(path, config)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        let wal = engine.journal_is_wal()?;
        if config.wal_mode && !wal {
            tracing::warn!(path = %path.display(), "WAL requested but journal mode did not switch");
        }
        tracing::info!(path = %path.display(), readers = engine.pool.readers.size(), wal, "storage opened");
        Ok(engine)
    }

    /// In-memory engine for tests and throwaway runs.
    pub fn open_in_memory() -> ArchonResult<Self> {
        Self::open_in_memory_with(&StorageConfig::default())
    }

    fn open_in_memory_with(config: &StorageConfig) -> ArchonResult<Self> {
        let pool = ConnectionPool::open_in_memory(config)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> ArchonResult<()> {
        self.pool.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    /// Whether the writer connection is in WAL journal mode.
    pub fn journal_is_wal(&self) -> ArchonResult<bool> {
        self.pool.writer.with_conn(pragmas::verify_wal_mode)
    }

    pub fn schema_version(&self) -> ArchonResult<u32> {
        self.pool
            .writer
            .with_conn(|conn| Ok(migrations::current_version(conn)?))
    }

    pub fn plan_count(&self) -> ArchonResult<usize> {
        self.with_reader(plan_ops::count_plans)
    }

    fn with_reader<F, T>(&self, f: F) -> ArchonResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> ArchonResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f)
        }
    }
}

impl IPlanStore for StorageEngine {
    fn save_plan(
        &self,
        plan: &ArchitecturePlan,
        description: &ProjectDescription,
    ) -> ArchonResult<()> {
        self.pool
            .writer
            .with_conn(|conn| plan_ops::insert_plan(conn, plan, description))
    }

    fn get_plan(&self, plan_id: &str) -> ArchonResult<Option<ArchitecturePlan>> {
        self.with_reader(|conn| plan_ops::get_plan(conn, plan_id))
    }

    fn get_plan_with_description(
        &self,
        plan_id: &str,
    ) -> ArchonResult<Option<(ArchitecturePlan, ProjectDescription)>> {
        self.with_reader(|conn| plan_ops::get_plan_with_description(conn, plan_id))
    }
}

impl IFeedbackStore for StorageEngine {
    fn append_feedback(
        &self,
        plan_id: &str,
        correction: &Correction,
    ) -> ArchonResult<FeedbackRecord> {
        self.pool
            .writer
            .with_conn(|conn| feedback_ops::append_feedback(conn, plan_id, correction))
    }

    fn fetch_pending(
        &self,
        after_seq: i64,
        up_to_seq: i64,
        limit: usize,
    ) -> ArchonResult<Vec<FeedbackRecord>> {
        self.with_reader(|conn| feedback_ops::fetch_pending(conn, after_seq, up_to_seq, limit))
    }

    fn max_seq(&self) -> ArchonResult<i64> {
        self.with_reader(feedback_ops::max_seq)
    }

    fn pending_count(&self) -> ArchonResult<usize> {
        self.with_reader(feedback_ops::pending_count)
    }

    fn acknowledge(&self, through_seq: i64) -> ArchonResult<usize> {
        self.pool
            .writer
            .with_conn(|conn| feedback_ops::acknowledge(conn, through_seq))
    }
}
