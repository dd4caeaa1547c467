pub mod feedback_ops;
pub mod plan_ops;

use chrono::{DateTime, Utc};

use archon_core::errors::ArchonResult;

use crate::to_storage_err;

pub(crate) fn parse_timestamp(raw: &str) -> ArchonResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {raw:?}: {e}")))
}
