//! Append-only feedback log operations.

use archon_core::errors::{ArchonError, ArchonResult};
use archon_core::models::{ArchitecturePlan, Correction, FeedbackRecord, ProjectDescription};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

use super::parse_timestamp;
use crate::to_storage_err;

/// Append a correction. The plan lookup and the insert share one IMMEDIATE
/// transaction so a record can never reference a missing plan.
pub fn append_feedback(
    conn: &Connection,
    plan_id: &str,
    correction: &Correction,
) -> ArchonResult<FeedbackRecord> {
    let correction_json = serde_json::to_string(correction)?;
    let id = uuid::Uuid::new_v4().to_string();
    let recorded_at = Utc::now();

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let snapshot: Option<(String, String)> = tx
        .query_row(
            "SELECT plan_json, description_json FROM plans WHERE id = ?1",
            params![plan_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    let Some((plan_json, description_json)) = snapshot else {
        return Err(ArchonError::NotFound {
            plan_id: plan_id.to_string(),
        });
    };

    tx.execute(
        "INSERT INTO feedback (id, plan_id, correction_json, recorded_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![id, plan_id, correction_json, recorded_at.to_rfc3339()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    let seq = tx.last_insert_rowid();

    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;

    let plan: ArchitecturePlan = serde_json::from_str(&plan_json)?;
    let description: ProjectDescription = serde_json::from_str(&description_json)?;
    Ok(FeedbackRecord {
        seq,
        id,
        plan_id: plan_id.to_string(),
        plan,
        description,
        correction: correction.clone(),
        recorded_at,
    })
}

/// Unacknowledged records in `(after_seq, up_to_seq]`, ascending by seq.
pub fn fetch_pending(
    conn: &Connection,
    after_seq: i64,
    up_to_seq: i64,
    limit: usize,
) -> ArchonResult<Vec<FeedbackRecord>> {
    if limit == 0 || up_to_seq <= after_seq {
        return Ok(Vec::new());
    }

    let mut stmt = conn
        .prepare(
            "SELECT f.seq, f.id, f.plan_id, p.plan_json, p.description_json,
                    f.correction_json, f.recorded_at
             FROM feedback f
             JOIN plans p ON p.id = f.plan_id
             WHERE f.acknowledged_at IS NULL AND f.seq > ?1 AND f.seq <= ?2
             ORDER BY f.seq ASC
             LIMIT ?3",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(
            params![after_seq, up_to_seq, limit as i64],
            RawFeedbackRow::from_row,
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        records.push(raw.into_record()?);
    }
    Ok(records)
}

/// Highest seq ever assigned. AUTOINCREMENT keeps this monotonic.
pub fn max_seq(conn: &Connection) -> ArchonResult<i64> {
    conn.query_row("SELECT COALESCE(MAX(seq), 0) FROM feedback", [], |row| {
        row.get(0)
    })
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn pending_count(conn: &Connection) -> ArchonResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM feedback WHERE acknowledged_at IS NULL",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Acknowledge every pending record with `seq <= through_seq`.
pub fn acknowledge(conn: &Connection, through_seq: i64) -> ArchonResult<usize> {
    let changed = conn
        .execute(
            "UPDATE feedback SET acknowledged_at = ?1
             WHERE seq <= ?2 AND acknowledged_at IS NULL",
            params![Utc::now().to_rfc3339(), through_seq],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed)
}

struct RawFeedbackRow {
    seq: i64,
    id: String,
    plan_id: String,
    plan_json: String,
    description_json: String,
    correction_json: String,
    recorded_at: String,
}

impl RawFeedbackRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            seq: row.get(0)?,
            id: row.get(1)?,
            plan_id: row.get(2)?,
            plan_json: row.get(3)?,
            description_json: row.get(4)?,
            correction_json: row.get(5)?,
            recorded_at: row.get(6)?,
        })
    }

    fn into_record(self) -> ArchonResult<FeedbackRecord> {
        Ok(FeedbackRecord {
            seq: self.seq,
            id: self.id,
            plan_id: self.plan_id,
            plan: serde_json::from_str(&self.plan_json)?,
            description: serde_json::from_str(&self.description_json)?,
            correction: serde_json::from_str(&self.correction_json)?,
            recorded_at: parse_timestamp(&self.recorded_at)?,
        })
    }
}
