//! Plan insert and lookup.

use archon_core::errors::ArchonResult;
use archon_core::models::{ArchitecturePlan, ProjectDescription};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use crate::to_storage_err;

/// Insert a plan. Duplicate ids are rejected; plans are immutable once written.
pub fn insert_plan(
    conn: &Connection,
    plan: &ArchitecturePlan,
    description: &ProjectDescription,
) -> ArchonResult<()> {
    let plan_json = serde_json::to_string(plan)?;
    let description_json = serde_json::to_string(description)?;

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let exists: bool = tx
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)",
            params![plan.id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if exists {
        return Err(to_storage_err(format!("plan {} already exists", plan.id)));
    }

    tx.execute(
        "INSERT INTO plans (id, created_at, pattern, model_fingerprint, input_digest,
                            plan_json, description_json)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            plan.id,
            plan.created_at.to_rfc3339(),
            plan.pattern.as_str(),
            plan.model_fingerprint,
            plan.input_digest,
            plan_json,
            description_json,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_plan(conn: &Connection, plan_id: &str) -> ArchonResult<Option<ArchitecturePlan>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT plan_json FROM plans WHERE id = ?1",
            params![plan_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub fn get_plan_with_description(
    conn: &Connection,
    plan_id: &str,
) -> ArchonResult<Option<(ArchitecturePlan, ProjectDescription)>> {
    let raw: Option<(String, String)> = conn
        .query_row(
            "SELECT plan_json, description_json FROM plans WHERE id = ?1",
            params![plan_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match raw {
        Some((plan_json, description_json)) => Ok(Some((
            serde_json::from_str(&plan_json)?,
            serde_json::from_str(&description_json)?,
        ))),
        None => Ok(None),
    }
}

pub fn count_plans(conn: &Connection) -> ArchonResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM plans", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
