//! v002: append-only feedback log.
//!
//! `seq` uses AUTOINCREMENT so positions are never reused.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS feedback (
    seq             INTEGER PRIMARY KEY AUTOINCREMENT,
    id              TEXT NOT NULL UNIQUE,
    plan_id         TEXT NOT NULL REFERENCES plans(id),
    correction_json TEXT NOT NULL,
    recorded_at     TEXT NOT NULL,
    acknowledged_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_feedback_pending ON feedback(acknowledged_at, seq);
CREATE INDEX IF NOT EXISTS idx_feedback_plan ON feedback(plan_id);
";
