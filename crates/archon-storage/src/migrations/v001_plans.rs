//! v001: plans table.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS plans (
    id                TEXT PRIMARY KEY,
    created_at        TEXT NOT NULL,
    pattern           TEXT NOT NULL,
    model_fingerprint TEXT NOT NULL,
    input_digest      TEXT NOT NULL,
    plan_json         TEXT NOT NULL,
    description_json  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_plans_created ON plans(created_at);
CREATE INDEX IF NOT EXISTS idx_plans_pattern ON plans(pattern);
";
