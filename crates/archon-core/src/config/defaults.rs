// Single source of truth for all default values.

// --- Encoder ---
pub const DEFAULT_EMBEDDING_DIMS: usize = 256;
pub const DEFAULT_MAX_TOKENS: usize = 2_048;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

// --- Ensemble ---
pub const DEFAULT_ARTIFACTS_DIR: &str = "models";
pub const DEFAULT_COMPONENT_TOP_K: usize = 8;

// --- Calibration ---
pub const DEFAULT_MARGIN_FLOOR: f64 = 0.0;
pub const DEFAULT_MARGIN_CEILING: f64 = 0.5;
pub const DEFAULT_DECISIVENESS_FLOOR: f64 = 0.0;
pub const DEFAULT_DECISIVENESS_CEILING: f64 = 0.8;
pub const DEFAULT_VARIANCE_FLOOR: f64 = 0.0;
pub const DEFAULT_CALIBRATION_VARIANCE_CEILING: f64 = 400.0;
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 0.5;

// --- Synthesis ---
pub const DEFAULT_INCLUSION_THRESHOLD: f64 = 0.3;
pub const DEFAULT_RISK_LOW_UPPER: f64 = 35.0;
pub const DEFAULT_RISK_HIGH_LOWER: f64 = 65.0;
pub const DEFAULT_RISK_VARIANCE_CEILING: f64 = 225.0; // std-dev 15
pub const DEFAULT_PATTERN: &str = "monolith";
pub const DEFAULT_PATTERN_PRIORITY: [&str; 6] = [
    "monolith",
    "microservices",
    "event-driven",
    "serverless",
    "data-platform",
    "ml-system",
];

/// Components used when nothing clears the inclusion threshold.
pub const DEFAULT_COMPONENTS: [(&str, &[&str]); 6] = [
    ("monolith", &["api", "database"]),
    ("microservices", &["api-gateway", "service", "database", "queue"]),
    ("event-driven", &["api", "queue", "worker", "database"]),
    ("serverless", &["api-gateway", "functions", "database"]),
    ("data-platform", &["stream", "database", "worker"]),
    ("ml-system", &["api", "ml-service", "vector-db", "database"]),
];

// --- Elaboration ---
pub const DEFAULT_ELABORATION_ENABLED: bool = false;
pub const DEFAULT_ELABORATION_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_ELABORATION_MODEL: &str = "llama3.1";
pub const DEFAULT_ELABORATION_TIMEOUT_MS: u64 = 20_000;
pub const DEFAULT_ELABORATION_MAX_RETRIES: u32 = 1;
pub const DEFAULT_MAX_RATIONALE_CHARS: usize = 4_000;
pub const DEFAULT_ELABORATION_TEMPERATURE: f64 = 0.2;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "archon.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_MMAP_SIZE: u64 = 268_435_456; // 256 MB
pub const DEFAULT_CACHE_SIZE: i64 = -64_000; // 64 MB (negative = KB)
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Feedback ---
pub const DEFAULT_DRAIN_BATCH_SIZE: usize = 100;
pub const DEFAULT_RETRAIN_MIN_RECORDS: usize = 50;
pub const DEFAULT_CONFIRM_MIN_RATING: u8 = 4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
