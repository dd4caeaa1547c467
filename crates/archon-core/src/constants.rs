/// Archon version string.
pub const ARCHON_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Feature layout version. Bump whenever the encoder layout changes; model
/// artifacts record the version they were trained against.
pub const FEATURE_SCHEMA_VERSION: u32 = 1;

/// Model artifact file format version.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Tolerance for a pattern distribution summing to 1.
pub const PROBABILITY_EPSILON: f64 = 1e-6;

/// Risk score range.
pub const RISK_MIN: f64 = 0.0;
pub const RISK_MAX: f64 = 100.0;

/// Accepted correction ratings.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
