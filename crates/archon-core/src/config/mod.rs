//! Configuration for every Archon subsystem.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields the
//! compiled defaults from [`defaults`].

pub mod calibration_config;
pub mod defaults;
pub mod elaboration_config;
pub mod encoder_config;
pub mod ensemble_config;
pub mod feedback_config;
pub mod observability_config;
pub mod storage_config;
pub mod synthesis_config;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use calibration_config::CalibrationConfig;
pub use elaboration_config::ElaborationConfig;
pub use encoder_config::EncoderConfig;
pub use ensemble_config::EnsembleConfig;
pub use feedback_config::FeedbackConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
pub use synthesis_config::SynthesisConfig;

use crate::errors::{ArchonError, ArchonResult};
use crate::models::Pattern;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchonConfig {
    pub encoder: EncoderConfig,
    pub ensemble: EnsembleConfig,
    pub calibration: CalibrationConfig,
    pub synthesis: SynthesisConfig,
    pub elaboration: ElaborationConfig,
    pub storage: StorageConfig,
    pub feedback: FeedbackConfig,
    pub observability: ObservabilityConfig,
}

impl ArchonConfig {
    /// Parse and validate a TOML document. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> ArchonResult<Self> {
        let config: ArchonConfig = toml::from_str(toml_str)
            .map_err(|e| ArchonError::ConfigError(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional file, then apply `ARCHON_*` environment overrides.
    ///
    /// A missing `path` means compiled defaults. A path that does not exist is
    /// an error.
    pub fn load(path: Option<&Path>) -> ArchonResult<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    ArchonError::ConfigError(format!("cannot read {}: {e}", path.display()))
                })?;
                toml::from_str(&content).map_err(|e| {
                    ArchonError::ConfigError(format!("invalid TOML in {}: {e}", path.display()))
                })?
            }
            None => ArchonConfig::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("ARCHON_DB_PATH") {
            self.storage.db_path = v;
        }
        if let Ok(v) = std::env::var("ARCHON_ARTIFACTS_DIR") {
            self.ensemble.artifacts_dir = v;
        }
        if let Ok(v) = std::env::var("ARCHON_ELABORATION_URL") {
            self.elaboration.base_url = v;
        }
        if let Ok(v) = std::env::var("ARCHON_ELABORATION_MODEL") {
            self.elaboration.model = v;
        }
    }

    /// Reject inconsistent values.
    pub fn validate(&self) -> ArchonResult<()> {
        fn fail(field: &str, message: &str) -> ArchonResult<()> {
            Err(ArchonError::ConfigError(format!("{field}: {message}")))
        }
        fn unit(field: &str, value: f64) -> ArchonResult<()> {
            if !(0.0..=1.0).contains(&value) {
                return fail(field, "must be between 0.0 and 1.0");
            }
            Ok(())
        }
        fn range(field: &str, floor: f64, ceiling: f64) -> ArchonResult<()> {
            if !floor.is_finite() || !ceiling.is_finite() || ceiling <= floor {
                return fail(field, "ceiling must be finite and greater than floor");
            }
            Ok(())
        }

        if self.encoder.embedding_dims == 0 {
            return fail("encoder.embedding_dims", "must be greater than 0");
        }
        if self.encoder.max_tokens == 0 {
            return fail("encoder.max_tokens", "must be greater than 0");
        }
        if self.ensemble.component_top_k == 0 {
            return fail("ensemble.component_top_k", "must be greater than 0");
        }

        let c = &self.calibration;
        range("calibration.margin", c.margin_floor, c.margin_ceiling)?;
        range(
            "calibration.decisiveness",
            c.decisiveness_floor,
            c.decisiveness_ceiling,
        )?;
        range("calibration.variance", c.variance_floor, c.variance_ceiling)?;
        unit("calibration.low_confidence_threshold", c.low_confidence_threshold)?;

        let s = &self.synthesis;
        unit("synthesis.inclusion_threshold", s.inclusion_threshold)?;
        if !(0.0..=100.0).contains(&s.risk_low_upper)
            || !(0.0..=100.0).contains(&s.risk_high_lower)
            || s.risk_low_upper > s.risk_high_lower
        {
            return fail(
                "synthesis.risk_low_upper",
                "bucket boundaries must satisfy 0 <= low_upper <= high_lower <= 100",
            );
        }
        if s.variance_ceiling.is_nan() || s.variance_ceiling < 0.0 {
            return fail("synthesis.variance_ceiling", "must be non-negative");
        }
        let mut seen = HashSet::new();
        if s.pattern_priority.iter().any(|p| !seen.insert(*p)) {
            return fail("synthesis.pattern_priority", "contains duplicates");
        }
        for (name, kinds) in &s.default_components {
            if name.parse::<Pattern>().is_err() {
                return fail("synthesis.default_components", "unknown pattern key");
            }
            if kinds.is_empty() || kinds.iter().any(|k| k.is_empty()) {
                return fail(
                    "synthesis.default_components",
                    "each pattern needs at least one non-empty component",
                );
            }
        }

        if self.elaboration.timeout_ms == 0 {
            return fail("elaboration.timeout_ms", "must be greater than 0");
        }
        if self.elaboration.max_rationale_chars == 0 {
            return fail("elaboration.max_rationale_chars", "must be greater than 0");
        }

        if self.storage.read_pool_size == 0 {
            return fail("storage.read_pool_size", "must be greater than 0");
        }

        let f = &self.feedback;
        if f.drain_batch_size == 0 {
            return fail("feedback.drain_batch_size", "must be greater than 0");
        }
        if !(1..=5).contains(&f.confirm_min_rating) {
            return fail("feedback.confirm_min_rating", "must be between 1 and 5");
        }
        Ok(())
    }
}
