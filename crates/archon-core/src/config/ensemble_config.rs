use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction ensemble configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsembleConfig {
    /// Directory holding `pattern.json`, `components.json`, `risk.json`.
    pub artifacts_dir: String,
    /// Number of components the recommender returns.
    pub component_top_k: usize,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: defaults::DEFAULT_ARTIFACTS_DIR.to_string(),
            component_top_k: defaults::DEFAULT_COMPONENT_TOP_K,
        }
    }
}
