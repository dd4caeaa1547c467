use serde::{Deserialize, Serialize};

use super::defaults;

/// LLM elaboration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElaborationConfig {
    pub enabled: bool,
    /// Ollama-compatible base URL.
    pub base_url: String,
    pub model: String,
    /// Total budget for the elaboration step, retries included.
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub max_rationale_chars: usize,
    pub temperature: f64,
}

impl Default for ElaborationConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ELABORATION_ENABLED,
            base_url: defaults::DEFAULT_ELABORATION_BASE_URL.to_string(),
            model: defaults::DEFAULT_ELABORATION_MODEL.to_string(),
            timeout_ms: defaults::DEFAULT_ELABORATION_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_ELABORATION_MAX_RETRIES,
            max_rationale_chars: defaults::DEFAULT_MAX_RATIONALE_CHARS,
            temperature: defaults::DEFAULT_ELABORATION_TEMPERATURE,
        }
    }
}
