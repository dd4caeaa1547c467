use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Hashed embedding width.
    pub embedding_dims: usize,
    /// Descriptions with more tokens than this are rejected.
    pub max_tokens: usize,
    /// Tokens shorter than this are dropped from the embedding.
    pub min_token_len: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            embedding_dims: defaults::DEFAULT_EMBEDDING_DIMS,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            min_token_len: defaults::DEFAULT_MIN_TOKEN_LEN,
        }
    }
}
