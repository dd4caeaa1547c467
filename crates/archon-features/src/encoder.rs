//! FeatureEncoder: project description → feature vector.

use archon_core::config::EncoderConfig;
use archon_core::constants::FEATURE_SCHEMA_VERSION;
use archon_core::errors::{ArchonResult, EncodingError};
use archon_core::models::{FeatureSchema, FeatureVector, ProjectDescription};
use tracing::debug;

use crate::attributes::{attribute_names, encode_attributes};
use crate::embedding::HashedEmbedding;

/// Pure, deterministic encoder. Identical input gives a bit-identical vector.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    embedding: HashedEmbedding,
    max_tokens: usize,
    schema: FeatureSchema,
}

impl FeatureEncoder {
    pub fn new(config: &EncoderConfig) -> Self {
        Self {
            embedding: HashedEmbedding::new(config.embedding_dims, config.min_token_len),
            max_tokens: config.max_tokens,
            schema: FeatureSchema {
                version: FEATURE_SCHEMA_VERSION,
                embedding_dims: config.embedding_dims,
                attribute_names: attribute_names(),
            },
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Whitespace-delimited token count used for the budget check.
    pub fn token_count(text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Encode a description. Rejects blank text and over-budget text; never truncates.
    pub fn encode(&self, description: &ProjectDescription) -> ArchonResult<FeatureVector> {
        let text = description.text.trim();
        if text.is_empty() {
            return Err(EncodingError::EmptyText.into());
        }
        let tokens = Self::token_count(text);
        if tokens > self.max_tokens {
            return Err(EncodingError::TokenBudgetExceeded {
                tokens,
                max: self.max_tokens,
            }
            .into());
        }

        let mut terms = self.embedding.terms(text);
        if let Some(domain) = description.hints.domain.as_deref() {
            let domain = domain.trim().to_lowercase();
            if !domain.is_empty() {
                terms.push(format!("domain:{domain}"));
            }
        }

        let mut values = self.embedding.embed_terms(&terms);
        values.extend(encode_attributes(&description.hints));
        debug!(
            tokens,
            terms = terms.len(),
            dims = values.len(),
            "encoded project description"
        );
        Ok(FeatureVector::new(values, self.schema.version))
    }

    /// Cut `text` down to the first `max_tokens` tokens, preserving the
    /// original spacing inside the kept prefix.
    pub fn truncate_to_budget(&self, text: &str) -> String {
        let mut seen = 0;
        let mut in_token = false;
        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                in_token = false;
            } else if !in_token {
                if seen == self.max_tokens {
                    return text[..idx].trim_end().to_string();
                }
                seen += 1;
                in_token = true;
            }
        }
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(max_tokens: usize) -> FeatureEncoder {
        FeatureEncoder::new(&EncoderConfig {
            max_tokens,
            ..Default::default()
        })
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = encoder(10)
            .encode(&ProjectDescription::new("   \n "))
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn over_budget_is_rejected_not_truncated() {
        let err = encoder(3)
            .encode(&ProjectDescription::new("one two three four"))
            .unwrap_err();
        assert!(err.to_string().contains("4 tokens, max 3"));
    }

    #[test]
    fn vector_matches_schema() {
        let enc = encoder(100);
        let v = enc
            .encode(&ProjectDescription::new("inventory service"))
            .unwrap();
        assert_eq!(v.len(), enc.schema().total_dims());
        assert_eq!(v.schema_version(), FEATURE_SCHEMA_VERSION);
    }

    #[test]
    fn truncate_keeps_prefix() {
        let enc = encoder(2);
        assert_eq!(enc.truncate_to_budget("alpha  beta gamma"), "alpha  beta");
        assert_eq!(enc.truncate_to_budget("alpha"), "alpha");
        let cut = enc.truncate_to_budget("a b c d");
        assert!(enc.encode(&ProjectDescription::new(cut)).is_ok());
    }

    #[test]
    fn domain_hint_changes_embedding() {
        let enc = encoder(100);
        let plain = enc.encode(&ProjectDescription::new("records system")).unwrap();
        let mut hinted = ProjectDescription::new("records system");
        hinted.hints.domain = Some("Healthcare".into());
        let hinted = enc.encode(&hinted).unwrap();
        assert_ne!(plain.values(), hinted.values());
    }
}
