//! Hashed term-frequency embedding.
//!
//! Terms are hashed into fixed buckets with FNV-1a, weighted by frequency and
//! a log-length IDF approximation, then L2-normalized.

use std::collections::BTreeMap;

/// Deterministic text embedder with a fixed bucket count.
#[derive(Debug, Clone)]
pub struct HashedEmbedding {
    dimensions: usize,
    min_token_len: usize,
}

impl HashedEmbedding {
    pub fn new(dimensions: usize, min_token_len: usize) -> Self {
        Self {
            dimensions,
            min_token_len,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercase alphanumeric terms of at least `min_token_len` chars.
    pub fn terms(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.chars().count() >= self.min_token_len)
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Embed `terms`. Empty input gives the zero vector.
    pub fn embed_terms(&self, terms: &[String]) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if terms.is_empty() || self.dimensions == 0 {
            return vec;
        }

        // Ordered map: accumulation order must not depend on hasher state.
        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for term in terms {
            *tf.entry(term.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in &tf {
            let freq = count / total;
            let idf = 1.0 + (term.chars().count() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += freq * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}
