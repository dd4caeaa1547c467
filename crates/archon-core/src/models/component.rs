use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized component identifier (`database`, `auth`, `vector-db`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ComponentKind(String);

impl ComponentKind {
    pub fn new(raw: &str) -> Self {
        let normalized = raw
            .trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '_')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ComponentKind {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for ComponentKind {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ComponentKind> for String {
    fn from(k: ComponentKind) -> Self {
        k.0
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scored component from the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredComponent {
    pub kind: ComponentKind,
    /// Relevance in [0, 1].
    pub score: f64,
}

/// Deduplicated, ranked component recommendation set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecommendation {
    items: Vec<ScoredComponent>,
}

impl ComponentRecommendation {
    /// Build from raw pairs. Scores are clamped to [0, 1] (non-finite → 0),
    /// duplicate kinds keep their highest score, and the result is ordered by
    /// score descending then kind ascending.
    pub fn new<K: Into<ComponentKind>>(pairs: impl IntoIterator<Item = (K, f64)>) -> Self {
        let mut best: HashMap<ComponentKind, f64> = HashMap::new();
        for (kind, score) in pairs {
            let kind = kind.into();
            if kind.is_empty() {
                continue;
            }
            let score = if score.is_finite() {
                score.clamp(0.0, 1.0)
            } else {
                0.0
            };
            best.entry(kind)
                .and_modify(|s| *s = s.max(score))
                .or_insert(score);
        }
        let mut items: Vec<ScoredComponent> = best
            .into_iter()
            .map(|(kind, score)| ScoredComponent { kind, score })
            .collect();
        items.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.kind.cmp(&b.kind))
        });
        Self { items }
    }

    pub fn items(&self) -> &[ScoredComponent] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keep the `k` highest-ranked items.
    pub fn top_k(mut self, k: usize) -> Self {
        self.items.truncate(k);
        self
    }

    /// Mean of `|2s - 1|`: how far scores sit from the undecided midpoint.
    pub fn mean_decisiveness(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.items.iter().map(|c| (2.0 * c.score - 1.0).abs()).sum();
        sum / self.items.len() as f64
    }
}
