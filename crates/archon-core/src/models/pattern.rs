use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::PROBABILITY_EPSILON;
use crate::errors::{ArchonError, ArchonResult};

/// Architecture archetype. Closed set; every classifier distribution covers all members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    Monolith,
    Microservices,
    EventDriven,
    Serverless,
    DataPlatform,
    MlSystem,
}

impl Pattern {
    /// Canonical member order. Distribution indices follow this order.
    pub const ALL: [Pattern; 6] = [
        Pattern::Monolith,
        Pattern::Microservices,
        Pattern::EventDriven,
        Pattern::Serverless,
        Pattern::DataPlatform,
        Pattern::MlSystem,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Pattern::Monolith => 0,
            Pattern::Microservices => 1,
            Pattern::EventDriven => 2,
            Pattern::Serverless => 3,
            Pattern::DataPlatform => 4,
            Pattern::MlSystem => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Pattern> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::Monolith => "monolith",
            Pattern::Microservices => "microservices",
            Pattern::EventDriven => "event-driven",
            Pattern::Serverless => "serverless",
            Pattern::DataPlatform => "data-platform",
            Pattern::MlSystem => "ml-system",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = ArchonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Pattern::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| ArchonError::ConfigError(format!("unknown pattern: {s}")))
    }
}

/// Probability distribution over [`Pattern::ALL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPrediction {
    probabilities: [f64; Pattern::COUNT],
}

impl PatternPrediction {
    /// Build from raw non-negative weights, normalizing to sum 1.
    ///
    /// Zero total mass is kept as an all-zero distribution; callers treat that
    /// as degenerate and fall back to the default pattern.
    pub fn from_weights(weights: [f64; Pattern::COUNT]) -> ArchonResult<Self> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ArchonError::ConfigError(format!(
                "pattern weights must be finite and non-negative: {weights:?}"
            )));
        }
        let total: f64 = weights.iter().sum();
        let mut probabilities = [0.0; Pattern::COUNT];
        if total > 0.0 {
            for (p, w) in probabilities.iter_mut().zip(weights) {
                *p = w / total;
            }
        }
        Ok(Self { probabilities })
    }

    /// Build from `(pattern, probability)` pairs. Missing members get 0.
    pub fn from_pairs(pairs: &[(Pattern, f64)]) -> ArchonResult<Self> {
        let mut weights = [0.0; Pattern::COUNT];
        for (pattern, p) in pairs {
            weights[pattern.index()] += p;
        }
        Self::from_weights(weights)
    }

    pub fn probability(&self, pattern: Pattern) -> f64 {
        self.probabilities[pattern.index()]
    }

    pub fn probabilities(&self) -> &[f64; Pattern::COUNT] {
        &self.probabilities
    }

    /// True when there is no usable maximum (all-zero mass).
    pub fn is_degenerate(&self) -> bool {
        let total: f64 = self.probabilities.iter().sum();
        (total - 1.0).abs() > PROBABILITY_EPSILON
    }

    /// Top-1 minus top-2 probability.
    pub fn margin(&self) -> f64 {
        let mut sorted = self.probabilities;
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        sorted[0] - sorted[1]
    }

    /// `(pattern, probability)` pairs, highest probability first.
    pub fn ranked(&self) -> Vec<(Pattern, f64)> {
        let mut pairs: Vec<(Pattern, f64)> = Pattern::ALL
            .into_iter()
            .map(|p| (p, self.probability(p)))
            .collect();
        pairs.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.index().cmp(&b.0.index()))
        });
        pairs
    }
}
