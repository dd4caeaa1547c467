use serde::{Deserialize, Serialize};

/// Calibrated confidence for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfidence {
    /// Calibrated score in [0, 1].
    pub score: f64,
    /// `score < threshold` for the report's shared threshold.
    pub low: bool,
}

/// Per-prediction calibrated confidence with one shared low-confidence threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub pattern: PredictionConfidence,
    pub components: PredictionConfidence,
    pub risk: PredictionConfidence,
    pub threshold: f64,
}

impl ConfidenceReport {
    /// The one place a score is compared against the threshold.
    pub fn flag(score: f64, threshold: f64) -> PredictionConfidence {
        let score = if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        };
        PredictionConfidence {
            score,
            low: score < threshold,
        }
    }

    pub fn from_scores(pattern: f64, components: f64, risk: f64, threshold: f64) -> Self {
        Self {
            pattern: Self::flag(pattern, threshold),
            components: Self::flag(components, threshold),
            risk: Self::flag(risk, threshold),
            threshold,
        }
    }

    pub fn any_low(&self) -> bool {
        self.pattern.low || self.components.low || self.risk.low
    }

    /// Force the pattern flag low, e.g. when the pattern came from a fallback.
    pub fn with_pattern_low(mut self) -> Self {
        self.pattern.low = true;
        self
    }
}
