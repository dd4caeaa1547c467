use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{RISK_MAX, RISK_MIN};

/// Regressor output: complexity/risk score plus its uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// Score in [`RISK_MIN`, `RISK_MAX`].
    pub score: f64,
    /// Predictive variance, >= 0.
    pub variance: f64,
}

impl RiskEstimate {
    /// Clamp into the valid range. Non-finite scores become the midpoint,
    /// non-finite variance becomes infinite uncertainty.
    pub fn new(score: f64, variance: f64) -> Self {
        let score = if score.is_finite() {
            score.clamp(RISK_MIN, RISK_MAX)
        } else {
            (RISK_MIN + RISK_MAX) / 2.0
        };
        let variance = if variance.is_nan() {
            f64::INFINITY
        } else {
            variance.max(0.0)
        };
        Self { score, variance }
    }
}

/// Coarse risk category emitted in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBucket {
    Low,
    Medium,
    High,
}

impl RiskBucket {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskBucket::Low => "low",
            RiskBucket::Medium => "medium",
            RiskBucket::High => "high",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
