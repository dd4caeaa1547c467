//! Calibration curves. Each is a clamped linear map from a configured
//! `[floor, ceiling]` onto [0, 1].

use archon_core::config::CalibrationConfig;
use archon_core::models::{ComponentRecommendation, PatternPrediction, RiskEstimate};

/// `clamp((x - lo) / (hi - lo), 0, 1)`. Non-finite input maps to 0.
pub fn linear(x: f64, lo: f64, hi: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    let span = hi - lo;
    if span <= 0.0 || !span.is_finite() {
        return if x >= hi { 1.0 } else { 0.0 };
    }
    ((x - lo) / span).clamp(0.0, 1.0)
}

/// Top-1 minus top-2 margin. A degenerate distribution scores 0.
pub fn pattern_confidence(prediction: &PatternPrediction, config: &CalibrationConfig) -> f64 {
    if prediction.is_degenerate() {
        return 0.0;
    }
    linear(prediction.margin(), config.margin_floor, config.margin_ceiling)
}

/// Mean decisiveness of the returned scores. An empty set scores 0.
pub fn component_confidence(
    recommendation: &ComponentRecommendation,
    config: &CalibrationConfig,
) -> f64 {
    if recommendation.is_empty() {
        return 0.0;
    }
    linear(
        recommendation.mean_decisiveness(),
        config.decisiveness_floor,
        config.decisiveness_ceiling,
    )
}

/// Inverse of variance over the configured range. Infinite variance scores 0.
pub fn risk_confidence(estimate: &RiskEstimate, config: &CalibrationConfig) -> f64 {
    if !estimate.variance.is_finite() {
        return 0.0;
    }
    1.0 - linear(estimate.variance, config.variance_floor, config.variance_ceiling)
}
