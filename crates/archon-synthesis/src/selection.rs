//! Structural decisions: pattern, components, risk bucket.
//!
//! Everything here is pure and deterministic.

use archon_core::config::SynthesisConfig;
use archon_core::models::{
    ComponentRecommendation, ComponentSource, Pattern, PatternPrediction, RiskAssessment,
    RiskBucket, RiskEstimate, SelectedComponent,
};

/// Arg-max over the distribution; equal probabilities resolve by
/// `pattern_priority`. Returns `(pattern, fallback)` where `fallback` means the
/// distribution was degenerate and the configured default was used.
pub fn select_pattern(
    prediction: &PatternPrediction,
    config: &SynthesisConfig,
) -> (Pattern, bool) {
    if prediction.is_degenerate() {
        return (config.default_pattern, true);
    }
    let best = Pattern::ALL.into_iter().max_by(|a, b| {
        prediction
            .probability(*a)
            .partial_cmp(&prediction.probability(*b))
            .unwrap_or(std::cmp::Ordering::Equal)
            // lower rank wins a tie, so it must compare greater
            .then_with(|| config.priority_rank(*b).cmp(&config.priority_rank(*a)))
    });
    match best {
        Some(pattern) => (pattern, false),
        None => (config.default_pattern, true),
    }
}

/// Components at or above the inclusion threshold, in recommendation order.
/// Falls back to the pattern's default set so the result is never empty.
pub fn select_components(
    recommendation: &ComponentRecommendation,
    pattern: Pattern,
    config: &SynthesisConfig,
) -> Vec<SelectedComponent> {
    let selected: Vec<SelectedComponent> = recommendation
        .items()
        .iter()
        .filter(|c| c.score >= config.inclusion_threshold)
        .map(|c| SelectedComponent {
            kind: c.kind.clone(),
            score: c.score,
            source: ComponentSource::Recommended,
        })
        .collect();
    if !selected.is_empty() {
        return selected;
    }

    let mut defaults: Vec<SelectedComponent> = Vec::new();
    for kind in config.defaults_for(pattern) {
        if kind.is_empty() || defaults.iter().any(|d| d.kind == kind) {
            continue;
        }
        let score = recommendation
            .items()
            .iter()
            .find(|c| c.kind == kind)
            .map_or(0.0, |c| c.score);
        defaults.push(SelectedComponent {
            kind,
            score,
            source: ComponentSource::Default,
        });
    }
    defaults
}

/// Bucket by score, then raise to at least medium when the variance exceeds
/// the configured ceiling.
pub fn bucket_risk(estimate: &RiskEstimate, config: &SynthesisConfig) -> RiskAssessment {
    let by_score = if estimate.score < config.risk_low_upper {
        RiskBucket::Low
    } else if estimate.score >= config.risk_high_lower {
        RiskBucket::High
    } else {
        RiskBucket::Medium
    };
    let uncertain = estimate.variance > config.variance_ceiling;
    let bucket = if uncertain {
        by_score.max(RiskBucket::Medium)
    } else {
        by_score
    };
    RiskAssessment {
        bucket,
        score: estimate.score,
        // JSON has no infinity; unbounded uncertainty is stored as f64::MAX.
        variance: estimate.variance.min(f64::MAX),
        raised_for_uncertainty: bucket != by_score,
    }
}
