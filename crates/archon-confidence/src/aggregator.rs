//! ConfidenceAggregator: raw predictions → ConfidenceReport.

use archon_core::config::CalibrationConfig;
use archon_core::models::{
    ComponentRecommendation, ConfidenceReport, PatternPrediction, RiskEstimate,
};
use tracing::debug;

use crate::calibration::{component_confidence, pattern_confidence, risk_confidence};

/// Stateless; holds only the calibration constants.
#[derive(Debug, Clone)]
pub struct ConfidenceAggregator {
    config: CalibrationConfig,
}

impl ConfidenceAggregator {
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    pub fn threshold(&self) -> f64 {
        self.config.low_confidence_threshold
    }

    pub fn aggregate(
        &self,
        pattern: &PatternPrediction,
        components: &ComponentRecommendation,
        risk: &RiskEstimate,
    ) -> ConfidenceReport {
        let report = ConfidenceReport::from_scores(
            pattern_confidence(pattern, &self.config),
            component_confidence(components, &self.config),
            risk_confidence(risk, &self.config),
            self.config.low_confidence_threshold,
        );
        debug!(
            pattern = report.pattern.score,
            components = report.components.score,
            risk = report.risk.score,
            any_low = report.any_low(),
            "confidence aggregated"
        );
        report
    }
}

impl Default for ConfidenceAggregator {
    fn default() -> Self {
        Self::new(CalibrationConfig::default())
    }
}
