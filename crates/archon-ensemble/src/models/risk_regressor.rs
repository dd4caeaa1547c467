//! Linear risk score with a softplus variance head.

use archon_core::errors::ArchonResult;
use archon_core::models::{FeatureVector, RiskEstimate};
use archon_core::traits::{IModel, ModelOutput};

use super::linear::{check_input, dot, softplus};
use crate::artifacts::RiskArtifact;

pub struct RiskRegressor {
    artifact: RiskArtifact,
}

impl RiskRegressor {
    pub fn new(artifact: RiskArtifact) -> Self {
        Self { artifact }
    }
}

impl IModel for RiskRegressor {
    type Output = RiskEstimate;

    fn name(&self) -> &str {
        "risk-regressor"
    }

    /// Raw confidence is `1 / (1 + variance)`.
    fn predict(&self, features: &FeatureVector) -> ArchonResult<ModelOutput<RiskEstimate>> {
        let a = &self.artifact;
        check_input(
            self.name(),
            features,
            a.header.feature_dims,
            a.header.feature_schema_version,
        )?;

        let score = dot(&a.score_weights, features.values(), a.score_bias);
        let variance = softplus(dot(&a.variance_weights, features.values(), a.variance_bias));
        let estimate = RiskEstimate::new(score, variance);
        let confidence = 1.0 / (1.0 + estimate.variance);
        Ok(ModelOutput::new(estimate, confidence))
    }
}
