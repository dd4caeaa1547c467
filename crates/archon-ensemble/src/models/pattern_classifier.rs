//! Linear softmax classifier over `Pattern::ALL`.

use archon_core::errors::{ArchonResult, ModelError};
use archon_core::models::{FeatureVector, Pattern, PatternPrediction};
use archon_core::traits::{IModel, ModelOutput};

use super::linear::{check_input, dot};
use crate::artifacts::PatternArtifact;

pub struct PatternClassifier {
    artifact: PatternArtifact,
}

impl PatternClassifier {
    pub fn new(artifact: PatternArtifact) -> Self {
        Self { artifact }
    }
}

impl IModel for PatternClassifier {
    type Output = PatternPrediction;

    fn name(&self) -> &str {
        "pattern-classifier"
    }

    /// Raw confidence is the top-1 minus top-2 probability margin.
    fn predict(&self, features: &FeatureVector) -> ArchonResult<ModelOutput<PatternPrediction>> {
        let header = &self.artifact.header;
        check_input(
            self.name(),
            features,
            header.feature_dims,
            header.feature_schema_version,
        )?;

        let mut logits = [0.0f64; Pattern::COUNT];
        for (i, logit) in logits.iter_mut().enumerate() {
            *logit = dot(&self.artifact.weights[i], features.values(), self.artifact.bias[i]);
        }
        let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights = logits.map(|l| (l - max).exp());

        let prediction = PatternPrediction::from_weights(weights).map_err(|e| {
            ModelError::ArtifactInvalid {
                path: self.name().to_string(),
                reason: e.to_string(),
            }
        })?;
        let margin = prediction.margin();
        Ok(ModelOutput::new(prediction, margin))
    }
}
