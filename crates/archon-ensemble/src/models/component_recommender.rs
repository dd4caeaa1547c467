//! Independent logistic scorer per component kind; keeps the top K.

use archon_core::errors::ArchonResult;
use archon_core::models::{ComponentRecommendation, FeatureVector};
use archon_core::traits::{IModel, ModelOutput};

use super::linear::{check_input, dot, sigmoid};
use crate::artifacts::ComponentArtifact;

pub struct ComponentRecommender {
    artifact: ComponentArtifact,
    top_k: usize,
}

impl ComponentRecommender {
    pub fn new(artifact: ComponentArtifact, top_k: usize) -> Self {
        Self { artifact, top_k }
    }
}

impl IModel for ComponentRecommender {
    type Output = ComponentRecommendation;

    fn name(&self) -> &str {
        "component-recommender"
    }

    /// Raw confidence is the mean decisiveness of the returned scores.
    fn predict(
        &self,
        features: &FeatureVector,
    ) -> ArchonResult<ModelOutput<ComponentRecommendation>> {
        let header = &self.artifact.header;
        check_input(
            self.name(),
            features,
            header.feature_dims,
            header.feature_schema_version,
        )?;

        let a = &self.artifact;
        let scored = a.kinds.iter().enumerate().map(|(i, kind)| {
            let score = sigmoid(dot(&a.weights[i], features.values(), a.bias[i]));
            (kind.as_str(), score)
        });
        let recommendation = ComponentRecommendation::new(scored).top_k(self.top_k);
        let confidence = recommendation.mean_decisiveness();
        Ok(ModelOutput::new(recommendation, confidence))
    }
}
