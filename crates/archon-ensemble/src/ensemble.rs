//! Ensemble: the three models behind shared immutable handles.

use std::path::Path;
use std::sync::Arc;

use archon_core::config::EnsembleConfig;
use archon_core::errors::ArchonResult;
use archon_core::models::{
    ComponentRecommendation, FeatureSchema, FeatureVector, PatternPrediction, RiskEstimate,
};
use archon_core::traits::{IModel, ModelOutput};
use tracing::debug;

use crate::artifacts::ModelArtifacts;
use crate::models::{ComponentRecommender, PatternClassifier, RiskRegressor};

pub type PatternModel = Arc<dyn IModel<Output = PatternPrediction>>;
pub type ComponentModel = Arc<dyn IModel<Output = ComponentRecommendation>>;
pub type RiskModel = Arc<dyn IModel<Output = RiskEstimate>>;

/// Raw, uncalibrated outputs of one ensemble pass.
#[derive(Debug, Clone)]
pub struct RawPredictions {
    pub pattern: ModelOutput<PatternPrediction>,
    pub components: ModelOutput<ComponentRecommendation>,
    pub risk: ModelOutput<RiskEstimate>,
}

/// Read-only after construction; clone freely and share across requests.
#[derive(Clone)]
pub struct Ensemble {
    pattern: PatternModel,
    components: ComponentModel,
    risk: RiskModel,
    fingerprint: String,
}

impl Ensemble {
    /// Load the artifacts from `config.artifacts_dir` and validate them against `schema`.
    pub fn load(config: &EnsembleConfig, schema: &FeatureSchema) -> ArchonResult<Self> {
        let artifacts = ModelArtifacts::load(Path::new(&config.artifacts_dir), schema)?;
        Ok(Self::assemble(artifacts, config.component_top_k))
    }

    /// Build from in-memory artifacts. Shapes are checked against `schema`
    /// here, so a bad artifact fails at construction rather than on a request.
    /// An empty fingerprint is derived from the artifact contents.
    pub fn from_artifacts(
        mut artifacts: ModelArtifacts,
        schema: &FeatureSchema,
        top_k: usize,
    ) -> ArchonResult<Self> {
        artifacts.validate(schema)?;
        if artifacts.fingerprint.is_empty() {
            artifacts.fingerprint = artifacts.content_fingerprint()?;
        }
        Ok(Self::assemble(artifacts, top_k))
    }

    fn assemble(artifacts: ModelArtifacts, top_k: usize) -> Self {
        Self {
            pattern: Arc::new(PatternClassifier::new(artifacts.pattern)),
            components: Arc::new(ComponentRecommender::new(artifacts.components, top_k)),
            risk: Arc::new(RiskRegressor::new(artifacts.risk)),
            fingerprint: artifacts.fingerprint,
        }
    }

    /// Assemble from arbitrary model implementations.
    pub fn from_models(
        pattern: PatternModel,
        components: ComponentModel,
        risk: RiskModel,
        fingerprint: impl Into<String>,
    ) -> Self {
        Self {
            pattern,
            components,
            risk,
            fingerprint: fingerprint.into(),
        }
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn predict(&self, features: &FeatureVector) -> ArchonResult<RawPredictions> {
        let pattern = self.pattern.predict(features)?;
        let components = self.components.predict(features)?;
        let risk = self.risk.predict(features)?;
        debug!(
            pattern_margin = pattern.confidence,
            components = components.value.len(),
            risk_score = risk.value.score,
            risk_variance = risk.value.variance,
            "ensemble prediction"
        );
        Ok(RawPredictions {
            pattern,
            components,
            risk,
        })
    }
}

impl std::fmt::Debug for Ensemble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ensemble")
            .field("pattern", &self.pattern.name())
            .field("components", &self.components.name())
            .field("risk", &self.risk.name())
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}
