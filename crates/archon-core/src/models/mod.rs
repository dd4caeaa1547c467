mod component;
mod confidence;
mod description;
mod feature_vector;
mod feedback;
mod pattern;
mod plan;
mod risk;
mod training_sample;

pub use component::{ComponentKind, ComponentRecommendation, ScoredComponent};
pub use confidence::{ConfidenceReport, PredictionConfidence};
pub use description::{Budget, CloudTarget, DataVolume, ProjectDescription, ProjectHints, Scale};
pub use feature_vector::{FeatureSchema, FeatureVector};
pub use feedback::{Correction, DrainCheckpoint, FeedbackRecord};
pub use pattern::{Pattern, PatternPrediction};
pub use plan::{
    ArchitecturePlan, ComponentNote, ComponentSource, DataFlow, Elaboration, Rationale,
    RationaleSource, RiskAssessment, SelectedComponent, ServiceComponent, Topology,
};
pub use risk::{RiskBucket, RiskEstimate};
pub use training_sample::TrainingSample;
