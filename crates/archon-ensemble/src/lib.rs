//! # archon-ensemble
//!
//! Three trained models behind the [`IModel`](archon_core::traits::IModel)
//! contract: pattern classifier, component recommender, risk regressor.
//! Artifacts are loaded once into immutable handles shared across requests.

pub mod artifacts;
pub mod ensemble;
pub mod models;

pub use artifacts::{ArtifactHeader, ModelArtifacts};
pub use ensemble::{Ensemble, RawPredictions};
pub use models::{ComponentRecommender, PatternClassifier, RiskRegressor};
