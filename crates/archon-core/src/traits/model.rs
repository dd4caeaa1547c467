use serde::{Deserialize, Serialize};

use crate::errors::ArchonResult;
use crate::models::FeatureVector;

/// A prediction plus the model's raw certainty signal (uncalibrated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput<T> {
    pub value: T,
    pub confidence: f64,
}

impl<T> ModelOutput<T> {
    pub fn new(value: T, confidence: f64) -> Self {
        Self { value, confidence }
    }
}

/// Trained model capability. Implementations must be pure: `predict` takes
/// `&self` and holds no interior mutability, so one instance serves every
/// request concurrently.
pub trait IModel: Send + Sync {
    type Output;

    /// Stable model name used in logs and errors.
    fn name(&self) -> &str;

    fn predict(&self, features: &FeatureVector) -> ArchonResult<ModelOutput<Self::Output>>;
}
