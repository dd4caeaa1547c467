use archon_core::errors::{ArchonResult, ModelError};
use archon_core::models::FeatureVector;

/// Check a feature vector against a model's expected input layout.
pub(crate) fn check_input(
    model: &str,
    features: &FeatureVector,
    dims: usize,
    schema_version: u32,
) -> ArchonResult<()> {
    if features.schema_version() != schema_version {
        return Err(ModelError::SchemaMismatch {
            model: model.to_string(),
            artifact: schema_version,
            encoder: features.schema_version(),
        }
        .into());
    }
    if features.len() != dims {
        return Err(ModelError::ShapeMismatch {
            model: model.to_string(),
            expected: dims,
            actual: features.len(),
        }
        .into());
    }
    Ok(())
}

pub(crate) fn dot(weights: &[f64], features: &[f32], bias: f64) -> f64 {
    weights
        .iter()
        .zip(features)
        .map(|(w, x)| w * f64::from(*x))
        .sum::<f64>()
        + bias
}

pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// `ln(1 + e^x)` without overflow for large `x`.
pub(crate) fn softplus(x: f64) -> f64 {
    if x > 30.0 {
        x
    } else {
        x.exp().ln_1p()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softplus_is_positive_and_tracks_identity() {
        assert!(softplus(-50.0) > 0.0);
        assert!((softplus(0.0) - std::f64::consts::LN_2).abs() < 1e-12);
        assert_eq!(softplus(100.0), 100.0);
    }

    #[test]
    fn sigmoid_midpoint() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(40.0) > 0.999);
    }
}
