use serde::{Deserialize, Serialize};

use super::defaults;

/// Calibration curve constants. Each raw signal is mapped linearly from
/// `[floor, ceiling]` onto `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    pub margin_floor: f64,
    pub margin_ceiling: f64,
    pub decisiveness_floor: f64,
    pub decisiveness_ceiling: f64,
    pub variance_floor: f64,
    /// Variance at (or above) which risk confidence reaches zero.
    pub variance_ceiling: f64,
    /// Shared threshold below which a prediction is flagged low-confidence.
    pub low_confidence_threshold: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            margin_floor: defaults::DEFAULT_MARGIN_FLOOR,
            margin_ceiling: defaults::DEFAULT_MARGIN_CEILING,
            decisiveness_floor: defaults::DEFAULT_DECISIVENESS_FLOOR,
            decisiveness_ceiling: defaults::DEFAULT_DECISIVENESS_CEILING,
            variance_floor: defaults::DEFAULT_VARIANCE_FLOOR,
            variance_ceiling: defaults::DEFAULT_CALIBRATION_VARIANCE_CEILING,
            low_confidence_threshold: defaults::DEFAULT_LOW_CONFIDENCE_THRESHOLD,
        }
    }
}
