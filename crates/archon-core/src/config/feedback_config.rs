use serde::{Deserialize, Serialize};

use super::defaults;

/// Feedback loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Page size used by drains.
    pub drain_batch_size: usize,
    /// Pending records needed before retraining is due.
    pub retrain_min_records: usize,
    /// Minimum rating for an uncorrected plan to count as a confirmed label.
    pub confirm_min_rating: u8,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            drain_batch_size: defaults::DEFAULT_DRAIN_BATCH_SIZE,
            retrain_min_records: defaults::DEFAULT_RETRAIN_MIN_RECORDS,
            confirm_min_rating: defaults::DEFAULT_CONFIRM_MIN_RATING,
        }
    }
}
