use serde::{Deserialize, Serialize};

use super::{ComponentKind, FeedbackRecord, Pattern, ProjectDescription};
use crate::constants::MAX_RATING;

/// Labeled example exported for offline retraining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub feedback_id: String,
    pub description: ProjectDescription,
    pub pattern: Pattern,
    pub components: Vec<ComponentKind>,
    pub risk_score: f64,
    /// Relative weight in [0, 1]; explicit corrections weigh the most.
    pub weight: f64,
}

impl TrainingSample {
    /// Derive a sample from a feedback record.
    ///
    /// Corrected labels win over the plan's own. Without corrected labels the
    /// plan only counts as a label when rated at least `confirm_min_rating`;
    /// otherwise there is nothing trustworthy to learn from and `None` is returned.
    pub fn from_record(record: &FeedbackRecord, confirm_min_rating: u8) -> Option<Self> {
        let correction = &record.correction;
        let corrected =
            correction.true_pattern.is_some() || correction.true_components.is_some();

        let weight = if corrected {
            1.0
        } else {
            let rating = correction.rating?;
            if rating < confirm_min_rating {
                return None;
            }
            f64::from(rating.min(MAX_RATING)) / f64::from(MAX_RATING)
        };

        Some(Self {
            feedback_id: record.id.clone(),
            description: record.description.clone(),
            pattern: correction.true_pattern.unwrap_or(record.plan.pattern),
            components: correction
                .true_components
                .clone()
                .unwrap_or_else(|| record.plan.component_kinds()),
            risk_score: record.plan.risk.score,
            weight,
        })
    }
}
