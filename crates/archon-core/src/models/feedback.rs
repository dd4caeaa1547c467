use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArchitecturePlan, ComponentKind, Pattern, ProjectDescription};
use crate::constants::{MAX_RATING, MIN_RATING};
use crate::errors::{ArchonError, ArchonResult};

/// User correction against an emitted plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Correction {
    pub true_pattern: Option<Pattern>,
    pub true_components: Option<Vec<ComponentKind>>,
    /// 1 (useless) ..= 5 (exactly right).
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

impl Correction {
    pub fn rating(rating: u8) -> Self {
        Self {
            rating: Some(rating),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.true_pattern.is_none()
            && self.true_components.is_none()
            && self.rating.is_none()
            && self.comment.as_deref().map_or(true, |c| c.trim().is_empty())
    }

    /// At least one field set, rating within range, no empty component kinds.
    pub fn validate(&self) -> ArchonResult<()> {
        if self.is_empty() {
            return Err(invalid("correction carries no information"));
        }
        if let Some(rating) = self.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(invalid(&format!(
                    "rating {rating} outside {MIN_RATING}..={MAX_RATING}"
                )));
            }
        }
        if let Some(kinds) = &self.true_components {
            if kinds.iter().any(|k| k.is_empty()) {
                return Err(invalid("true_components contains an empty kind"));
            }
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ArchonError {
    ArchonError::InvalidCorrection {
        reason: reason.to_string(),
    }
}

/// Append-only feedback log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Position in the append-only log. Strictly increasing.
    pub seq: i64,
    pub id: String,
    pub plan_id: String,
    pub plan: ArchitecturePlan,
    pub description: ProjectDescription,
    pub correction: Correction,
    pub recorded_at: DateTime<Utc>,
}

/// Resume point for an interrupted drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrainCheckpoint {
    /// High-water `seq` captured when the drain started.
    pub snapshot_seq: i64,
    /// Last `seq` handed out by the drain.
    pub cursor_seq: i64,
}
