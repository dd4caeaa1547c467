use crate::errors::ArchonResult;
use crate::models::{ArchitecturePlan, Correction, FeedbackRecord, ProjectDescription};

/// Plan persistence keyed by plan id.
pub trait IPlanStore: Send + Sync {
    /// Insert a plan with the description it was built from. Fails if the id exists.
    fn save_plan(&self, plan: &ArchitecturePlan, description: &ProjectDescription)
        -> ArchonResult<()>;
    fn get_plan(&self, plan_id: &str) -> ArchonResult<Option<ArchitecturePlan>>;
    fn get_plan_with_description(
        &self,
        plan_id: &str,
    ) -> ArchonResult<Option<(ArchitecturePlan, ProjectDescription)>>;
}

/// Append-only feedback log.
pub trait IFeedbackStore: Send + Sync {
    /// Append a correction for an existing plan. `NotFound` if the plan is unknown.
    fn append_feedback(&self, plan_id: &str, correction: &Correction)
        -> ArchonResult<FeedbackRecord>;

    /// Unacknowledged records with `after_seq < seq <= up_to_seq`, ascending, at most `limit`.
    fn fetch_pending(
        &self,
        after_seq: i64,
        up_to_seq: i64,
        limit: usize,
    ) -> ArchonResult<Vec<FeedbackRecord>>;

    /// Highest `seq` ever written, 0 when the log is empty.
    fn max_seq(&self) -> ArchonResult<i64>;

    fn pending_count(&self) -> ArchonResult<usize>;

    /// Mark every record with `seq <= through_seq` acknowledged. Returns the
    /// number newly acknowledged.
    fn acknowledge(&self, through_seq: i64) -> ArchonResult<usize>;
}
