//! FeedbackService: the write and drain surface for user corrections.

use std::sync::Arc;

use archon_core::config::FeedbackConfig;
use archon_core::errors::ArchonResult;
use archon_core::models::{Correction, DrainCheckpoint, FeedbackRecord, TrainingSample};
use archon_core::traits::IFeedbackStore;
use tracing::{debug, info};

use crate::drain::FeedbackDrain;

pub struct FeedbackService {
    store: Arc<dyn IFeedbackStore>,
    config: FeedbackConfig,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn IFeedbackStore>, config: FeedbackConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Validate and append a correction. `NotFound` if the plan is unknown.
    pub fn record_feedback(
        &self,
        plan_id: &str,
        correction: &Correction,
    ) -> ArchonResult<FeedbackRecord> {
        correction.validate()?;
        let record = self.store.append_feedback(plan_id, correction)?;
        info!(
            plan_id,
            seq = record.seq,
            rating = ?correction.rating,
            corrected_pattern = correction.true_pattern.is_some(),
            corrected_components = correction.true_components.is_some(),
            "feedback recorded"
        );
        Ok(record)
    }

    /// Start a drain over everything pending right now.
    pub fn drain_for_retraining(&self, batch_size: usize) -> ArchonResult<FeedbackDrain> {
        let snapshot_seq = self.store.max_seq()?;
        debug!(snapshot_seq, batch_size, "drain started");
        Ok(FeedbackDrain::new(
            Arc::clone(&self.store),
            DrainCheckpoint {
                snapshot_seq,
                cursor_seq: 0,
            },
            batch_size,
        ))
    }

    /// Drain using the configured page size.
    pub fn drain(&self) -> ArchonResult<FeedbackDrain> {
        self.drain_for_retraining(self.config.drain_batch_size)
    }

    /// Continue an interrupted drain after its cursor, within its original snapshot.
    pub fn resume_drain(&self, checkpoint: DrainCheckpoint, batch_size: usize) -> FeedbackDrain {
        debug!(
            snapshot_seq = checkpoint.snapshot_seq,
            cursor_seq = checkpoint.cursor_seq,
            "drain resumed"
        );
        FeedbackDrain::new(Arc::clone(&self.store), checkpoint, batch_size)
    }

    /// Mark everything up to `through_seq` consumed.
    pub fn acknowledge(&self, through_seq: i64) -> ArchonResult<usize> {
        let acknowledged = self.store.acknowledge(through_seq)?;
        info!(through_seq, acknowledged, "feedback acknowledged");
        Ok(acknowledged)
    }

    pub fn pending_count(&self) -> ArchonResult<usize> {
        self.store.pending_count()
    }

    /// True once enough unacknowledged feedback has piled up to retrain.
    pub fn retraining_due(&self) -> ArchonResult<bool> {
        let pending = self.store.pending_count()?;
        let due = pending >= self.config.retrain_min_records;
        if due {
            info!(
                pending,
                threshold = self.config.retrain_min_records,
                "retraining due"
            );
        }
        Ok(due)
    }

    /// Labeled sample for a drained record, if it carries a usable label.
    pub fn training_sample(&self, record: &FeedbackRecord) -> Option<TrainingSample> {
        TrainingSample::from_record(record, self.config.confirm_min_rating)
    }
}
