//! Lazy, finite iteration over unacknowledged feedback.

use std::collections::VecDeque;
use std::sync::Arc;

use archon_core::errors::ArchonResult;
use archon_core::models::{DrainCheckpoint, FeedbackRecord};
use archon_core::traits::IFeedbackStore;

/// Pages through records with `seq <= snapshot_seq`, `batch_size` at a time.
///
/// The snapshot is fixed when the drain is created, so records appended while
/// draining are left for the next drain. Draining never deletes or acknowledges.
/// A fetch error is yielded once and ends the drain.
pub struct FeedbackDrain {
    store: Arc<dyn IFeedbackStore>,
    snapshot_seq: i64,
    cursor_seq: i64,
    batch_size: usize,
    buffer: VecDeque<FeedbackRecord>,
    finished: bool,
}

impl FeedbackDrain {
    pub(crate) fn new(
        store: Arc<dyn IFeedbackStore>,
        checkpoint: DrainCheckpoint,
        batch_size: usize,
    ) -> Self {
        Self {
            store,
            snapshot_seq: checkpoint.snapshot_seq,
            cursor_seq: checkpoint.cursor_seq,
            batch_size: batch_size.max(1),
            buffer: VecDeque::new(),
            finished: checkpoint.cursor_seq >= checkpoint.snapshot_seq,
        }
    }

    /// Position after the last record handed out.
    pub fn checkpoint(&self) -> DrainCheckpoint {
        DrainCheckpoint {
            snapshot_seq: self.snapshot_seq,
            cursor_seq: self.cursor_seq,
        }
    }

    pub fn snapshot_seq(&self) -> i64 {
        self.snapshot_seq
    }

    fn refill(&mut self) -> ArchonResult<()> {
        let page = self
            .store
            .fetch_pending(self.cursor_seq, self.snapshot_seq, self.batch_size)?;
        if page.len() < self.batch_size {
            self.finished = true;
        }
        tracing::debug!(
            fetched = page.len(),
            after_seq = self.cursor_seq,
            snapshot_seq = self.snapshot_seq,
            "drain page"
        );
        self.buffer.extend(page);
        Ok(())
    }
}

impl Iterator for FeedbackDrain {
    type Item = ArchonResult<FeedbackRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() && !self.finished {
            if let Err(e) = self.refill() {
                self.finished = true;
                return Some(Err(e));
            }
        }
        let record = self.buffer.pop_front()?;
        self.cursor_seq = record.seq;
        Some(Ok(record))
    }
}

impl std::fmt::Debug for FeedbackDrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackDrain")
            .field("snapshot_seq", &self.snapshot_seq)
            .field("cursor_seq", &self.cursor_seq)
            .field("batch_size", &self.batch_size)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}
