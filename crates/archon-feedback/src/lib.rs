//! # archon-feedback
//!
//! Feedback loop on top of the append-only log: validated recording, snapshot
//! drains for offline retraining, acknowledgement, and the retraining trigger.

pub mod drain;
pub mod service;

pub use drain::FeedbackDrain;
pub use service::FeedbackService;
