//! # archon-confidence
//!
//! Maps each model's raw certainty signal (probability margin, score
//! decisiveness, predictive variance) onto a common [0, 1] scale and flags
//! low-confidence predictions against one shared threshold.

pub mod aggregator;
pub mod calibration;

pub use aggregator::ConfidenceAggregator;
