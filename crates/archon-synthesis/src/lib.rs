//! # archon-synthesis
//!
//! Turns calibrated predictions into an [`ArchitecturePlan`]: arg-max pattern
//! selection, threshold filtering with per-pattern defaults, risk bucketing,
//! service topology, optional bounded LLM elaboration, schema validation, and persistence.
//!
//! [`ArchitecturePlan`]: archon_core::models::ArchitecturePlan

pub mod elaboration;
pub mod selection;
pub mod synthesizer;
pub mod template;
pub mod topology;

pub use elaboration::{NoOpElaborator, OllamaElaborator};
pub use synthesizer::{PlanSynthesizer, SynthesisContext};
