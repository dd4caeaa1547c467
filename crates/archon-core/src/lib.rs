//! # archon-core
//!
//! Foundation crate for the Archon planning pipeline.
//! Defines all types, traits, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ArchonConfig;
pub use errors::{ArchonError, ArchonResult, ErrorKind};
pub use models::{ArchitecturePlan, Pattern, ProjectDescription};
pub use traits::{IElaborationSource, IFeedbackStore, IModel, IPlanStore, ModelOutput};
