//! # archon-runtime
//!
//! Wires encoder → ensemble → aggregator → synthesizer over one storage
//! engine and exposes the upstream `plan` call plus the feedback surface.

pub mod runtime;

pub use runtime::{ArchonRuntime, RuntimeOptions};
