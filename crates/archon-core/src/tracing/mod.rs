//! Logging setup for Archon.
//! `tracing` with an `EnvFilter`, per-crate levels via `ARCHON_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with};
