//! # archon-features
//!
//! Turns a [`ProjectDescription`](archon_core::models::ProjectDescription) into
//! a fixed-layout [`FeatureVector`](archon_core::models::FeatureVector):
//! a hashed term embedding followed by encoded hint attributes.

pub mod attributes;
pub mod embedding;
pub mod encoder;

pub use encoder::FeatureEncoder;
