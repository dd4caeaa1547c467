//! Optional narrative elaboration of an already-decided plan.
//!
//! The source returns free text. It is parsed, validated against the decided
//! structure, and discarded on any failure. Nothing here can change the
//! pattern, the components, or the risk bucket.

mod bounded;
mod noop;
mod ollama;
pub mod parse;
pub mod prompt;
pub mod validate;

pub use bounded::elaborate_bounded;
pub use noop::NoOpElaborator;
pub use ollama::OllamaElaborator;
pub use parse::{ElaborationPayload, PayloadComponent};
pub use validate::ValidatedElaboration;
