/// Elaboration failures. The synthesizer recovers from all of these by
/// falling back to a template rationale.
#[derive(Debug, thiserror::Error)]
pub enum ElaborationError {
    #[error("elaboration timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("elaboration transport failed: {reason}")]
    Transport { reason: String },

    #[error("elaboration output rejected: {reason}")]
    InvalidOutput { reason: String },
}
