/// Model artifact loading and inference errors.
///
/// Any of these at startup means the process must not serve traffic.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("artifact missing: {path}")]
    ArtifactMissing { path: String },

    #[error("artifact invalid: {path}: {reason}")]
    ArtifactInvalid { path: String, reason: String },

    #[error("shape mismatch in {model}: expected {expected}, got {actual}")]
    ShapeMismatch {
        model: String,
        expected: usize,
        actual: usize,
    },

    #[error("feature schema mismatch in {model}: artifact v{artifact}, encoder v{encoder}")]
    SchemaMismatch {
        model: String,
        artifact: u32,
        encoder: u32,
    },
}
