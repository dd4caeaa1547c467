mod elaboration_error;
mod encoding_error;
mod error_kind;
mod model_error;
mod schema_error;
mod storage_error;

pub use elaboration_error::ElaborationError;
pub use encoding_error::EncodingError;
pub use error_kind::ErrorKind;
pub use model_error::ModelError;
pub use schema_error::SchemaValidationError;
pub use storage_error::StorageError;

/// Top-level error for every Archon operation.
#[derive(Debug, thiserror::Error)]
pub enum ArchonError {
    #[error("encoding error: {0}")]
    EncodingError(#[from] EncodingError),

    #[error("model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),

    #[error(transparent)]
    SchemaValidation(#[from] SchemaValidationError),

    #[error("plan not found: {plan_id}")]
    NotFound { plan_id: String },

    #[error("invalid correction: {reason}")]
    InvalidCorrection { reason: String },

    #[error("elaboration error: {0}")]
    ElaborationError(#[from] ElaborationError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ArchonError {
    /// Classify the error for the request layer.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArchonError::EncodingError(_) | ArchonError::InvalidCorrection { .. } => {
                ErrorKind::BadInput
            }
            ArchonError::NotFound { .. } => ErrorKind::NotFound,
            ArchonError::ModelUnavailable(_) => ErrorKind::Unavailable,
            ArchonError::SchemaValidation(_)
            | ArchonError::ElaborationError(_)
            | ArchonError::StorageError(_)
            | ArchonError::ConfigError(_)
            | ArchonError::SerializationError(_) => ErrorKind::Internal,
        }
    }

    /// `[CODE] message` form used at process boundaries.
    pub fn boundary_string(&self) -> String {
        format!("[{}] {}", self.kind().code(), self)
    }
}

pub type ArchonResult<T> = Result<T, ArchonError>;
