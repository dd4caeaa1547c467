/// A synthesized plan broke its own schema. Internal invariant violation.
#[derive(Debug, thiserror::Error)]
#[error("plan schema violation at `{field}`: {reason}")]
pub struct SchemaValidationError {
    pub field: String,
    pub reason: String,
}

impl SchemaValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
