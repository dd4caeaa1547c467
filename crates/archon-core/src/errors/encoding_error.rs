/// Feature-encoding errors. Always caused by the request input.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("project description text is empty")]
    EmptyText,

    #[error("token budget exceeded: {tokens} tokens, max {max}")]
    TokenBudgetExceeded { tokens: usize, max: usize },
}
