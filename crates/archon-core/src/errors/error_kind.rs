//! Coarse error classification for the upstream request layer.

use serde::{Deserialize, Serialize};

/// How a caller should treat a failed request.
///
/// Maps onto HTTP-style status families without depending on any web stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request itself is unusable (4xx).
    BadInput,
    /// A referenced entity does not exist (404).
    NotFound,
    /// The process cannot serve this request at all (503).
    Unavailable,
    /// An internal invariant failed (500).
    Internal,
}

impl ErrorKind {
    /// Stable code string for logs and wire responses.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::BadInput => "BAD_INPUT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Unavailable => "UNAVAILABLE",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}
