use archon_core::errors::ElaborationError;
use archon_core::traits::{ElaborationRequest, IElaborationSource};
use async_trait::async_trait;

/// Elaboration disabled: every call fails and the template rationale is used.
pub struct NoOpElaborator;

#[async_trait]
impl IElaborationSource for NoOpElaborator {
    fn name(&self) -> &str {
        "noop"
    }

    async fn elaborate(&self, _request: &ElaborationRequest) -> Result<String, ElaborationError> {
        Err(ElaborationError::Transport {
            reason: "elaboration disabled".to_string(),
        })
    }
}
