use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ElaborationError;
use crate::models::{ComponentKind, Pattern, ProjectHints, RiskBucket};

/// The decided plan structure sent to an elaboration source. Carries only
/// final decisions, never raw model output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElaborationRequest {
    pub pattern: Pattern,
    pub components: Vec<ComponentKind>,
    pub risk_bucket: RiskBucket,
    pub project_text: String,
    pub hints: ProjectHints,
}

/// External narrative generator (usually an LLM). Returns raw text which the
/// synthesizer parses and validates; anything it returns may be discarded.
#[async_trait]
pub trait IElaborationSource: Send + Sync {
    fn name(&self) -> &str;

    async fn elaborate(&self, request: &ElaborationRequest) -> Result<String, ElaborationError>;
}
