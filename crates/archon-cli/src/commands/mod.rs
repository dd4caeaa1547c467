pub mod drain;
pub mod feedback;
pub mod plan;
pub mod show;

use std::sync::Arc;

use archon_core::errors::ArchonError;
use archon_core::ArchonConfig;
use archon_feedback::FeedbackService;
use archon_storage::StorageEngine;

/// Convert to the `[CODE] message` boundary form.
pub fn boundary(err: ArchonError) -> anyhow::Error {
    anyhow::anyhow!(err.boundary_string())
}

/// Storage-only commands do not need model artifacts.
pub fn open_storage(config: &ArchonConfig) -> anyhow::Result<Arc<StorageEngine>> {
    Ok(Arc::new(
        StorageEngine::from_config(&config.storage).map_err(boundary)?,
    ))
}

pub fn feedback_service(config: &ArchonConfig) -> anyhow::Result<FeedbackService> {
    Ok(FeedbackService::new(
        open_storage(config)?,
        config.feedback.clone(),
    ))
}
