//! Time-boxed elaboration with one retry inside the same budget.

use std::time::Duration;

use archon_core::config::ElaborationConfig;
use archon_core::errors::ElaborationError;
use archon_core::models::{Pattern, SelectedComponent};
use archon_core::traits::{ElaborationRequest, IElaborationSource};
use tokio::time::Instant;
use tracing::{debug, warn};

use super::parse::parse_payload;
use super::validate::{validate_payload, ValidatedElaboration};

/// Call `source` until it yields a valid elaboration, the retries run out,
/// or the total `timeout_ms` budget expires. Expiry ends the loop at once.
pub async fn elaborate_bounded(
    source: &dyn IElaborationSource,
    request: &ElaborationRequest,
    pattern: Pattern,
    selected: &[SelectedComponent],
    config: &ElaborationConfig,
) -> Result<ValidatedElaboration, ElaborationError> {
    let started = Instant::now();
    let deadline = started + Duration::from_millis(config.timeout_ms);
    let attempts = config.max_retries.saturating_add(1);
    let mut last_err = ElaborationError::Timeout { elapsed_ms: 0 };

    for attempt in 1..=attempts {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timeout(started));
        }
        let result = match tokio::time::timeout(remaining, source.elaborate(request)).await {
            Err(_) => return Err(timeout(started)),
            Ok(Err(e)) => Err(e),
            Ok(Ok(raw)) => parse_payload(&raw).and_then(|payload| {
                validate_payload(payload, pattern, selected, config.max_rationale_chars)
            }),
        };
        match result {
            Ok(validated) => {
                debug!(source = source.name(), attempt, "elaboration accepted");
                return Ok(validated);
            }
            Err(e) => {
                warn!(source = source.name(), attempt, error = %e, "elaboration attempt failed");
                last_err = e;
            }
        }
    }
    Err(last_err)
}

fn timeout(started: Instant) -> ElaborationError {
    ElaborationError::Timeout {
        elapsed_ms: started.elapsed().as_millis() as u64,
    }
}
