//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding the filter directive,
/// e.g. `ARCHON_LOG=archon_synthesis=debug,archon_storage=warn`.
pub const LOG_ENV_VAR: &str = "ARCHON_LOG";

/// Initialize logging with the default `archon=info` fallback.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize logging to stderr. `ARCHON_LOG` wins over `config.log_level`.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let fallback = fallback_directive(&config.log_level);
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        let registry = tracing_subscriber::registry().with(filter);
        if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

/// Apply the configured level to every archon crate.
fn fallback_directive(level: &str) -> String {
    let level = match level.trim().to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error") => l.to_string(),
        _ => "info".to_string(),
    };
    [
        "archon",
        "archon_core",
        "archon_features",
        "archon_ensemble",
        "archon_confidence",
        "archon_synthesis",
        "archon_storage",
        "archon_feedback",
        "archon_runtime",
    ]
    .iter()
    .map(|target| format!("{target}={level}"))
    .collect::<Vec<_>>()
    .join(",")
}
