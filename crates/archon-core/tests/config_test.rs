use archon_core::config::*;
use archon_core::models::{ComponentKind, Pattern};
use archon_core::ArchonError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ArchonConfig::from_toml("").unwrap();

    // Encoder
    assert_eq!(config.encoder.embedding_dims, 256);
    assert_eq!(config.encoder.max_tokens, 2_048);

    // Ensemble
    assert_eq!(config.ensemble.artifacts_dir, "models");
    assert_eq!(config.ensemble.component_top_k, 8);

    // Calibration
    assert_eq!(config.calibration.margin_ceiling, 0.5);
    assert_eq!(config.calibration.decisiveness_ceiling, 0.8);
    assert_eq!(config.calibration.variance_ceiling, 400.0);
    assert_eq!(config.calibration.low_confidence_threshold, 0.5);

    // Synthesis
    assert_eq!(config.synthesis.inclusion_threshold, 0.3);
    assert_eq!(config.synthesis.risk_low_upper, 35.0);
    assert_eq!(config.synthesis.risk_high_lower, 65.0);
    assert_eq!(config.synthesis.variance_ceiling, 225.0);
    assert_eq!(config.synthesis.pattern_priority, Pattern::ALL.to_vec());
    assert_eq!(config.synthesis.default_pattern, Pattern::Monolith);
    assert_eq!(config.synthesis.default_components.len(), Pattern::COUNT);

    // Elaboration
    assert!(!config.elaboration.enabled);
    assert_eq!(config.elaboration.timeout_ms, 20_000);
    assert_eq!(config.elaboration.max_retries, 1);

    // Storage
    assert_eq!(config.storage.db_path, "archon.db");
    assert!(config.storage.wal_mode);
    assert_eq!(config.storage.read_pool_size, 4);

    // Feedback
    assert_eq!(config.feedback.retrain_min_records, 50);
    assert_eq!(config.feedback.confirm_min_rating, 4);

    // Observability
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[synthesis]
inclusion_threshold = 0.45
pattern_priority = ["serverless", "monolith"]

[synthesis.default_components]
serverless = ["functions", "object store"]

[storage]
db_path = "/custom/archon.db"
"#;
    let config = ArchonConfig::from_toml(toml).unwrap();
    assert_eq!(config.synthesis.inclusion_threshold, 0.45);
    assert_eq!(
        config.synthesis.pattern_priority,
        vec![Pattern::Serverless, Pattern::Monolith]
    );
    assert_eq!(
        config.synthesis.defaults_for(Pattern::Serverless),
        vec![ComponentKind::new("functions"), ComponentKind::new("object-store")]
    );
    // Patterns missing from the configured map fall back to the built-in table.
    assert!(!config.synthesis.defaults_for(Pattern::MlSystem).is_empty());
    assert_eq!(config.storage.db_path, "/custom/archon.db");
    assert!(config.storage.wal_mode);
}

#[test]
fn unlisted_patterns_rank_after_listed_ones() {
    let config = ArchonConfig::from_toml(
        r#"
[synthesis]
pattern_priority = ["ml-system"]
"#,
    )
    .unwrap();
    let s = &config.synthesis;
    assert!(s.priority_rank(Pattern::MlSystem) < s.priority_rank(Pattern::Monolith));
    assert!(s.priority_rank(Pattern::Monolith) < s.priority_rank(Pattern::Microservices));
}

#[test]
fn config_rejects_inverted_risk_boundaries() {
    let err = ArchonConfig::from_toml(
        r#"
[synthesis]
risk_low_upper = 70.0
risk_high_lower = 40.0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ArchonError::ConfigError(_)));
}

#[test]
fn config_rejects_threshold_out_of_range() {
    assert!(ArchonConfig::from_toml("[calibration]\nlow_confidence_threshold = 1.5").is_err());
    assert!(ArchonConfig::from_toml("[synthesis]\ninclusion_threshold = -0.1").is_err());
}

#[test]
fn config_rejects_unknown_default_component_pattern() {
    let err = ArchonConfig::from_toml(
        r#"
[synthesis.default_components]
mainframe = ["cobol"]
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("default_components"));
}

#[test]
fn config_rejects_duplicate_priority() {
    assert!(ArchonConfig::from_toml(
        "[synthesis]\npattern_priority = [\"monolith\", \"monolith\"]"
    )
    .is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = ArchonConfig::from_toml("[storage\ndb_path = 3").unwrap_err();
    assert!(err.to_string().contains("invalid TOML"));
}

#[test]
fn load_without_path_uses_defaults() {
    let config = ArchonConfig::load(None).unwrap();
    assert_eq!(config.ensemble.component_top_k, 8);
}

#[test]
fn load_missing_file_is_config_error() {
    let err = ArchonConfig::load(Some(std::path::Path::new("/nonexistent/archon.toml")))
        .unwrap_err();
    assert!(matches!(err, ArchonError::ConfigError(_)));
}
