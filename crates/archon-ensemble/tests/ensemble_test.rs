use archon_core::config::{EncoderConfig, EnsembleConfig};
use archon_core::errors::{ArchonError, ModelError};
use archon_core::models::{FeatureSchema, FeatureVector, Pattern, ProjectDescription};
use archon_ensemble::artifacts::{
    ComponentArtifact, PatternArtifact, RiskArtifact, COMPONENTS_FILE, PATTERN_FILE,
};
use archon_ensemble::{ArtifactHeader, Ensemble, ModelArtifacts};
use archon_features::FeatureEncoder;
use proptest::prelude::*;

/// Artifacts whose predictions depend only on the biases.
fn bias_only(schema: &FeatureSchema) -> ModelArtifacts {
    let dims = schema.total_dims();
    let header = ArtifactHeader::for_schema(schema);
    ModelArtifacts {
        pattern: PatternArtifact {
            header: header.clone(),
            weights: vec![vec![0.0; dims]; Pattern::COUNT],
            bias: vec![3.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        },
        components: ComponentArtifact {
            header: header.clone(),
            kinds: vec!["database".into(), "auth".into(), "queue".into()],
            weights: vec![vec![0.0; dims]; 3],
            bias: vec![2.2, -0.4, -2.2],
        },
        risk: RiskArtifact {
            header,
            score_weights: vec![0.0; dims],
            score_bias: 12.0,
            variance_weights: vec![0.0; dims],
            variance_bias: 3.0,
        },
        fingerprint: String::new(),
    }
}

fn encoder() -> FeatureEncoder {
    FeatureEncoder::new(&EncoderConfig::default())
}

fn write_and_load(
    artifacts: &ModelArtifacts,
    schema: &FeatureSchema,
) -> (tempfile::TempDir, Result<Ensemble, ArchonError>) {
    let dir = tempfile::tempdir().unwrap();
    artifacts.write(dir.path()).unwrap();
    let config = EnsembleConfig {
        artifacts_dir: dir.path().display().to_string(),
        component_top_k: 8,
    };
    let ensemble = Ensemble::load(&config, schema);
    (dir, ensemble)
}

#[test]
fn loads_and_predicts() {
    let enc = encoder();
    let (_dir, ensemble) = write_and_load(&bias_only(enc.schema()), enc.schema());
    let ensemble = ensemble.unwrap();
    assert_eq!(ensemble.fingerprint().len(), 64);

    let features = enc
        .encode(&ProjectDescription::new("small internal tool"))
        .unwrap();
    let raw = ensemble.predict(&features).unwrap();

    assert_eq!(raw.pattern.value.ranked()[0].0, Pattern::Monolith);
    assert!((raw.pattern.confidence - raw.pattern.value.margin()).abs() < 1e-12);

    let kinds: Vec<&str> = raw
        .components
        .value
        .items()
        .iter()
        .map(|c| c.kind.as_str())
        .collect();
    assert_eq!(kinds, vec!["database", "auth", "queue"]);

    assert_eq!(raw.risk.value.score, 12.0);
    assert!(raw.risk.value.variance > 3.0 && raw.risk.value.variance < 3.1);
    assert!((raw.risk.confidence - 1.0 / (1.0 + raw.risk.value.variance)).abs() < 1e-12);
}

#[test]
fn fingerprint_tracks_artifact_bytes() {
    let enc = encoder();
    let a = bias_only(enc.schema());
    let mut b = bias_only(enc.schema());
    b.risk.score_bias = 13.0;
    let (_d1, e1) = write_and_load(&a, enc.schema());
    let (_d2, e2) = write_and_load(&a, enc.schema());
    let (_d3, e3) = write_and_load(&b, enc.schema());
    let (e1, e2, e3) = (e1.unwrap(), e2.unwrap(), e3.unwrap());
    assert_eq!(e1.fingerprint(), e2.fingerprint());
    assert_ne!(e1.fingerprint(), e3.fingerprint());
}

#[test]
fn top_k_limits_recommendations() {
    let enc = encoder();
    let dir = tempfile::tempdir().unwrap();
    bias_only(enc.schema()).write(dir.path()).unwrap();
    let config = EnsembleConfig {
        artifacts_dir: dir.path().display().to_string(),
        component_top_k: 1,
    };
    let ensemble = Ensemble::load(&config, enc.schema()).unwrap();
    let features = enc.encode(&ProjectDescription::new("tool")).unwrap();
    assert_eq!(ensemble.predict(&features).unwrap().components.value.len(), 1);
}

#[test]
fn missing_artifact_is_model_unavailable() {
    let enc = encoder();
    let dir = tempfile::tempdir().unwrap();
    bias_only(enc.schema()).write(dir.path()).unwrap();
    std::fs::remove_file(dir.path().join(PATTERN_FILE)).unwrap();
    let err = ModelArtifacts::load(dir.path(), enc.schema()).unwrap_err();
    assert!(matches!(
        err,
        ArchonError::ModelUnavailable(ModelError::ArtifactMissing { .. })
    ));
}

#[test]
fn corrupt_artifact_is_model_unavailable() {
    let enc = encoder();
    let dir = tempfile::tempdir().unwrap();
    bias_only(enc.schema()).write(dir.path()).unwrap();
    std::fs::write(dir.path().join(COMPONENTS_FILE), b"{ not json").unwrap();
    let err = ModelArtifacts::load(dir.path(), enc.schema()).unwrap_err();
    assert!(matches!(
        err,
        ArchonError::ModelUnavailable(ModelError::ArtifactInvalid { .. })
    ));
}

#[test]
fn dimension_mismatch_is_model_unavailable() {
    let enc = encoder();
    let mut artifacts = bias_only(enc.schema());
    artifacts.risk.header.feature_dims += 1;
    let (_dir, result) = write_and_load(&artifacts, enc.schema());
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        ArchonError::ModelUnavailable(ModelError::ShapeMismatch { .. })
    ));
}

#[test]
fn ragged_weights_are_rejected() {
    let enc = encoder();
    let mut artifacts = bias_only(enc.schema());
    artifacts.components.weights[1].pop();
    let (_dir, result) = write_and_load(&artifacts, enc.schema());
    assert!(matches!(
        result.unwrap_err(),
        ArchonError::ModelUnavailable(ModelError::ShapeMismatch { .. })
    ));
}

#[test]
fn schema_version_mismatch_is_model_unavailable() {
    let enc = encoder();
    let mut artifacts = bias_only(enc.schema());
    artifacts.pattern.header.feature_schema_version += 1;
    let (_dir, result) = write_and_load(&artifacts, enc.schema());
    assert!(matches!(
        result.unwrap_err(),
        ArchonError::ModelUnavailable(ModelError::SchemaMismatch { .. })
    ));
}

#[test]
fn wrong_length_vector_is_rejected_at_predict() {
    let enc = encoder();
    let (_dir, ensemble) = write_and_load(&bias_only(enc.schema()), enc.schema());
    let short = FeatureVector::new(vec![0.0; 3], enc.schema().version);
    assert!(ensemble.unwrap().predict(&short).is_err());
}

#[test]
fn concurrent_predictions_agree() {
    let enc = encoder();
    let (_dir, ensemble) = write_and_load(&bias_only(enc.schema()), enc.schema());
    let ensemble = std::sync::Arc::new(ensemble.unwrap());
    let features = enc.encode(&ProjectDescription::new("shared tool")).unwrap();
    let expected = ensemble.predict(&features).unwrap().pattern.value;
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ensemble = ensemble.clone();
            let features = features.clone();
            std::thread::spawn(move || ensemble.predict(&features).unwrap().pattern.value)
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn in_memory_artifacts_are_validated_at_construction() {
    let enc = encoder();
    let mut artifacts = bias_only(enc.schema());
    artifacts.pattern.bias = vec![1.0, 0.0];
    let err = Ensemble::from_artifacts(artifacts, enc.schema(), 8).unwrap_err();
    assert!(matches!(
        err,
        ArchonError::ModelUnavailable(ModelError::ShapeMismatch { .. })
    ));

    let narrow = FeatureEncoder::new(&EncoderConfig {
        embedding_dims: 32,
        ..Default::default()
    });
    let err = Ensemble::from_artifacts(bias_only(narrow.schema()), enc.schema(), 8).unwrap_err();
    assert!(matches!(err, ArchonError::ModelUnavailable(_)));
}

#[test]
fn in_memory_fingerprint_matches_loaded_fingerprint() {
    let enc = encoder();
    let artifacts = bias_only(enc.schema());
    let in_memory = Ensemble::from_artifacts(artifacts.clone(), enc.schema(), 8).unwrap();
    assert_eq!(in_memory.fingerprint().len(), 64);

    let (_dir, loaded) = write_and_load(&artifacts, enc.schema());
    assert_eq!(in_memory.fingerprint(), loaded.unwrap().fingerprint());

    let mut named = artifacts;
    named.fingerprint = "release-7".to_string();
    let ensemble = Ensemble::from_artifacts(named, enc.schema(), 8).unwrap();
    assert_eq!(ensemble.fingerprint(), "release-7");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn pattern_distribution_is_normalized(bias in proptest::collection::vec(-20.0f64..20.0, 6)) {
        let enc = encoder();
        let mut artifacts = bias_only(enc.schema());
        artifacts.pattern.bias = bias;
        let ensemble = Ensemble::from_artifacts(artifacts, enc.schema(), 8).unwrap();
        let features = enc.encode(&ProjectDescription::new("anything at all")).unwrap();
        let raw = ensemble.predict(&features).unwrap();
        prop_assert!(!raw.pattern.value.is_degenerate());
        prop_assert!((0.0..=1.0).contains(&raw.pattern.confidence));
    }
}
