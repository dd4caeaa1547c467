use archon_core::constants::PROBABILITY_EPSILON;
use archon_core::models::*;
use proptest::prelude::*;

fn roundtrip<T: serde::Serialize + serde::de::DeserializeOwned>(val: &T) -> T {
    let json = serde_json::to_string(val).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn pattern_wire_names_are_kebab_case() {
    assert_eq!(
        serde_json::to_string(&Pattern::EventDriven).unwrap(),
        "\"event-driven\""
    );
    assert_eq!("ml_system".parse::<Pattern>().unwrap(), Pattern::MlSystem);
    assert!("mainframe".parse::<Pattern>().is_err());
    for p in Pattern::ALL {
        assert_eq!(Pattern::from_index(p.index()), Some(p));
    }
}

#[test]
fn pattern_prediction_normalizes() {
    let pred = PatternPrediction::from_weights([2.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
    assert!((pred.probability(Pattern::Monolith) - 0.5).abs() < 1e-12);
    assert!(!pred.is_degenerate());
    assert!((pred.margin() - 0.25).abs() < 1e-12);
    assert_eq!(pred.ranked()[0].0, Pattern::Monolith);
}

#[test]
fn pattern_prediction_rejects_bad_mass() {
    assert!(PatternPrediction::from_weights([f64::NAN, 1.0, 0.0, 0.0, 0.0, 0.0]).is_err());
    assert!(PatternPrediction::from_weights([-1.0, 1.0, 0.0, 0.0, 0.0, 0.0]).is_err());
}

#[test]
fn zero_mass_is_degenerate() {
    let pred = PatternPrediction::from_weights([0.0; Pattern::COUNT]).unwrap();
    assert!(pred.is_degenerate());
}

#[test]
fn component_kind_normalizes() {
    assert_eq!(ComponentKind::new("  Vector DB ").as_str(), "vector-db");
    assert_eq!(ComponentKind::new("api_gateway").as_str(), "api-gateway");
    let k: ComponentKind = serde_json::from_str("\"Message Queue\"").unwrap();
    assert_eq!(k.as_str(), "message-queue");
}

#[test]
fn recommendation_dedups_and_orders() {
    let rec = ComponentRecommendation::new(vec![
        ("queue", 0.1),
        ("database", 0.9),
        ("Database", 0.4),
        ("auth", 0.4),
        ("cache", f64::NAN),
        ("cdn", 1.7),
    ]);
    let kinds: Vec<&str> = rec.items().iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(kinds, vec!["cdn", "database", "auth", "queue", "cache"]);
    assert_eq!(rec.items()[0].score, 1.0);
    assert_eq!(rec.items()[4].score, 0.0);
}

#[test]
fn risk_estimate_clamps() {
    let r = RiskEstimate::new(140.0, -2.0);
    assert_eq!(r.score, 100.0);
    assert_eq!(r.variance, 0.0);
    let r = RiskEstimate::new(f64::NAN, f64::NAN);
    assert_eq!(r.score, 50.0);
    assert!(r.variance.is_infinite());
}

#[test]
fn confidence_flag_is_strictly_below_threshold() {
    assert!(!ConfidenceReport::flag(0.5, 0.5).low);
    assert!(ConfidenceReport::flag(0.4999, 0.5).low);
    assert!(ConfidenceReport::flag(f64::NAN, 0.5).low);
    let report = ConfidenceReport::from_scores(0.9, 0.9, 0.9, 0.5);
    assert!(!report.any_low());
    assert!(report.with_pattern_low().any_low());
}

#[test]
fn description_digest_is_stable_and_input_sensitive() {
    let a = ProjectDescription::new("internal tool");
    let b = ProjectDescription::new("internal tool");
    let c = ProjectDescription::new("internal tools");
    assert_eq!(a.digest(), b.digest());
    assert_ne!(a.digest(), c.digest());
}

#[test]
fn hints_default_when_absent() {
    let d: ProjectDescription = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
    assert_eq!(d.hints, ProjectHints::default());
    let h: ProjectHints =
        serde_json::from_str(r#"{"cloud_target":"on-prem","scale":"startup"}"#).unwrap();
    assert_eq!(h.cloud_target, Some(CloudTarget::OnPrem));
    assert_eq!(h.scale, Some(Scale::Startup));
}

#[test]
fn correction_validation() {
    assert!(Correction::default().validate().is_err());
    assert!(Correction::rating(0).validate().is_err());
    assert!(Correction::rating(6).validate().is_err());
    assert!(Correction::rating(3).validate().is_ok());
    let c = Correction {
        comment: Some("   ".into()),
        ..Default::default()
    };
    assert!(c.validate().is_err());
    let c = Correction {
        true_pattern: Some(Pattern::Serverless),
        ..Default::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn drain_checkpoint_roundtrip() {
    let cp = DrainCheckpoint {
        snapshot_seq: 40,
        cursor_seq: 12,
    };
    assert_eq!(roundtrip(&cp), cp);
}

proptest! {
    #[test]
    fn normalized_distribution_sums_to_one(
        weights in proptest::array::uniform6(0.0f64..1000.0)
    ) {
        prop_assume!(weights.iter().sum::<f64>() > 1e-9);
        let pred = PatternPrediction::from_weights(weights).unwrap();
        let total: f64 = pred.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() <= PROBABILITY_EPSILON);
        prop_assert!(!pred.is_degenerate());
    }

    #[test]
    fn recommendation_has_unique_kinds_in_order(
        pairs in proptest::collection::vec(("[a-e]{1,2}", -1.0f64..2.0), 0..20)
    ) {
        let rec = ComponentRecommendation::new(pairs);
        let items = rec.items();
        for w in items.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
            prop_assert!(w[0].kind != w[1].kind);
        }
        prop_assert!(items.iter().all(|c| (0.0..=1.0).contains(&c.score)));
    }
}
