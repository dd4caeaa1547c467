use archon_core::models::*;
use chrono::Utc;

fn plan() -> ArchitecturePlan {
    ArchitecturePlan {
        id: "6f1c2f4e-2d7a-4a53-9a55-1b1f7b0f3a10".to_string(),
        created_at: Utc::now(),
        pattern: Pattern::Monolith,
        pattern_fallback: false,
        components: vec![
            SelectedComponent {
                kind: ComponentKind::new("database"),
                score: 0.9,
                source: ComponentSource::Recommended,
            },
            SelectedComponent {
                kind: ComponentKind::new("auth"),
                score: 0.4,
                source: ComponentSource::Recommended,
            },
        ],
        risk: RiskAssessment {
            bucket: RiskBucket::Low,
            score: 12.0,
            variance: 3.0,
            raised_for_uncertainty: false,
        },
        rationale: Rationale {
            text: "Monolith.".to_string(),
            source: RationaleSource::Template,
        },
        elaboration: None,
        topology: Topology::default(),
        risk_notes: Vec::new(),
        confidence: ConfidenceReport::from_scores(1.0, 0.75, 0.99, 0.5),
        low_confidence: false,
        model_fingerprint: "fp".to_string(),
        input_digest: "d".to_string(),
    }
}

fn field_of(plan: &ArchitecturePlan) -> String {
    plan.validate().unwrap_err().field
}

#[test]
fn well_formed_plan_validates() {
    assert!(plan().validate().is_ok());
    assert_eq!(plan().component_kinds().len(), 2);
    assert!(!plan().used_default_components());
}

#[test]
fn structural_violations_name_the_field() {
    let mut p = plan();
    p.id = "not-a-uuid".to_string();
    assert_eq!(field_of(&p), "id");

    let mut p = plan();
    p.components.clear();
    assert_eq!(field_of(&p), "components");

    let mut p = plan();
    p.components[1].kind = ComponentKind::new("database");
    assert_eq!(field_of(&p), "components");

    let mut p = plan();
    p.risk.variance = f64::INFINITY;
    assert_eq!(field_of(&p), "risk.variance");

    let mut p = plan();
    p.rationale.text = "  ".to_string();
    assert!(p.validate().is_err());
}

#[test]
fn topology_must_reference_selected_components() {
    let mut p = plan();
    p.topology.services.push(ServiceComponent {
        kind: ComponentKind::new("queue"),
        role: "Buffer".to_string(),
        technologies: Vec::new(),
    });
    assert_eq!(field_of(&p), "topology.services");

    let mut p = plan();
    p.topology.data_flows.push(DataFlow {
        source: "client".to_string(),
        destination: " ".to_string(),
        description: "Submit".to_string(),
    });
    assert_eq!(field_of(&p), "topology.data_flows");
}

#[test]
fn plan_without_topology_still_deserializes() {
    let mut json = serde_json::to_value(plan()).unwrap();
    json.as_object_mut().unwrap().remove("topology");
    let back: ArchitecturePlan = serde_json::from_value(json).unwrap();
    assert_eq!(back.topology, Topology::default());
}

#[test]
fn low_confidence_flag_must_match_report() {
    let mut p = plan();
    p.low_confidence = true;
    assert!(p.validate().is_err());

    let mut p = plan();
    p.confidence = p.confidence.with_pattern_low();
    assert!(p.validate().is_err());
    p.low_confidence = true;
    assert!(p.validate().is_ok());
}

fn record(correction: Correction) -> FeedbackRecord {
    FeedbackRecord {
        seq: 1,
        id: "f1".to_string(),
        plan_id: plan().id,
        plan: plan(),
        description: ProjectDescription::new("tool"),
        correction,
        recorded_at: Utc::now(),
    }
}

#[test]
fn training_sample_prefers_corrected_labels() {
    let sample = TrainingSample::from_record(
        &record(Correction {
            true_pattern: Some(Pattern::Serverless),
            true_components: Some(vec![ComponentKind::new("functions")]),
            ..Default::default()
        }),
        4,
    )
    .unwrap();
    assert_eq!(sample.pattern, Pattern::Serverless);
    assert_eq!(sample.components, vec![ComponentKind::new("functions")]);
    assert_eq!(sample.weight, 1.0);
}

#[test]
fn training_sample_confirmation_needs_high_rating() {
    let five = TrainingSample::from_record(&record(Correction::rating(5)), 4).unwrap();
    assert_eq!(five.pattern, Pattern::Monolith);
    assert_eq!(five.weight, 1.0);

    assert!(TrainingSample::from_record(&record(Correction::rating(3)), 4).is_none());
    assert!(TrainingSample::from_record(&record(Correction::rating(3)), 3).is_some());
}
