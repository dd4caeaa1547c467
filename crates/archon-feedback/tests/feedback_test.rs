use std::sync::Arc;

use archon_core::config::FeedbackConfig;
use archon_core::errors::{ArchonResult, ErrorKind, StorageError};
use archon_core::models::*;
use archon_core::traits::{IFeedbackStore, IPlanStore};
use archon_feedback::FeedbackService;
use archon_storage::StorageEngine;
use chrono::Utc;
use proptest::prelude::*;

fn sample_plan(id: &str) -> ArchitecturePlan {
    ArchitecturePlan {
        id: id.to_string(),
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
            text: "Monolith with a single database.".to_string(),
            source: RationaleSource::Template,
        },
        elaboration: None,
        topology: Topology::default(),
        risk_notes: Vec::new(),
        confidence: ConfidenceReport::from_scores(1.0, 0.75, 0.99, 0.5),
        low_confidence: false,
        model_fingerprint: "fp-test".to_string(),
        input_digest: "digest".to_string(),
    }
}

struct Fixture {
    engine: Arc<StorageEngine>,
    service: FeedbackService,
    plan_id: String,
}

fn fixture_with(config: FeedbackConfig) -> Fixture {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let plan_id = uuid::Uuid::new_v4().to_string();
    engine
        .save_plan(
            &sample_plan(&plan_id),
            &ProjectDescription::new("a small internal tool"),
        )
        .unwrap();
    let service = FeedbackService::new(engine.clone(), config);
    Fixture {
        engine,
        service,
        plan_id,
    }
}

fn fixture() -> Fixture {
    fixture_with(FeedbackConfig::default())
}

fn seqs(drain: archon_feedback::FeedbackDrain) -> Vec<i64> {
    drain.map(|r| r.unwrap().seq).collect()
}

#[test]
fn rejects_invalid_corrections_and_unknown_plans() {
    let fx = fixture();
    let err = fx
        .service
        .record_feedback(&fx.plan_id, &Correction::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadInput);

    let err = fx
        .service
        .record_feedback(&fx.plan_id, &Correction::rating(9))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadInput);

    let err = fx
        .service
        .record_feedback("no-such-plan", &Correction::rating(3))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(fx.service.pending_count().unwrap(), 0);
}

#[test]
fn record_drain_ack_round_trip() {
    let fx = fixture();
    let record = fx
        .service
        .record_feedback(&fx.plan_id, &Correction::rating(2))
        .unwrap();

    let drained: Vec<_> = fx
        .service
        .drain_for_retraining(10)
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].seq, record.seq);
    assert_eq!(drained[0].plan.id, fx.plan_id);

    // Draining alone does not consume.
    assert_eq!(seqs(fx.service.drain_for_retraining(10).unwrap()), vec![record.seq]);

    assert_eq!(fx.service.acknowledge(record.seq).unwrap(), 1);
    assert!(seqs(fx.service.drain_for_retraining(10).unwrap()).is_empty());
}

#[test]
fn default_drain_pages_with_configured_batch_size() {
    let fx = fixture_with(FeedbackConfig {
        drain_batch_size: 2,
        ..Default::default()
    });
    let recorded: Vec<i64> = (0..5)
        .map(|_| {
            fx.service
                .record_feedback(&fx.plan_id, &Correction::rating(3))
                .unwrap()
                .seq
        })
        .collect();

    let mut drain = fx.service.drain().unwrap();
    let drained: Vec<i64> = drain.by_ref().map(|r| r.unwrap().seq).collect();
    assert_eq!(drained, recorded);
    assert_eq!(drain.checkpoint().cursor_seq, recorded[4]);
}

#[test]
fn writes_during_a_drain_land_in_the_next_one() {
    let fx = fixture();
    let before: Vec<i64> = (0..3)
        .map(|_| {
            fx.service
                .record_feedback(&fx.plan_id, &Correction::rating(4))
                .unwrap()
                .seq
        })
        .collect();

    let mut drain = fx.service.drain_for_retraining(1).unwrap();
    let first = drain.next().unwrap().unwrap();
    assert_eq!(first.seq, before[0]);

    let during = fx
        .service
        .record_feedback(&fx.plan_id, &Correction::rating(5))
        .unwrap();

    let rest: Vec<i64> = drain.map(|r| r.unwrap().seq).collect();
    assert_eq!(rest, &before[1..]);

    fx.service.acknowledge(*before.last().unwrap()).unwrap();
    assert_eq!(seqs(fx.service.drain_for_retraining(1).unwrap()), vec![during.seq]);
}

#[test]
fn resume_continues_after_checkpoint() {
    let fx = fixture();
    let all: Vec<i64> = (0..7)
        .map(|_| {
            fx.service
                .record_feedback(&fx.plan_id, &Correction::rating(3))
                .unwrap()
                .seq
        })
        .collect();

    let mut drain = fx.service.drain_for_retraining(2).unwrap();
    let taken: Vec<i64> = drain.by_ref().take(3).map(|r| r.unwrap().seq).collect();
    let checkpoint = drain.checkpoint();
    drop(drain);

    assert_eq!(checkpoint.cursor_seq, all[2]);
    assert_eq!(checkpoint.snapshot_seq, all[6]);

    // Appended after the snapshot; the resumed drain must not see it.
    fx.service
        .record_feedback(&fx.plan_id, &Correction::rating(3))
        .unwrap();

    let rest = seqs(fx.service.resume_drain(checkpoint, 2));
    assert_eq!(taken, &all[..3]);
    assert_eq!(rest, &all[3..]);
}

#[test]
fn retraining_due_at_threshold() {
    let fx = fixture_with(FeedbackConfig {
        retrain_min_records: 3,
        ..Default::default()
    });
    for _ in 0..2 {
        fx.service
            .record_feedback(&fx.plan_id, &Correction::rating(4))
            .unwrap();
    }
    assert!(!fx.service.retraining_due().unwrap());
    let last = fx
        .service
        .record_feedback(&fx.plan_id, &Correction::rating(4))
        .unwrap();
    assert!(fx.service.retraining_due().unwrap());

    fx.service.acknowledge(last.seq).unwrap();
    assert!(!fx.service.retraining_due().unwrap());
    assert_eq!(fx.engine.pending_count().unwrap(), 0);
}

#[test]
fn training_samples_follow_labels_and_ratings() {
    let fx = fixture();
    let corrected = fx
        .service
        .record_feedback(
            &fx.plan_id,
            &Correction {
                true_pattern: Some(Pattern::Microservices),
                rating: Some(1),
                ..Default::default()
            },
        )
        .unwrap();
    let sample = fx.service.training_sample(&corrected).unwrap();
    assert_eq!(sample.pattern, Pattern::Microservices);
    assert_eq!(
        sample.components,
        vec![ComponentKind::new("database"), ComponentKind::new("auth")]
    );
    assert_eq!(sample.weight, 1.0);
    assert_eq!(sample.risk_score, 12.0);

    let confirmed = fx
        .service
        .record_feedback(&fx.plan_id, &Correction::rating(4))
        .unwrap();
    let sample = fx.service.training_sample(&confirmed).unwrap();
    assert_eq!(sample.pattern, Pattern::Monolith);
    assert!((sample.weight - 0.8).abs() < 1e-12);

    let rejected = fx
        .service
        .record_feedback(&fx.plan_id, &Correction::rating(2))
        .unwrap();
    assert!(fx.service.training_sample(&rejected).is_none());

    let comment_only = fx
        .service
        .record_feedback(
            &fx.plan_id,
            &Correction {
                comment: Some("needs a cache".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(fx.service.training_sample(&comment_only).is_none());
}

struct BrokenStore;

impl IFeedbackStore for BrokenStore {
    fn append_feedback(&self, _: &str, _: &Correction) -> ArchonResult<FeedbackRecord> {
        Err(StorageError::SqliteError {
            message: "disk I/O error".to_string(),
        }
        .into())
    }
    fn fetch_pending(&self, _: i64, _: i64, _: usize) -> ArchonResult<Vec<FeedbackRecord>> {
        Err(StorageError::SqliteError {
            message: "disk I/O error".to_string(),
        }
        .into())
    }
    fn max_seq(&self) -> ArchonResult<i64> {
        Ok(5)
    }
    fn pending_count(&self) -> ArchonResult<usize> {
        Ok(5)
    }
    fn acknowledge(&self, _: i64) -> ArchonResult<usize> {
        Ok(0)
    }
}

#[test]
fn fetch_error_is_yielded_once_then_drain_ends() {
    let service = FeedbackService::new(Arc::new(BrokenStore), FeedbackConfig::default());
    let mut drain = service.drain_for_retraining(10).unwrap();
    let err = drain.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(drain.next().is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn drain_yields_each_pending_record_once_in_order(total in 0usize..15, batch in 1usize..6) {
        let fx = fixture();
        let written: Vec<i64> = (0..total)
            .map(|_| fx.service.record_feedback(&fx.plan_id, &Correction::rating(5)).unwrap().seq)
            .collect();
        let drained = seqs(fx.service.drain_for_retraining(batch).unwrap());
        prop_assert_eq!(drained, written);
    }
}
