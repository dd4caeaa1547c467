//! ArchonRuntime: owns all engines for the lifetime of the process.
//!
//! Construction is where artifacts are loaded and validated; a runtime that
//! exists can serve requests. Everything on the request path is immutable and
//! shared, so one runtime behind an `Arc` serves concurrent callers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use archon_confidence::ConfidenceAggregator;
use archon_core::config::ArchonConfig;
use archon_core::constants::ARCHON_VERSION;
use archon_core::errors::{ArchonError, ArchonResult};
use archon_core::models::{
    ArchitecturePlan, Correction, DrainCheckpoint, FeedbackRecord, ProjectDescription,
    TrainingSample,
};
use archon_core::traits::{IElaborationSource, IPlanStore};
use archon_ensemble::Ensemble;
use archon_features::FeatureEncoder;
use archon_feedback::{FeedbackDrain, FeedbackService};
use archon_storage::StorageEngine;
use archon_synthesis::{OllamaElaborator, PlanSynthesizer, SynthesisContext};
use tracing::{debug, info};

/// Overrides applied on top of the configuration at startup.
#[derive(Default)]
pub struct RuntimeOptions {
    /// Database path. `None` uses `storage.db_path` from the config.
    pub db_path: Option<PathBuf>,
    /// Pre-built models. `None` loads artifacts from `ensemble.artifacts_dir`.
    pub ensemble: Option<Arc<Ensemble>>,
    /// Elaboration source. `None` builds the Ollama client when
    /// `elaboration.enabled`, otherwise plans use template rationales only.
    pub elaborator: Option<Arc<dyn IElaborationSource>>,
}

pub struct ArchonRuntime {
    config: ArchonConfig,
    encoder: FeatureEncoder,
    ensemble: Arc<Ensemble>,
    aggregator: ConfidenceAggregator,
    synthesizer: PlanSynthesizer,
    storage: Arc<StorageEngine>,
    feedback: FeedbackService,
    elaborator: Option<Arc<dyn IElaborationSource>>,
}

impl ArchonRuntime {
    /// Build every engine. Fails with `ModelUnavailable` if artifacts are
    /// missing or do not match the encoder's feature schema.
    pub fn new(config: ArchonConfig, opts: RuntimeOptions) -> ArchonResult<Self> {
        config.validate()?;

        let encoder = FeatureEncoder::new(&config.encoder);

        let ensemble = match opts.ensemble {
            Some(ensemble) => ensemble,
            None => Arc::new(Ensemble::load(&config.ensemble, encoder.schema())?),
        };

        let storage = Arc::new(match &opts.db_path {
            Some(path) => StorageEngine::open_with(path, &config.storage)?,
            None => StorageEngine::from_config(&config.storage)?,
        });

        let elaborator: Option<Arc<dyn IElaborationSource>> = match opts.elaborator {
            Some(source) => Some(source),
            None if config.elaboration.enabled => Some(Arc::new(
                OllamaElaborator::new(&config.elaboration).map_err(ArchonError::from)?,
            )),
            None => None,
        };

        let aggregator = ConfidenceAggregator::new(config.calibration.clone());
        let synthesizer = PlanSynthesizer::new(
            config.synthesis.clone(),
            config.elaboration.clone(),
            storage.clone(),
        );
        let feedback = FeedbackService::new(storage.clone(), config.feedback.clone());

        info!(
            version = ARCHON_VERSION,
            fingerprint = ensemble.fingerprint(),
            feature_dims = encoder.schema().total_dims(),
            elaboration = elaborator.as_ref().map(|e| e.name()).unwrap_or("disabled"),
            "runtime ready"
        );

        Ok(Self {
            config,
            encoder,
            ensemble,
            aggregator,
            synthesizer,
            storage,
            feedback,
            elaborator,
        })
    }

    pub fn config(&self) -> &ArchonConfig {
        &self.config
    }

    pub fn ensemble(&self) -> &Arc<Ensemble> {
        &self.ensemble
    }

    pub fn storage(&self) -> &Arc<StorageEngine> {
        &self.storage
    }

    /// Produce, validate, and persist a plan for one description.
    pub async fn plan(&self, description: &ProjectDescription) -> ArchonResult<ArchitecturePlan> {
        let started = Instant::now();
        let features = self.encoder.encode(description)?;
        let raw = self.ensemble.predict(&features)?;
        let report = self.aggregator.aggregate(
            &raw.pattern.value,
            &raw.components.value,
            &raw.risk.value,
        );
        let context = SynthesisContext {
            description,
            model_fingerprint: self.ensemble.fingerprint(),
        };
        let plan = self
            .synthesizer
            .synthesize(
                &raw.pattern.value,
                &raw.components.value,
                &raw.risk.value,
                report,
                self.elaborator.as_deref(),
                &context,
            )
            .await?;
        debug!(
            plan_id = %plan.id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "plan request complete"
        );
        Ok(plan)
    }

    pub fn get_plan(&self, plan_id: &str) -> ArchonResult<Option<ArchitecturePlan>> {
        self.storage.get_plan(plan_id)
    }

    pub fn record_feedback(
        &self,
        plan_id: &str,
        correction: &Correction,
    ) -> ArchonResult<FeedbackRecord> {
        self.feedback.record_feedback(plan_id, correction)
    }

    pub fn drain_for_retraining(&self, batch_size: usize) -> ArchonResult<FeedbackDrain> {
        self.feedback.drain_for_retraining(batch_size)
    }

    pub fn resume_drain(&self, checkpoint: DrainCheckpoint, batch_size: usize) -> FeedbackDrain {
        self.feedback.resume_drain(checkpoint, batch_size)
    }

    pub fn acknowledge(&self, through_seq: i64) -> ArchonResult<usize> {
        self.feedback.acknowledge(through_seq)
    }

    pub fn retraining_due(&self) -> ArchonResult<bool> {
        self.feedback.retraining_due()
    }

    pub fn training_sample(&self, record: &FeedbackRecord) -> Option<TrainingSample> {
        self.feedback.training_sample(record)
    }

    pub fn feedback(&self) -> &FeedbackService {
        &self.feedback
    }
}
