//! PlanSynthesizer: scored predictions → validated, persisted plan.

use std::sync::Arc;

use archon_core::config::{ElaborationConfig, SynthesisConfig};
use archon_core::errors::ArchonResult;
use archon_core::models::{
    ArchitecturePlan, ComponentRecommendation, ComponentSource, ConfidenceReport,
    PatternPrediction, ProjectDescription, Rationale, RationaleSource, RiskEstimate,
};
use archon_core::traits::{ElaborationRequest, IElaborationSource, IPlanStore};
use chrono::Utc;
use tracing::{error, info, warn};

use crate::elaboration::elaborate_bounded;
use crate::selection::{bucket_risk, select_components, select_pattern};
use crate::template::{risk_notes, template_rationale};
use crate::topology::build_topology;

/// Request-level inputs that are not predictions.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisContext<'a> {
    pub description: &'a ProjectDescription,
    pub model_fingerprint: &'a str,
}

pub struct PlanSynthesizer {
    config: SynthesisConfig,
    elaboration: ElaborationConfig,
    store: Arc<dyn IPlanStore>,
}

impl PlanSynthesizer {
    pub fn new(
        config: SynthesisConfig,
        elaboration: ElaborationConfig,
        store: Arc<dyn IPlanStore>,
    ) -> Self {
        Self {
            config,
            elaboration,
            store,
        }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Build, validate, and persist a plan.
    ///
    /// The elaboration await is the only suspension point and comes before any
    /// write, so a dropped future leaves nothing behind. Elaboration failures
    /// never fail the request.
    pub async fn synthesize(
        &self,
        pattern: &PatternPrediction,
        components: &ComponentRecommendation,
        risk: &RiskEstimate,
        report: ConfidenceReport,
        elaboration: Option<&dyn IElaborationSource>,
        context: &SynthesisContext<'_>,
    ) -> ArchonResult<ArchitecturePlan> {
        let (pattern, pattern_fallback) = select_pattern(pattern, &self.config);
        let report = if pattern_fallback {
            warn!(pattern = %pattern, "degenerate pattern distribution, using default");
            report.with_pattern_low()
        } else {
            report
        };

        let selected = select_components(components, pattern, &self.config);
        let risk = bucket_risk(risk, &self.config);
        let used_defaults = selected
            .first()
            .is_some_and(|c| c.source == ComponentSource::Default);

        let mut rationale = Rationale {
            text: template_rationale(
                pattern,
                pattern_fallback,
                &selected,
                used_defaults,
                &risk,
                &report,
            ),
            source: RationaleSource::Template,
        };
        let mut details = None;

        if let Some(source) = elaboration {
            let request = ElaborationRequest {
                pattern,
                components: selected.iter().map(|c| c.kind.clone()).collect(),
                risk_bucket: risk.bucket,
                project_text: context.description.text.clone(),
                hints: context.description.hints.clone(),
            };
            match elaborate_bounded(source, &request, pattern, &selected, &self.elaboration).await
            {
                Ok(validated) => {
                    rationale = Rationale {
                        text: validated.rationale,
                        source: RationaleSource::Elaboration,
                    };
                    details = Some(validated.details);
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "elaboration discarded, using template");
                }
            }
        }

        let topology = build_topology(pattern, &selected, details.as_ref());
        let plan = ArchitecturePlan {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            pattern,
            pattern_fallback,
            components: selected,
            risk,
            rationale,
            elaboration: details,
            topology,
            risk_notes: risk_notes(pattern, &context.description.hints),
            low_confidence: report.any_low(),
            confidence: report,
            model_fingerprint: context.model_fingerprint.to_string(),
            input_digest: context.description.digest(),
        };

        if let Err(e) = plan.validate() {
            error!(plan_id = %plan.id, field = %e.field, reason = %e.reason, "synthesized plan violates schema");
            return Err(e.into());
        }

        self.store.save_plan(&plan, context.description)?;
        info!(
            plan_id = %plan.id,
            pattern = %plan.pattern,
            components = plan.components.len(),
            risk = %plan.risk.bucket,
            low_confidence = plan.low_confidence,
            rationale = ?plan.rationale.source,
            "plan synthesized"
        );
        Ok(plan)
    }
}
