//! Deterministic rationale text and pattern risk notes.

use archon_core::models::{
    ConfidenceReport, Pattern, ProjectHints, RiskAssessment, SelectedComponent,
};

use crate::elaboration::prompt::wire_name;

const BASE_RISKS: [&str; 3] = [
    "Requirements drift",
    "Operational overhead",
    "Security misconfiguration",
];

fn pattern_risks(pattern: Pattern) -> &'static [&'static str] {
    match pattern {
        Pattern::Monolith => &["Scaling limits under high concurrency"],
        Pattern::Microservices => &["Service-to-service latency", "Deployment complexity"],
        Pattern::EventDriven => &["Event ordering/retries", "Observability needed"],
        Pattern::Serverless => &["Cold starts", "Vendor lock-in", "Debugging complexity"],
        Pattern::DataPlatform => &["Pipeline backfills and schema evolution", "Storage cost growth"],
        Pattern::MlSystem => &["Model drift", "Training/serving skew"],
    }
}

/// Generic risks, then pattern-specific ones, then a context line.
pub fn risk_notes(pattern: Pattern, hints: &ProjectHints) -> Vec<String> {
    let mut notes: Vec<String> = BASE_RISKS
        .iter()
        .chain(pattern_risks(pattern))
        .map(|s| s.to_string())
        .collect();
    if !hints.compliance.is_empty() {
        notes.push(format!(
            "Compliance obligations: {}",
            hints.compliance.join(", ")
        ));
    }
    let domain = hints.domain.as_deref().unwrap_or("other");
    let scale = hints.scale.map_or("unspecified".to_string(), wire_name);
    let budget = hints.budget.map_or("unspecified".to_string(), wire_name);
    let mut context = format!("Context: domain={domain}, scale={scale}, budget={budget}");
    if let Some(cloud) = hints.cloud_target {
        context.push_str(&format!(", cloud={}", wire_name(cloud)));
    }
    notes.push(context);
    notes
}

/// Rationale used whenever elaboration is disabled, fails, or is rejected.
pub fn template_rationale(
    pattern: Pattern,
    pattern_fallback: bool,
    components: &[SelectedComponent],
    used_defaults: bool,
    risk: &RiskAssessment,
    report: &ConfidenceReport,
) -> String {
    let kinds: Vec<&str> = components.iter().map(|c| c.kind.as_str()).collect();
    let mut text = format!(
        "Recommended a {pattern} architecture with {} component{} ({}). \
         Estimated delivery risk is {} (score {:.0}/100).",
        kinds.len(),
        if kinds.len() == 1 { "" } else { "s" },
        kinds.join(", "),
        risk.bucket,
        risk.score,
    );
    if risk.raised_for_uncertainty {
        text.push_str(&format!(
            " Risk was raised to {} because the estimate is uncertain.",
            risk.bucket
        ));
    }
    if pattern_fallback {
        text.push_str(" The pattern classifier gave no usable answer, so the default pattern was applied.");
    }
    if used_defaults {
        text.push_str(&format!(
            " No recommended component cleared the inclusion threshold; the {pattern} default set is used."
        ));
    }
    let low: Vec<&str> = [
        ("pattern", report.pattern.low),
        ("components", report.components.low),
        ("risk", report.risk.low),
    ]
    .into_iter()
    .filter(|(_, low)| *low)
    .map(|(name, _)| name)
    .collect();
    if !low.is_empty() {
        text.push_str(&format!(
            " Low confidence in: {}. Review before relying on this plan.",
            low.join(", ")
        ));
    }
    text
}
