use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ComponentKind, ConfidenceReport, Pattern, RiskBucket};
use crate::constants::{RISK_MAX, RISK_MIN};
use crate::errors::SchemaValidationError;

/// Where a selected component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSource {
    Recommended,
    /// Pattern default set, used when nothing cleared the inclusion threshold.
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedComponent {
    pub kind: ComponentKind,
    pub score: f64,
    pub source: ComponentSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub bucket: RiskBucket,
    pub score: f64,
    pub variance: f64,
    /// Bucket was raised because variance exceeded the configured ceiling.
    pub raised_for_uncertainty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RationaleSource {
    Template,
    Elaboration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rationale {
    pub text: String,
    pub source: RationaleSource,
}

/// Advisory per-component detail from a validated elaboration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNote {
    pub kind: ComponentKind,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// One deployable unit of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceComponent {
    pub kind: ComponentKind,
    pub role: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Directed movement of data between two named nodes (`client`, `api`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFlow {
    pub source: String,
    pub destination: String,
    pub description: String,
}

/// Services, flows, and storage derived from the decided pattern and components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topology {
    pub services: Vec<ServiceComponent>,
    pub data_flows: Vec<DataFlow>,
    pub storage: Vec<String>,
}

/// Validated narrative enrichment. Never carries structural decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Elaboration {
    pub component_notes: Vec<ComponentNote>,
    pub deployment: Option<serde_json::Value>,
    pub scaling: Option<String>,
    pub security: Vec<String>,
}

/// The validated plan handed to downstream generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitecturePlan {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub pattern: Pattern,
    /// Pattern came from the configured default, not from the classifier.
    pub pattern_fallback: bool,
    pub components: Vec<SelectedComponent>,
    pub risk: RiskAssessment,
    pub rationale: Rationale,
    pub elaboration: Option<Elaboration>,
    #[serde(default)]
    pub topology: Topology,
    pub risk_notes: Vec<String>,
    pub confidence: ConfidenceReport,
    pub low_confidence: bool,
    pub model_fingerprint: String,
    pub input_digest: String,
}

impl ArchitecturePlan {
    pub fn component_kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(|c| c.kind.clone()).collect()
    }

    pub fn used_default_components(&self) -> bool {
        self.components
            .iter()
            .all(|c| c.source == ComponentSource::Default)
    }

    /// Check every structural invariant of the plan schema.
    pub fn validate(&self) -> Result<(), SchemaValidationError> {
        if uuid::Uuid::parse_str(&self.id).is_err() {
            return Err(SchemaValidationError::new("id", "not a UUID"));
        }
        if self.components.is_empty() {
            return Err(SchemaValidationError::new("components", "empty component list"));
        }
        let mut seen = HashSet::new();
        for c in &self.components {
            if c.kind.is_empty() {
                return Err(SchemaValidationError::new("components.kind", "empty kind"));
            }
            if !seen.insert(&c.kind) {
                return Err(SchemaValidationError::new(
                    "components",
                    format!("duplicate kind `{}`", c.kind),
                ));
            }
            if !c.score.is_finite() || !(0.0..=1.0).contains(&c.score) {
                return Err(SchemaValidationError::new(
                    "components.score",
                    format!("`{}` score {} outside [0, 1]", c.kind, c.score),
                ));
            }
        }
        for service in &self.topology.services {
            if !seen.contains(&service.kind) {
                return Err(SchemaValidationError::new(
                    "topology.services",
                    format!("`{}` is not a selected component", service.kind),
                ));
            }
        }
        if self
            .topology
            .data_flows
            .iter()
            .any(|f| f.source.trim().is_empty() || f.destination.trim().is_empty())
        {
            return Err(SchemaValidationError::new(
                "topology.data_flows",
                "flow with an empty endpoint",
            ));
        }
        if !self.risk.score.is_finite() || !(RISK_MIN..=RISK_MAX).contains(&self.risk.score) {
            return Err(SchemaValidationError::new(
                "risk.score",
                format!("{} outside [{RISK_MIN}, {RISK_MAX}]", self.risk.score),
            ));
        }
        if !self.risk.variance.is_finite() || self.risk.variance < 0.0 {
            return Err(SchemaValidationError::new("risk.variance", "negative or non-finite"));
        }
        for (field, conf) in [
            ("confidence.pattern", self.confidence.pattern),
            ("confidence.components", self.confidence.components),
            ("confidence.risk", self.confidence.risk),
        ] {
            if !(0.0..=1.0).contains(&conf.score) {
                return Err(SchemaValidationError::new(field, "score outside [0, 1]"));
            }
        }
        if self.low_confidence != self.confidence.any_low() {
            return Err(SchemaValidationError::new(
                "low_confidence",
                "disagrees with confidence report",
            ));
        }
        if self.rationale.text.trim().is_empty() {
            return Err(SchemaValidationError::new("rationale", "empty rationale"));
        }
        if self.model_fingerprint.is_empty() {
            return Err(SchemaValidationError::new("model_fingerprint", "missing"));
        }
        Ok(())
    }
}
