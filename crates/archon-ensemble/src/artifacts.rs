//! Model artifact files and their loading.
//!
//! Each model lives in its own JSON file under the artifacts directory with a
//! header describing the feature layout it was trained against. Any problem
//! while loading is a [`ModelError`]; the process must not serve without models.

use std::path::Path;

use archon_core::constants::ARTIFACT_FORMAT_VERSION;
use archon_core::errors::{ArchonResult, ModelError};
use archon_core::models::{FeatureSchema, Pattern};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const PATTERN_FILE: &str = "pattern.json";
pub const COMPONENTS_FILE: &str = "components.json";
pub const RISK_FILE: &str = "risk.json";

/// Header carried by every artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactHeader {
    pub format_version: u32,
    pub feature_dims: usize,
    pub feature_schema_version: u32,
}

impl ArtifactHeader {
    pub fn for_schema(schema: &FeatureSchema) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_dims: schema.total_dims(),
            feature_schema_version: schema.version,
        }
    }
}

/// Softmax classifier weights: one row per pattern in `Pattern::ALL` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternArtifact {
    pub header: ArtifactHeader,
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
}

/// Per-kind logistic weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentArtifact {
    pub header: ArtifactHeader,
    pub kinds: Vec<String>,
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
}

/// Linear score head plus softplus variance head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskArtifact {
    pub header: ArtifactHeader,
    pub score_weights: Vec<f64>,
    pub score_bias: f64,
    pub variance_weights: Vec<f64>,
    pub variance_bias: f64,
}

/// All three artifacts, validated against the encoder schema.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub pattern: PatternArtifact,
    pub components: ComponentArtifact,
    pub risk: RiskArtifact,
    /// blake3 over the raw artifact bytes, in file order.
    pub fingerprint: String,
}

impl ModelArtifacts {
    /// Load and validate every artifact in `dir`.
    pub fn load(dir: &Path, schema: &FeatureSchema) -> ArchonResult<Self> {
        let mut hasher = blake3::Hasher::new();
        let pattern: PatternArtifact = read_artifact(dir, PATTERN_FILE, &mut hasher)?;
        let components: ComponentArtifact = read_artifact(dir, COMPONENTS_FILE, &mut hasher)?;
        let risk: RiskArtifact = read_artifact(dir, RISK_FILE, &mut hasher)?;

        let artifacts = Self {
            pattern,
            components,
            risk,
            fingerprint: hasher.finalize().to_hex().to_string(),
        };
        artifacts.validate(schema)?;
        info!(
            dir = %dir.display(),
            fingerprint = %artifacts.fingerprint,
            component_kinds = artifacts.components.kinds.len(),
            "model artifacts loaded"
        );
        Ok(artifacts)
    }

    /// The fingerprint `load` would report after `write`.
    pub fn content_fingerprint(&self) -> ArchonResult<String> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&serde_json::to_vec_pretty(&self.pattern)?);
        hasher.update(&serde_json::to_vec_pretty(&self.components)?);
        hasher.update(&serde_json::to_vec_pretty(&self.risk)?);
        Ok(hasher.finalize().to_hex().to_string())
    }

    /// Write the artifacts as JSON files into `dir`.
    pub fn write(&self, dir: &Path) -> ArchonResult<()> {
        write_artifact(dir, PATTERN_FILE, &self.pattern)?;
        write_artifact(dir, COMPONENTS_FILE, &self.components)?;
        write_artifact(dir, RISK_FILE, &self.risk)?;
        Ok(())
    }

    /// Check headers and shapes against the encoder schema.
    pub fn validate(&self, schema: &FeatureSchema) -> Result<(), ModelError> {
        let dims = schema.total_dims();
        check_header("pattern", &self.pattern.header, schema)?;
        check_header("components", &self.components.header, schema)?;
        check_header("risk", &self.risk.header, schema)?;

        let p = &self.pattern;
        check_len("pattern.weights", Pattern::COUNT, p.weights.len())?;
        check_len("pattern.bias", Pattern::COUNT, p.bias.len())?;
        check_rows("pattern.weights", &p.weights, dims)?;
        check_finite(PATTERN_FILE, p.weights.iter().flatten().chain(&p.bias))?;

        let c = &self.components;
        if c.kinds.is_empty() {
            return Err(ModelError::ArtifactInvalid {
                path: COMPONENTS_FILE.to_string(),
                reason: "no component kinds".to_string(),
            });
        }
        check_len("components.weights", c.kinds.len(), c.weights.len())?;
        check_len("components.bias", c.kinds.len(), c.bias.len())?;
        check_rows("components.weights", &c.weights, dims)?;
        check_finite(COMPONENTS_FILE, c.weights.iter().flatten().chain(&c.bias))?;

        let r = &self.risk;
        check_len("risk.score_weights", dims, r.score_weights.len())?;
        check_len("risk.variance_weights", dims, r.variance_weights.len())?;
        check_finite(
            RISK_FILE,
            r.score_weights
                .iter()
                .chain(&r.variance_weights)
                .chain([&r.score_bias, &r.variance_bias]),
        )?;
        Ok(())
    }
}

fn read_artifact<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    hasher: &mut blake3::Hasher,
) -> Result<T, ModelError> {
    let path = dir.join(file);
    let display = path.display().to_string();
    if !path.exists() {
        return Err(ModelError::ArtifactMissing { path: display });
    }
    let bytes = std::fs::read(&path).map_err(|e| ModelError::ArtifactInvalid {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    hasher.update(&bytes);
    serde_json::from_slice(&bytes).map_err(|e| ModelError::ArtifactInvalid {
        path: display,
        reason: e.to_string(),
    })
}

fn write_artifact<T: Serialize>(dir: &Path, file: &str, value: &T) -> ArchonResult<()> {
    let path = dir.join(file);
    let json = serde_json::to_vec_pretty(value)?;
    std::fs::write(&path, json).map_err(|e| {
        ModelError::ArtifactInvalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn check_header(
    model: &str,
    header: &ArtifactHeader,
    schema: &FeatureSchema,
) -> Result<(), ModelError> {
    if header.format_version != ARTIFACT_FORMAT_VERSION {
        return Err(ModelError::ArtifactInvalid {
            path: model.to_string(),
            reason: format!(
                "format version {} unsupported (expected {ARTIFACT_FORMAT_VERSION})",
                header.format_version
            ),
        });
    }
    if header.feature_schema_version != schema.version {
        return Err(ModelError::SchemaMismatch {
            model: model.to_string(),
            artifact: header.feature_schema_version,
            encoder: schema.version,
        });
    }
    if header.feature_dims != schema.total_dims() {
        return Err(ModelError::ShapeMismatch {
            model: model.to_string(),
            expected: schema.total_dims(),
            actual: header.feature_dims,
        });
    }
    Ok(())
}

fn check_len(model: &str, expected: usize, actual: usize) -> Result<(), ModelError> {
    if expected != actual {
        return Err(ModelError::ShapeMismatch {
            model: model.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_rows(model: &str, rows: &[Vec<f64>], dims: usize) -> Result<(), ModelError> {
    for row in rows {
        check_len(model, dims, row.len())?;
    }
    Ok(())
}

fn check_finite<'a>(
    file: &str,
    mut values: impl Iterator<Item = &'a f64>,
) -> Result<(), ModelError> {
    if values.any(|v| !v.is_finite()) {
        return Err(ModelError::ArtifactInvalid {
            path: file.to_string(),
            reason: "non-finite weight".to_string(),
        });
    }
    Ok(())
}
