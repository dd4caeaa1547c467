use serde::{Deserialize, Serialize};

/// Deployment target hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloudTarget {
    Aws,
    Azure,
    Gcp,
    OnPrem,
}

impl CloudTarget {
    pub const ALL: [CloudTarget; 4] = [
        CloudTarget::Aws,
        CloudTarget::Azure,
        CloudTarget::Gcp,
        CloudTarget::OnPrem,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataVolume {
    Small,
    Medium,
    Large,
}

impl DataVolume {
    pub const ALL: [DataVolume; 3] = [DataVolume::Small, DataVolume::Medium, DataVolume::Large];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Prototype,
    Startup,
    Enterprise,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Prototype, Scale::Startup, Scale::Enterprise];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Medium, Budget::High];
}

/// Optional structured hints supplied alongside the free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectHints {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub scale: Option<Scale>,
    pub budget: Option<Budget>,
    pub cloud_target: Option<CloudTarget>,
    pub data_volume: Option<DataVolume>,
    pub team_size: Option<u32>,
    pub expected_users: Option<u64>,
    pub compliance: Vec<String>,
}

/// Immutable request input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescription {
    pub text: String,
    #[serde(default)]
    pub hints: ProjectHints,
}

impl ProjectDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hints: ProjectHints::default(),
        }
    }

    pub fn with_hints(text: impl Into<String>, hints: ProjectHints) -> Self {
        Self {
            text: text.into(),
            hints,
        }
    }

    /// blake3 over the canonical JSON form. Stable for identical inputs.
    pub fn digest(&self) -> String {
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        blake3::hash(&canonical).to_hex().to_string()
    }
}
