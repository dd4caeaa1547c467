use serde::{Deserialize, Serialize};

/// Layout of a [`FeatureVector`]: `[embedding | attributes]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub version: u32,
    pub embedding_dims: usize,
    pub attribute_names: Vec<String>,
}

impl FeatureSchema {
    pub fn attribute_dims(&self) -> usize {
        self.attribute_names.len()
    }

    pub fn total_dims(&self) -> usize {
        self.embedding_dims + self.attribute_dims()
    }
}

/// Encoded request features. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f32>,
    schema_version: u32,
}

impl FeatureVector {
    pub fn new(values: Vec<f32>, schema_version: u32) -> Self {
        Self {
            values,
            schema_version,
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }
}
