use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{ComponentKind, Pattern};

/// Plan synthesis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Minimum component score for inclusion.
    pub inclusion_threshold: f64,
    /// Scores strictly below this are `low`.
    pub risk_low_upper: f64,
    /// Scores at or above this are `high`.
    pub risk_high_lower: f64,
    /// Variance above this forces the bucket to at least `medium`.
    pub variance_ceiling: f64,
    /// Tie-break order for equal pattern probabilities.
    pub pattern_priority: Vec<Pattern>,
    /// Pattern used when the classifier output is degenerate.
    pub default_pattern: Pattern,
    /// Per-pattern component set used when nothing clears the threshold,
    /// keyed by pattern wire name (`event-driven`, ...).
    pub default_components: BTreeMap<String, Vec<ComponentKind>>,
}

impl SynthesisConfig {
    /// Default components for `pattern`, falling back to the built-in table
    /// when the configured map omits it.
    pub fn defaults_for(&self, pattern: Pattern) -> Vec<ComponentKind> {
        match self.default_components.get(pattern.as_str()) {
            Some(kinds) if !kinds.is_empty() => kinds.clone(),
            _ => builtin_default_components()
                .remove(pattern.as_str())
                .unwrap_or_default(),
        }
    }

    /// Priority rank of `pattern`; patterns missing from the list rank last
    /// in `Pattern::ALL` order.
    pub fn priority_rank(&self, pattern: Pattern) -> usize {
        self.pattern_priority
            .iter()
            .position(|p| *p == pattern)
            .unwrap_or(self.pattern_priority.len() + pattern.index())
    }
}

fn builtin_default_components() -> BTreeMap<String, Vec<ComponentKind>> {
    defaults::DEFAULT_COMPONENTS
        .iter()
        .map(|(name, kinds)| {
            (
                name.to_string(),
                kinds.iter().map(|k| ComponentKind::new(k)).collect(),
            )
        })
        .collect()
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            inclusion_threshold: defaults::DEFAULT_INCLUSION_THRESHOLD,
            risk_low_upper: defaults::DEFAULT_RISK_LOW_UPPER,
            risk_high_lower: defaults::DEFAULT_RISK_HIGH_LOWER,
            variance_ceiling: defaults::DEFAULT_RISK_VARIANCE_CEILING,
            pattern_priority: defaults::DEFAULT_PATTERN_PRIORITY
                .iter()
                .filter_map(|p| p.parse().ok())
                .collect(),
            default_pattern: defaults::DEFAULT_PATTERN
                .parse()
                .unwrap_or(Pattern::Monolith),
            default_components: builtin_default_components(),
        }
    }
}
