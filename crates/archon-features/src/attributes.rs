//! Hint attributes: one-hot categorical blocks plus scaled numeric features.
//!
//! Absent or unknown values encode as all zeros in their block.

use archon_core::models::{Budget, CloudTarget, DataVolume, ProjectHints, Scale};

/// Maximum compliance regimes counted before saturating.
const COMPLIANCE_CAP: f32 = 5.0;
/// log10(1 + users) at which the user feature saturates (10M users).
const USERS_LOG_CAP: f32 = 7.0;
/// log2(1 + team) at which the team feature saturates (255 people).
const TEAM_LOG_CAP: f32 = 8.0;

/// Attribute names in encoding order.
pub fn attribute_names() -> Vec<String> {
    let mut names = Vec::new();
    names.extend(Scale::ALL.iter().map(|s| format!("scale:{}", scale_name(*s))));
    names.extend(Budget::ALL.iter().map(|b| format!("budget:{}", budget_name(*b))));
    names.extend(
        CloudTarget::ALL
            .iter()
            .map(|c| format!("cloud_target:{}", cloud_name(*c))),
    );
    names.extend(
        DataVolume::ALL
            .iter()
            .map(|d| format!("data_volume:{}", volume_name(*d))),
    );
    names.push("expected_users_log".to_string());
    names.push("compliance_count".to_string());
    names.push("team_size_log".to_string());
    names
}

/// Encode hints in the order given by [`attribute_names`].
pub fn encode_attributes(hints: &ProjectHints) -> Vec<f32> {
    let mut out = Vec::with_capacity(attribute_names().len());
    one_hot(&mut out, &Scale::ALL, hints.scale);
    one_hot(&mut out, &Budget::ALL, hints.budget);
    one_hot(&mut out, &CloudTarget::ALL, hints.cloud_target);
    one_hot(&mut out, &DataVolume::ALL, hints.data_volume);

    let users = hints
        .expected_users
        .map_or(0.0, |u| (1.0 + u as f64).log10() as f32 / USERS_LOG_CAP);
    out.push(users.clamp(0.0, 1.0));

    let compliance = hints
        .compliance
        .iter()
        .filter(|c| !c.trim().is_empty())
        .count() as f32;
    out.push((compliance.min(COMPLIANCE_CAP) / COMPLIANCE_CAP).clamp(0.0, 1.0));

    let team = hints
        .team_size
        .map_or(0.0, |t| (1.0 + t as f64).log2() as f32 / TEAM_LOG_CAP);
    out.push(team.clamp(0.0, 1.0));
    out
}

fn one_hot<T: PartialEq + Copy>(out: &mut Vec<f32>, all: &[T], value: Option<T>) {
    out.extend(all.iter().map(|v| if Some(*v) == value { 1.0 } else { 0.0 }));
}

fn scale_name(s: Scale) -> &'static str {
    match s {
        Scale::Prototype => "prototype",
        Scale::Startup => "startup",
        Scale::Enterprise => "enterprise",
    }
}

fn budget_name(b: Budget) -> &'static str {
    match b {
        Budget::Low => "low",
        Budget::Medium => "medium",
        Budget::High => "high",
    }
}

fn cloud_name(c: CloudTarget) -> &'static str {
    match c {
        CloudTarget::Aws => "aws",
        CloudTarget::Azure => "azure",
        CloudTarget::Gcp => "gcp",
        CloudTarget::OnPrem => "on-prem",
    }
}

fn volume_name(d: DataVolume) -> &'static str {
    match d {
        DataVolume::Small => "small",
        DataVolume::Medium => "medium",
        DataVolume::Large => "large",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_values_line_up() {
        assert_eq!(attribute_names().len(), 16);
        assert_eq!(
            encode_attributes(&ProjectHints::default()).len(),
            attribute_names().len()
        );
    }

    #[test]
    fn absent_hints_are_all_zero() {
        assert!(encode_attributes(&ProjectHints::default())
            .iter()
            .all(|&v| v == 0.0));
    }

    #[test]
    fn one_hot_sets_single_slot() {
        let hints = ProjectHints {
            cloud_target: Some(CloudTarget::Gcp),
            ..Default::default()
        };
        let v = encode_attributes(&hints);
        let names = attribute_names();
        let idx = names.iter().position(|n| n == "cloud_target:gcp").unwrap();
        assert_eq!(v[idx], 1.0);
        assert_eq!(v.iter().filter(|&&x| x == 1.0).count(), 1);
    }

    #[test]
    fn numeric_features_saturate() {
        let hints = ProjectHints {
            expected_users: Some(u64::MAX),
            team_size: Some(u32::MAX),
            compliance: vec!["gdpr".into(); 12],
            ..Default::default()
        };
        let v = encode_attributes(&hints);
        assert_eq!(&v[13..], &[1.0, 1.0, 1.0]);
    }
}
