//! Prompts sent to the elaboration model.

use archon_core::traits::ElaborationRequest;
use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are an expert software architect.
The architecture has already been decided. Explain it; do not change it.
Return ONLY a JSON object with these fields:
{
  \"rationale\": \"why this architecture fits the project\",
  \"pattern\": \"<the decided pattern, unchanged>\",
  \"components\": [{\"kind\": \"<one of the decided components>\", \"role\": \"...\", \"technologies\": [\"...\"]}],
  \"deployment\": \"...\",
  \"scaling\": \"...\",
  \"security\": [\"...\"]
}
Rules:
- mention only the decided components, using their exact kinds
- technologies must be concrete (e.g. PostgreSQL, Redis, Kubernetes)
- security must list 3 to 6 actionable items";

/// User prompt carrying the decided structure and project context.
pub fn build_user_prompt(request: &ElaborationRequest) -> String {
    let hints = &request.hints;
    let opt = |v: Option<String>| v.unwrap_or_else(|| "unspecified".to_string());
    let kinds: Vec<&str> = request.components.iter().map(|k| k.as_str()).collect();
    format!(
        "Explain this architecture plan.

Decided:
- pattern: {pattern}
- components: {components}
- risk: {risk}

Project:
- name: {name}
- description: {description}
- domain: {domain}
- scale: {scale}
- budget: {budget}
- cloud_target: {cloud}
- data_volume: {volume}
- team_size: {team}
- expected_users: {users}
- compliance: {compliance}

Return ONLY JSON matching the schema.",
        pattern = request.pattern,
        components = kinds.join(", "),
        risk = request.risk_bucket,
        name = opt(hints.name.clone()),
        description = request.project_text.trim(),
        domain = opt(hints.domain.clone()),
        scale = opt(hints.scale.map(wire_name)),
        budget = opt(hints.budget.map(wire_name)),
        cloud = opt(hints.cloud_target.map(wire_name)),
        volume = opt(hints.data_volume.map(wire_name)),
        team = opt(hints.team_size.map(|t| t.to_string())),
        users = opt(hints.expected_users.map(|u| u.to_string())),
        compliance = if hints.compliance.is_empty() {
            "none".to_string()
        } else {
            hints.compliance.join(", ")
        },
    )
}

/// Serialized name of a hint enum (`on-prem`, `startup`, ...).
pub(crate) fn wire_name<T: Serialize>(value: T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => "unspecified".to_string(),
    }
}
