//! Check a parsed payload against the decided plan structure.

use archon_core::errors::ElaborationError;
use archon_core::models::{ComponentKind, ComponentNote, Elaboration, Pattern, SelectedComponent};

use super::parse::ElaborationPayload;

/// An elaboration that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedElaboration {
    pub rationale: String,
    pub details: Elaboration,
}

/// Accept the payload only when it agrees with every structural decision.
pub fn validate_payload(
    payload: ElaborationPayload,
    pattern: Pattern,
    selected: &[SelectedComponent],
    max_rationale_chars: usize,
) -> Result<ValidatedElaboration, ElaborationError> {
    let rationale = payload.rationale.trim().to_string();
    if rationale.is_empty() {
        return Err(invalid("empty rationale".to_string()));
    }
    let chars = rationale.chars().count();
    if chars > max_rationale_chars {
        return Err(invalid(format!(
            "rationale has {chars} chars, max {max_rationale_chars}"
        )));
    }

    if let Some(named) = payload.pattern.as_deref() {
        let named: Pattern = named
            .parse()
            .map_err(|_| invalid(format!("unknown pattern `{named}`")))?;
        if named != pattern {
            return Err(invalid(format!(
                "pattern `{named}` contradicts decided `{pattern}`"
            )));
        }
    }

    let mut notes = Vec::new();
    for component in payload.components.unwrap_or_default() {
        let kind = ComponentKind::new(&component.kind);
        if !selected.iter().any(|s| s.kind == kind) {
            return Err(invalid(format!("component `{kind}` is not in the plan")));
        }
        notes.push(ComponentNote {
            kind,
            role: component.role.trim().to_string(),
            technologies: component.technologies,
        });
    }

    Ok(ValidatedElaboration {
        rationale,
        details: Elaboration {
            component_notes: notes,
            deployment: payload.deployment,
            scaling: payload.scaling.filter(|s| !s.trim().is_empty()),
            security: payload.security.unwrap_or_default(),
        },
    })
}

fn invalid(reason: String) -> ElaborationError {
    ElaborationError::InvalidOutput { reason }
}
