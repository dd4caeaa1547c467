//! Pull a JSON object out of free-form model output.

use std::sync::LazyLock;

use archon_core::errors::ElaborationError;
use regex::Regex;
use serde::Deserialize;

static FENCED_JSON: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").ok());

/// Loosely-typed elaboration as returned by the model. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ElaborationPayload {
    pub rationale: String,
    pub pattern: Option<String>,
    pub components: Option<Vec<PayloadComponent>>,
    /// Free text or a structured object.
    pub deployment: Option<serde_json::Value>,
    pub scaling: Option<String>,
    pub security: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PayloadComponent {
    #[serde(alias = "name")]
    pub kind: String,
    pub role: String,
    pub technologies: Vec<String>,
}

/// Fenced ```json block first, otherwise the first balanced `{...}` object.
pub fn extract_json(raw: &str) -> Result<&str, ElaborationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(invalid("empty response"));
    }

    if let Some(re) = FENCED_JSON.as_ref() {
        if let Some(m) = re.captures(text).and_then(|c| c.get(1)) {
            return Ok(m.as_str().trim());
        }
    }

    let first = text.find('{').ok_or_else(|| invalid("no JSON object in response"))?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape = false;
    for (offset, ch) in text[first..].char_indices() {
        if in_string {
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(text[first..=first + offset].trim());
                }
            }
            _ => {}
        }
    }
    Err(invalid("unbalanced JSON object in response"))
}

/// Drop commas directly before a closing brace or bracket. String literals
/// are copied untouched.
pub fn remove_trailing_commas(json: &str) -> String {
    let chars: Vec<char> = json.chars().collect();
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escape = false;
    for (i, &ch) in chars.iter().enumerate() {
        if in_string {
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            out.push(ch);
            continue;
        }
        if ch == ',' {
            let next = chars[i + 1..].iter().copied().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }
        if ch == '"' {
            in_string = true;
        }
        out.push(ch);
    }
    out
}

/// Extract and deserialize a payload, repairing trailing commas only when
/// the extracted text does not parse as-is.
pub fn parse_payload(raw: &str) -> Result<ElaborationPayload, ElaborationError> {
    let json = extract_json(raw)?;
    match serde_json::from_str(json) {
        Ok(payload) => Ok(payload),
        Err(_) => serde_json::from_str(&remove_trailing_commas(json))
            .map_err(|e| invalid(&format!("payload does not parse: {e}"))),
    }
}

fn invalid(reason: &str) -> ElaborationError {
    ElaborationError::InvalidOutput {
        reason: reason.to_string(),
    }
}
