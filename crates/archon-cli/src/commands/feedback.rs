use anyhow::Result;

use archon_core::models::{ComponentKind, Correction, Pattern};
use archon_core::ArchonConfig;

use super::{boundary, feedback_service};

pub fn run(
    config: &ArchonConfig,
    plan_id: &str,
    pattern: Option<Pattern>,
    components: Vec<String>,
    rating: Option<u8>,
    comment: Option<String>,
) -> Result<()> {
    let correction = Correction {
        true_pattern: pattern,
        true_components: if components.is_empty() {
            None
        } else {
            Some(components.iter().map(|c| ComponentKind::new(c)).collect())
        },
        rating,
        comment,
    };

    let record = feedback_service(config)?
        .record_feedback(plan_id, &correction)
        .map_err(boundary)?;
    println!(
        "{}",
        serde_json::json!({ "seq": record.seq, "id": record.id, "plan_id": record.plan_id })
    );
    Ok(())
}
