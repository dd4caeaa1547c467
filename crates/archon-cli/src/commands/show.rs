use anyhow::Result;

use archon_core::errors::ArchonError;
use archon_core::traits::IPlanStore;
use archon_core::ArchonConfig;

use super::{boundary, open_storage};

pub fn run(config: &ArchonConfig, plan_id: &str) -> Result<()> {
    let storage = open_storage(config)?;
    let plan = storage
        .get_plan(plan_id)
        .map_err(boundary)?
        .ok_or_else(|| {
            boundary(ArchonError::NotFound {
                plan_id: plan_id.to_string(),
            })
        })?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
