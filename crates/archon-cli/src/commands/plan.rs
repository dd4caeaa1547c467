use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use archon_core::models::ProjectDescription;
use archon_core::ArchonConfig;
use archon_runtime::{ArchonRuntime, RuntimeOptions};

use super::boundary;

pub async fn run(
    config: ArchonConfig,
    text: Option<String>,
    input: Option<PathBuf>,
    domain: Option<String>,
) -> Result<()> {
    let mut description = match (text, input) {
        (Some(text), None) => ProjectDescription::new(text),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing description in {}", path.display()))?
        }
        _ => bail!("provide either a description text or --input"),
    };
    if domain.is_some() {
        description.hints.domain = domain;
    }

    let runtime = ArchonRuntime::new(config, RuntimeOptions::default()).map_err(boundary)?;
    let plan = runtime.plan(&description).await.map_err(boundary)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
