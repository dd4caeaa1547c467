use anyhow::Result;

use archon_core::ArchonConfig;

use super::{boundary, feedback_service};

pub fn run(config: &ArchonConfig, batch: Option<usize>, ack: bool, samples: bool) -> Result<()> {
    let service = feedback_service(config)?;
    let mut drain = match batch {
        Some(batch) => service.drain_for_retraining(batch),
        None => service.drain(),
    }
    .map_err(boundary)?;
    let mut printed = 0usize;
    for record in drain.by_ref() {
        let record = record.map_err(boundary)?;
        if samples {
            if let Some(sample) = service.training_sample(&record) {
                println!("{}", serde_json::to_string(&sample)?);
                printed += 1;
            }
        } else {
            println!("{}", serde_json::to_string(&record)?);
            printed += 1;
        }
    }

    let checkpoint = drain.checkpoint();
    tracing::info!(
        printed,
        snapshot_seq = checkpoint.snapshot_seq,
        cursor_seq = checkpoint.cursor_seq,
        "drain finished"
    );

    if ack && checkpoint.cursor_seq > 0 {
        service
            .acknowledge(checkpoint.cursor_seq)
            .map_err(boundary)?;
    }
    service.retraining_due().map_err(boundary)?;
    Ok(())
}
