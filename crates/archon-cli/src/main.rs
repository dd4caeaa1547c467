use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use archon_core::models::Pattern;
use archon_core::tracing::init_tracing_with;
use archon_core::ArchonConfig;

mod commands;

#[derive(Parser)]
#[command(name = "archon")]
#[command(about = "Turn project descriptions into validated architecture plans")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, short, env = "ARCHON_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database path, overriding the config
    #[arg(long)]
    db: Option<PathBuf>,

    /// Emit JSON log lines on stderr
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce and store a plan for a project description
    Plan {
        /// Free-text description
        text: Option<String>,
        /// JSON file holding a full description with hints
        #[arg(long, short, conflicts_with = "text")]
        input: Option<PathBuf>,
        /// Domain hint, e.g. "fintech"
        #[arg(long)]
        domain: Option<String>,
    },
    /// Record a correction against a stored plan
    Feedback {
        plan_id: String,
        /// Corrected pattern
        #[arg(long)]
        pattern: Option<Pattern>,
        /// Corrected component kind; repeat for several
        #[arg(long = "component")]
        components: Vec<String>,
        /// Rating from 1 (useless) to 5 (exactly right)
        #[arg(long)]
        rating: Option<u8>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Print pending feedback as JSON lines for retraining
    Drain {
        /// Page size
        #[arg(long)]
        batch: Option<usize>,
        /// Acknowledge everything printed once the drain completes
        #[arg(long)]
        ack: bool,
        /// Print training samples instead of raw records
        #[arg(long)]
        samples: bool,
    },
    /// Print a stored plan
    Show { plan_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ArchonConfig::load(cli.config.as_deref()).map_err(commands::boundary)?;
    if let Some(db) = &cli.db {
        config.storage.db_path = db.display().to_string();
    }
    if cli.log_json {
        config.observability.json = true;
    }
    init_tracing_with(&config.observability);

    match cli.command {
        Commands::Plan {
            text,
            input,
            domain,
        } => commands::plan::run(config, text, input, domain).await,
        Commands::Feedback {
            plan_id,
            pattern,
            components,
            rating,
            comment,
        } => commands::feedback::run(&config, &plan_id, pattern, components, rating, comment),
        Commands::Drain {
            batch,
            ack,
            samples,
        } => commands::drain::run(&config, batch, ack, samples),
        Commands::Show { plan_id } => commands::show::run(&config, &plan_id),
    }
}
