//! Concurrent job pipeline.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 JOB PIPELINE                 │
//!                     │                                              │
//!                     │  ┌────────────┐  rendezvous  ┌────────────┐  │
//!                     │  │ dispatcher │─────────────▶│ worker 0..N│  │
//!                     │  └─────┬──────┘              └─────┬──────┘  │
//!                     │        │       ┌──────────┐        │         │
//!     CTRL-C ─────────┼────────┼──────▶│ shutdown │◀───────┘         │
//!                     │        └──────▶│  signal  │                  │
//!                     │                └──────────┘                  │
//!                     │   all tasks ──▶ completion barrier ──▶ exit  │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use job_pipeline::config::{load_config, validate_config, ConfigError, LogFormat, PipelineConfig};
use job_pipeline::lifecycle::{interrupt, run_pipeline, RunSummary};
use job_pipeline::observability::logging::init_logging;
use job_pipeline::PipelineError;

#[derive(Parser, Debug)]
#[command(name = "job-pipeline")]
#[command(version)]
#[command(about = "Dispatch simulated jobs to a worker pool until interrupted", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of workers.
    #[arg(short, long)]
    workers: Option<usize>,

    /// Stop producing jobs after this many.
    #[arg(long)]
    max_jobs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,

    /// How to print the final worker reports.
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

impl Cli {
    fn resolve_config(&self) -> Result<PipelineConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(workers) = self.workers {
            config.workers.count = workers;
        }
        if let Some(max_jobs) = self.max_jobs {
            config.dispatcher.max_jobs = Some(max_jobs);
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.json_logs {
            config.observability.log_format = LogFormat::Json;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

fn print_summary(summary: &RunSummary, format: SummaryFormat) -> Result<(), PipelineError> {
    match format {
        SummaryFormat::Text => {
            for report in &summary.workers {
                println!("{report}");
            }
        }
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        workers = config.workers.count,
        min_delay_ms = config.workers.min_delay_ms,
        max_delay_ms = config.workers.max_delay_ms,
        max_jobs = ?config.dispatcher.max_jobs,
        "job-pipeline starting"
    );

    let summary = run_pipeline(&config, interrupt()).await;
    print_summary(&summary, cli.summary)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
