//! Error types for the pipeline binary.
//!
//! The processing core has no error path: cancellation is an ordinary
//! outcome there. Errors only arise around it, while loading configuration,
//! installing logging or printing the final summary.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to install logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("failed to encode summary: {0}")]
    Summary(#[from] serde_json::Error),
}
