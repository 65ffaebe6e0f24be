//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (pool size, delay interval, job cap)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PipelineConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::PipelineConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("workers.count must be at least 1")]
    NoWorkers,

    #[error("workers.max_delay_ms must be at least 1")]
    ZeroMaxDelay,

    #[error("workers.min_delay_ms ({min}) exceeds workers.max_delay_ms ({max})")]
    InvertedDelayRange { min: u64, max: u64 },

    #[error("dispatcher.max_jobs must be at least 1 when set")]
    ZeroJobCap,

    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &PipelineConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.workers.count == 0 {
        errors.push(ValidationError::NoWorkers);
    }
    if config.workers.max_delay_ms == 0 {
        errors.push(ValidationError::ZeroMaxDelay);
    }
    if config.workers.min_delay_ms > config.workers.max_delay_ms {
        errors.push(ValidationError::InvertedDelayRange {
            min: config.workers.min_delay_ms,
            max: config.workers.max_delay_ms,
        });
    }
    if config.dispatcher.max_jobs == Some(0) {
        errors.push(ValidationError::ZeroJobCap);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
