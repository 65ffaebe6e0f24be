//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the pipeline.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the job pipeline.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Worker pool sizing and simulated processing latency.
    pub workers: WorkerConfig,

    /// Job production settings.
    pub dispatcher: DispatcherConfig,

    /// Shutdown behaviour once the interrupt arrives.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Worker pool configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WorkerConfig {
    /// Number of workers in the pool.
    pub count: usize,

    /// Lower bound of the simulated processing delay (inclusive).
    pub min_delay_ms: u64,

    /// Upper bound of the simulated processing delay (inclusive).
    pub max_delay_ms: u64,
}

impl WorkerConfig {
    /// Processing delay interval as durations.
    pub fn delay_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_delay_ms),
            Duration::from_millis(self.max_delay_ms),
        )
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            count: 10,
            min_delay_ms: 1,
            max_delay_ms: 500,
        }
    }
}

/// Dispatcher configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Stop producing after this many jobs (unbounded when absent).
    /// The dispatcher keeps running until cancellation either way.
    pub max_jobs: Option<u64>,
}

/// Shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Seconds to wait for tasks after the interrupt; 0 waits forever.
    pub timeout_secs: u64,
}

impl ShutdownConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines for terminals.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
