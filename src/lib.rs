//! Concurrent job-processing pipeline.
//!
//! One dispatcher hands numbered jobs to a fixed pool of workers through a
//! zero-capacity queue. An interrupt fires a broadcast-once shutdown signal,
//! every task stops, and a completion barrier releases once all have exited.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod pipeline;
pub mod queue;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use lifecycle::{run_pipeline, RunSummary, Shutdown};
