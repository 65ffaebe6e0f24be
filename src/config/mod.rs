//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → PipelineConfig (validated, immutable)
//!     → handed by value to the lifecycle runner
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the pipeline starts
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    DispatcherConfig, LogFormat, ObservabilityConfig, PipelineConfig, ShutdownConfig,
    WorkerConfig,
};
pub use validation::{validate_config, ValidationError};
