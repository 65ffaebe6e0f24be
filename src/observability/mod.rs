//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher, workers, coordinator produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → whatever `metrics` recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Status lines are observational only; nothing parses them
//! - Metrics are cheap (no-op without a recorder)

pub mod logging;
pub mod metrics;
