//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Create signal + queue → Spawn workers → Spawn dispatcher → Spawn coordinator
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → ShutdownCoordinator → Shutdown::trigger (once)
//!
//! Shutdown (shutdown.rs):
//!     Fired → every blocked offer/take resolves → tasks return reports
//!
//! Barrier (tracker.rs):
//!     Every task registered at spawn → wait until none remain → exit
//! ```
//!
//! # Design Decisions
//! - Best-effort shutdown: queued and in-hand jobs may be dropped
//! - No task is abandoned: the process waits for all of them
//! - Optional grace period: forced abort after deadline

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod tracker;

pub use shutdown::Shutdown;
pub use signals::{interrupt, ShutdownCoordinator};
pub use startup::{run_pipeline, RunSummary};
pub use tracker::{TaskExit, TaskGroup};
