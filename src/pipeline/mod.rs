//! Job processing subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher (dispatcher.rs):
//!     Job 0, 1, 2, ... → JobSender::offer
//!
//! Worker pool (pool.rs, worker.rs):
//!     N × { JobReceiver::take → random delay → finished_at → stats }
//!
//! Both sides:
//!     Shutdown fired → leave the loop → return a report
//! ```
//!
//! # Design Decisions
//! - Whichever idle worker is ready first gets the next job
//! - Reports are returned from the task, never shared while running

pub mod dispatcher;
pub mod pool;
pub mod worker;

pub use dispatcher::{Dispatcher, DispatcherReport};
pub use pool::WorkerPool;
pub use worker::{DelayRange, Worker, WorkerReport};
