//! Job queue subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher
//!     → Job::new (id, requested_at)
//!     → JobSender::offer ──rendezvous──► JobReceiver::take
//!     → Worker (sets finished_at, then drops the job)
//! ```
//!
//! # Design Decisions
//! - Zero-capacity: a job changes hands only when a worker is waiting
//! - Ownership moves with the job; no two tasks ever hold the same job
//! - Shutdown is folded into the blocking call, no polling flag

pub mod handoff;
pub mod job;

pub use handoff::{job_queue, JobReceiver, JobSender, Offer, Take};
pub use job::Job;
