//! Job producer.
//!
//! # Responsibilities
//! - Number jobs 0, 1, 2, ... and stamp their request time
//! - Hand each job to the queue, one at a time
//! - Stop as soon as shutdown fires or no worker is left to take jobs
//!
//! # Design Decisions
//! - A job that could not be handed off is dropped, never recreated
//! - An optional cap stops production early, but the dispatcher still
//!   exits only when shutdown fires

use serde::Serialize;

use crate::lifecycle::shutdown::Shutdown;
use crate::observability::metrics;
use crate::queue::{Job, JobSender, Offer};

/// What the dispatcher reports when it exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatcherReport {
    /// Jobs a worker accepted.
    pub jobs_dispatched: u64,
    /// Id of the last accepted job, if any.
    pub last_job_id: Option<u64>,
}

/// Produces an unbounded, monotonically numbered stream of jobs.
pub struct Dispatcher {
    queue: JobSender,
    shutdown: Shutdown,
    max_jobs: Option<u64>,
    next_id: u64,
}

impl Dispatcher {
    pub fn new(queue: JobSender, shutdown: Shutdown) -> Self {
        Self {
            queue,
            shutdown,
            max_jobs: None,
            next_id: 0,
        }
    }

    /// Stop producing after `max_jobs` jobs.
    pub fn with_max_jobs(mut self, max_jobs: Option<u64>) -> Self {
        self.max_jobs = max_jobs;
        self
    }

    pub async fn run(mut self) -> DispatcherReport {
        let mut report = DispatcherReport::default();
        tracing::debug!(max_jobs = ?self.max_jobs, "Dispatcher starting");

        loop {
            if self.max_jobs.is_some_and(|max| self.next_id >= max) {
                tracing::info!(
                    jobs_dispatched = report.jobs_dispatched,
                    "Job limit reached, waiting for shutdown"
                );
                // Hold the queue open so idle workers keep waiting.
                self.shutdown.triggered().await;
                break;
            }

            let job = Job::new(self.next_id);
            let id = job.id;

            match self.queue.offer(job, &self.shutdown).await {
                Offer::Delivered => {
                    report.jobs_dispatched += 1;
                    report.last_job_id = Some(id);
                    metrics::record_job_dispatched();
                    tracing::trace!(job_id = id, "Job handed off");
                }
                Offer::Cancelled => {
                    tracing::debug!(job_id = id, "Shutdown fired, dropping pending job");
                    break;
                }
                Offer::Closed => {
                    tracing::warn!(job_id = id, "No workers left to take jobs");
                    break;
                }
            }

            self.next_id += 1;
        }

        tracing::info!(
            jobs_dispatched = report.jobs_dispatched,
            last_job_id = ?report.last_job_id,
            "Dispatcher stopped"
        );
        report
    }
}
