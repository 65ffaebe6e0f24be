//! Job consumer.
//!
//! # Responsibilities
//! - Take jobs from the queue until shutdown fires
//! - Simulate processing with a random delay
//! - Keep private statistics and report them on exit
//!
//! # Design Decisions
//! - Statistics live on the worker's own stack; only the final report
//!   leaves the task, so no locking is involved
//! - A job already being processed is finished even if shutdown fires
//!   meanwhile, which bounds shutdown by the maximum delay

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use crate::lifecycle::shutdown::Shutdown;
use crate::observability::metrics;
use crate::queue::{Job, JobReceiver, Take};

/// Statistics a worker reports when it stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub jobs_processed: u64,
    pub last_job: Option<Job>,
}

impl WorkerReport {
    fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            jobs_processed: 0,
            last_job: None,
        }
    }

    /// Processing time of the most recently completed job.
    pub fn last_processing_time(&self) -> Option<Duration> {
        self.last_job.as_ref().and_then(Job::processing_time)
    }
}

impl fmt::Display for WorkerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "worker-{} stopped, {} jobs processed, last job: ",
            self.worker_id, self.jobs_processed
        )?;
        match &self.last_job {
            Some(job) => write!(
                f,
                "id={} processing_time={:?}",
                job.id,
                job.processing_time().unwrap_or_default()
            ),
            None => write!(f, "none"),
        }
    }
}

/// Inclusive bounds of the simulated processing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl DelayRange {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// Draw a delay uniformly from the range.
    pub fn sample(&self) -> Duration {
        let min = saturating_millis(self.min);
        let max = saturating_millis(self.max).max(min);
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(Duration::from_millis(1), Duration::from_millis(500))
    }
}

/// One pool slot.
pub struct Worker {
    id: usize,
    queue: JobReceiver,
    shutdown: Shutdown,
    delay: DelayRange,
}

impl Worker {
    pub fn new(id: usize, queue: JobReceiver, shutdown: Shutdown, delay: DelayRange) -> Self {
        Self {
            id,
            queue,
            shutdown,
            delay,
        }
    }

    pub async fn run(self) -> WorkerReport {
        tracing::info!(worker_id = self.id, "Starting worker");
        let mut report = WorkerReport::new(self.id);

        while let Take::Job(mut job) = self.queue.take(&self.shutdown).await {
            tokio::time::sleep(self.delay.sample()).await;
            job.complete();

            if let Some(elapsed) = job.processing_time() {
                metrics::record_job_processed(self.id, elapsed);
            }
            tracing::trace!(worker_id = self.id, job_id = job.id, "Job processed");

            report.jobs_processed += 1;
            report.last_job = Some(job);
        }

        tracing::info!(
            worker_id = self.id,
            jobs_processed = report.jobs_processed,
            last_job_id = ?report.last_job.as_ref().map(|job| job.id),
            processing_time = ?report.last_processing_time(),
            "Worker stopped"
        );
        report
    }
}
