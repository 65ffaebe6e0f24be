//! Metrics collection.
//!
//! # Responsibilities
//! - Define pipeline metrics (jobs dispatched, jobs processed, latency)
//! - Track how many long-running tasks are still registered
//!
//! # Metrics
//! - `pipeline_jobs_dispatched_total` (counter): jobs a worker accepted
//! - `pipeline_jobs_processed_total` (counter): completed jobs by worker
//! - `pipeline_job_processing_seconds` (histogram): request-to-finish time
//! - `pipeline_active_tasks` (gauge): tasks registered on the barrier
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no exporter is installed here,
//!   so updates are no-ops unless the host process installs a recorder
//! - Per-worker label only on the processed counter

use std::time::Duration;

pub fn record_job_dispatched() {
    metrics::counter!("pipeline_jobs_dispatched_total").increment(1);
}

pub fn record_job_processed(worker_id: usize, processing_time: Duration) {
    metrics::counter!("pipeline_jobs_processed_total", "worker" => worker_id.to_string())
        .increment(1);
    metrics::histogram!("pipeline_job_processing_seconds").record(processing_time.as_secs_f64());
}

pub fn record_active_tasks(active: usize) {
    metrics::gauge!("pipeline_active_tasks").set(active as f64);
}
