//! Startup orchestration.
//!
//! # Responsibilities
//! - Create the shutdown signal and the job queue
//! - Start the shutdown coordinator, the worker pool and the dispatcher,
//!   each registered on the completion barrier
//! - Wait on the barrier and collect every task's report
//!
//! # Design Decisions
//! - Workers start before the dispatcher, but nothing waits for them to
//!   be ready: the rendezvous queue blocks the dispatcher until one is
//! - The caller supplies the interrupt future, so tests can replace Ctrl-C

use std::future::Future;

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::ShutdownCoordinator;
use crate::lifecycle::tracker::{TaskExit, TaskGroup};
use crate::pipeline::{Dispatcher, DispatcherReport, WorkerPool, WorkerReport};
use crate::queue::job_queue;

/// Everything the pipeline's tasks reported on exit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub dispatcher: DispatcherReport,
    /// Ordered by worker id.
    pub workers: Vec<WorkerReport>,
}

impl RunSummary {
    fn from_exits(exits: Vec<TaskExit>) -> Self {
        let mut summary = Self::default();
        for exit in exits {
            match exit {
                TaskExit::Dispatcher(report) => summary.dispatcher = report,
                TaskExit::Worker(report) => summary.workers.push(report),
                TaskExit::Coordinator => {}
            }
        }
        summary.workers.sort_by_key(|report| report.worker_id);
        summary
    }

    /// Jobs completed across all workers.
    pub fn jobs_processed(&self) -> u64 {
        self.workers.iter().map(|report| report.jobs_processed).sum()
    }
}

/// Run the pipeline until `interrupt` resolves and every task has exited.
pub async fn run_pipeline<I>(config: &PipelineConfig, interrupt: I) -> RunSummary
where
    I: Future<Output = ()> + Send + 'static,
{
    let shutdown = Shutdown::new();
    let mut tasks = TaskGroup::new();

    // Coordinator first, then consumers, then the producer.
    let coordinator = ShutdownCoordinator::new(interrupt, shutdown.clone());
    tasks.spawn(async move {
        coordinator.run().await;
        TaskExit::Coordinator
    });

    let pool = WorkerPool::from_config(&config.workers);
    let (sender, receiver) = job_queue(pool.size());
    pool.spawn(&receiver, &shutdown, &mut tasks);
    // Only workers hold receivers from here on.
    drop(receiver);

    let dispatcher =
        Dispatcher::new(sender, shutdown.clone()).with_max_jobs(config.dispatcher.max_jobs);
    tasks.spawn(async move { TaskExit::Dispatcher(dispatcher.run().await) });

    tracing::info!(
        workers = pool.size(),
        tasks = tasks.active(),
        "Processing queue ... press CTRL-C to stop"
    );

    let exits = tasks
        .wait_with_grace(&shutdown, config.shutdown.timeout())
        .await;
    let summary = RunSummary::from_exits(exits);

    tracing::info!(
        jobs_dispatched = summary.dispatcher.jobs_dispatched,
        jobs_processed = summary.jobs_processed(),
        "All pipeline tasks stopped"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_orders_workers() {
        let worker = |id, jobs| {
            TaskExit::Worker(WorkerReport {
                worker_id: id,
                jobs_processed: jobs,
                last_job: None,
            })
        };
        let summary = RunSummary::from_exits(vec![
            worker(2, 1),
            TaskExit::Coordinator,
            worker(0, 4),
            TaskExit::Dispatcher(DispatcherReport {
                jobs_dispatched: 6,
                last_job_id: Some(5),
            }),
            worker(1, 0),
        ]);

        let ids: Vec<_> = summary.workers.iter().map(|w| w.worker_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(summary.jobs_processed(), 5);
        assert_eq!(summary.dispatcher.jobs_dispatched, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_interrupt() {
        let mut config = PipelineConfig::default();
        config.workers.count = 2;

        let summary = run_pipeline(&config, async {}).await;
        assert_eq!(summary.workers.len(), 2);
        assert_eq!(summary.dispatcher.jobs_dispatched, 0);
        assert_eq!(summary.jobs_processed(), 0);
    }
}
