//! Completion barrier for long-running pipeline tasks.
//!
//! Spawning a task through [`TaskGroup`] registers it; the task deregisters
//! when its future returns (or panics). Waiting on the group blocks until no
//! registered task remains and hands back what each task reported on exit.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::lifecycle::shutdown::Shutdown;
use crate::observability::metrics;
use crate::pipeline::dispatcher::DispatcherReport;
use crate::pipeline::worker::WorkerReport;

/// What a registered task returned when it deregistered.
#[derive(Debug, Clone)]
pub enum TaskExit {
    Dispatcher(DispatcherReport),
    Worker(WorkerReport),
    Coordinator,
}

/// Counting join barrier over every long-running task.
#[derive(Debug, Default)]
pub struct TaskGroup {
    tasks: JoinSet<TaskExit>,
}

impl TaskGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register and start a task.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = TaskExit> + Send + 'static,
    {
        self.tasks.spawn(task);
        metrics::record_active_tasks(self.tasks.len());
    }

    /// Number of tasks still registered.
    pub fn active(&self) -> usize {
        self.tasks.len()
    }

    /// Block until every registered task has exited.
    pub async fn wait(&mut self) -> Vec<TaskExit> {
        self.collect(std::future::pending()).await
    }

    /// Like [`TaskGroup::wait`], but once `shutdown` has fired, give the
    /// remaining tasks at most `grace` before aborting them.
    ///
    /// With no grace period this is identical to [`TaskGroup::wait`].
    pub async fn wait_with_grace(
        &mut self,
        shutdown: &Shutdown,
        grace: Option<Duration>,
    ) -> Vec<TaskExit> {
        let Some(grace) = grace else {
            return self.wait().await;
        };
        let deadline = async {
            shutdown.triggered().await;
            tokio::time::sleep(grace).await;
        };
        self.collect(deadline).await
    }

    async fn collect<D>(&mut self, deadline: D) -> Vec<TaskExit>
    where
        D: Future<Output = ()>,
    {
        tokio::pin!(deadline);
        let mut exits = Vec::with_capacity(self.tasks.len());

        loop {
            tokio::select! {
                joined = self.tasks.join_next() => {
                    match joined {
                        None => break,
                        Some(Ok(exit)) => exits.push(exit),
                        Some(Err(e)) if e.is_panic() => {
                            tracing::error!(error = %e, "Pipeline task panicked");
                        }
                        Some(Err(e)) => {
                            tracing::debug!(error = %e, "Pipeline task cancelled");
                        }
                    }
                    metrics::record_active_tasks(self.tasks.len());
                }
                _ = &mut deadline => {
                    tracing::warn!(
                        remaining = self.tasks.len(),
                        "Shutdown grace period elapsed, aborting remaining tasks"
                    );
                    self.tasks.shutdown().await;
                    metrics::record_active_tasks(0);
                    break;
                }
            }
        }

        exits
    }
}
