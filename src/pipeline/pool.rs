//! Worker pool.

use crate::config::WorkerConfig;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::tracker::{TaskExit, TaskGroup};
use crate::pipeline::worker::{DelayRange, Worker};
use crate::queue::JobReceiver;

/// Fixed-size set of workers sharing one queue.
pub struct WorkerPool {
    size: usize,
    delay: DelayRange,
}

impl WorkerPool {
    pub fn new(size: usize, delay: DelayRange) -> Self {
        Self { size, delay }
    }

    pub fn from_config(config: &WorkerConfig) -> Self {
        let (min, max) = config.delay_range();
        Self::new(config.count, DelayRange::new(min, max))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Register and start every worker, ids `0..size`.
    pub fn spawn(&self, queue: &JobReceiver, shutdown: &Shutdown, tasks: &mut TaskGroup) {
        for id in 0..self.size {
            let worker = Worker::new(id, queue.clone(), shutdown.clone(), self.delay);
            tasks.spawn(async move { TaskExit::Worker(worker.run().await) });
        }
        tracing::debug!(workers = self.size, "Worker pool started");
    }
}
