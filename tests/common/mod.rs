//! Shared utilities for pipeline integration tests.

use std::future::Future;
use std::time::Duration;

use job_pipeline::config::PipelineConfig;
use tokio::sync::oneshot;

/// Config with `workers` workers and a fixed delay interval.
pub fn config(workers: usize, min_delay_ms: u64, max_delay_ms: u64) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.workers.count = workers;
    config.workers.min_delay_ms = min_delay_ms;
    config.workers.max_delay_ms = max_delay_ms;
    config
}

/// Interrupt that arrives after `delay`.
pub fn interrupt_after(delay: Duration) -> impl Future<Output = ()> + Send + 'static {
    tokio::time::sleep(delay)
}

/// Interrupt fired by hand through the returned sender.
#[allow(dead_code)]
pub fn manual_interrupt() -> (oneshot::Sender<()>, impl Future<Output = ()> + Send + 'static) {
    let (tx, rx) = oneshot::channel();
    (tx, async move {
        let _ = rx.await;
    })
}
