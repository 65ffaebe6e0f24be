//! End-to-end shutdown behaviour of the pipeline.

use std::time::Duration;

use job_pipeline::lifecycle::run_pipeline;
use tokio::time::Instant;

mod common;

#[tokio::test(start_paused = true)]
async fn test_immediate_interrupt_stops_idle_workers() {
    let config = common::config(3, 1, 500);

    let summary = run_pipeline(&config, async {}).await;

    assert_eq!(summary.workers.len(), 3);
    for (id, report) in summary.workers.iter().enumerate() {
        assert_eq!(report.worker_id, id);
        assert_eq!(report.jobs_processed, 0);
        assert!(report.last_job.is_none());
        assert_eq!(
            report.to_string(),
            format!("worker-{id} stopped, 0 jobs processed, last job: none")
        );
    }
    assert_eq!(summary.dispatcher.jobs_dispatched, 0);
}

#[tokio::test(start_paused = true)]
async fn test_single_worker_reports_last_of_five_jobs() {
    let mut config = common::config(1, 1, 500);
    config.dispatcher.max_jobs = Some(5);

    // Five jobs take at most 2.5s; the interrupt arrives well after.
    let summary = run_pipeline(&config, common::interrupt_after(Duration::from_secs(10))).await;

    assert_eq!(summary.dispatcher.jobs_dispatched, 5);
    assert_eq!(summary.dispatcher.last_job_id, Some(4));

    let report = &summary.workers[0];
    assert_eq!(report.jobs_processed, 5);
    let last = report.last_job.as_ref().expect("worker processed jobs");
    assert_eq!(last.id, 4);
    assert_eq!(
        report.last_processing_time(),
        Some(last.finished_at.unwrap() - last.requested_at)
    );
    assert!(report.last_processing_time().unwrap() >= Duration::from_millis(1));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_bounded_by_max_delay() {
    let config = common::config(4, 100, 500);
    let interrupt_at = Duration::from_secs(5);

    let start = Instant::now();
    let summary = run_pipeline(&config, common::interrupt_after(interrupt_at)).await;
    let elapsed = start.elapsed();

    assert!(elapsed >= interrupt_at);
    assert!(
        elapsed <= interrupt_at + Duration::from_millis(510),
        "shutdown took {elapsed:?}"
    );
    assert_eq!(summary.workers.len(), 4);
    assert!(summary.jobs_processed() > 0);
}

#[tokio::test(start_paused = true)]
async fn test_manual_interrupt_releases_barrier() {
    let config = common::config(2, 10, 20);
    let (fire, interrupt) = common::manual_interrupt();

    let run = tokio::spawn(async move { run_pipeline(&config, interrupt).await });

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(!run.is_finished(), "pipeline must run until interrupted");

    fire.send(()).unwrap();
    let summary = run.await.unwrap();
    assert_eq!(summary.workers.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_grace_period_does_not_cut_normal_shutdown() {
    let mut config = common::config(2, 200, 200);
    config.shutdown.timeout_secs = 5;

    let summary = run_pipeline(&config, common::interrupt_after(Duration::from_secs(2))).await;

    assert_eq!(summary.workers.len(), 2);
    assert!(summary.dispatcher.jobs_dispatched > 0);
}
