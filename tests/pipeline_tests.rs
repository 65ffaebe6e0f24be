//! Job accounting across a full pipeline run.

use std::time::Duration;

use job_pipeline::lifecycle::run_pipeline;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_accounting_under_parallel_scheduling() {
    let workers = 8;
    let config = common::config(workers, 1, 5);

    let summary = run_pipeline(&config, common::interrupt_after(Duration::from_millis(300))).await;

    assert_eq!(summary.workers.len(), workers);

    // Every job the dispatcher handed off was owned and finished by a worker.
    let dispatched = summary.dispatcher.jobs_dispatched;
    let processed = summary.jobs_processed();
    assert_eq!(processed, dispatched);
    assert!(processed > 0);

    for report in &summary.workers {
        if let Some(job) = &report.last_job {
            assert!(job.finished_at.unwrap() >= job.requested_at);
            assert!(job.id <= summary.dispatcher.last_job_id.unwrap());
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_last_jobs_are_distinct_and_ordered() {
    let workers = 3;
    let config = common::config(workers, 50, 50);

    let summary = run_pipeline(&config, common::interrupt_after(Duration::from_secs(2))).await;

    let mut last_ids: Vec<u64> = summary
        .workers
        .iter()
        .filter_map(|report| report.last_job.as_ref().map(|job| job.id))
        .collect();
    let count = last_ids.len();
    last_ids.sort_unstable();
    last_ids.dedup();
    assert_eq!(last_ids.len(), count, "a job was seen by two workers");

    if let (Some(highest), Some(dispatched_last)) =
        (last_ids.last(), summary.dispatcher.last_job_id)
    {
        assert!(*highest <= dispatched_last);
    }
}

#[tokio::test(start_paused = true)]
async fn test_summary_serializes() {
    let mut config = common::config(2, 1, 10);
    config.dispatcher.max_jobs = Some(4);

    let summary = run_pipeline(&config, common::interrupt_after(Duration::from_secs(1))).await;
    let value = serde_json::to_value(&summary).unwrap();

    assert_eq!(value["dispatcher"]["jobs_dispatched"], 4);
    assert_eq!(value["workers"].as_array().unwrap().len(), 2);
    let processed: u64 = value["workers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["jobs_processed"].as_u64().unwrap())
        .sum();
    assert_eq!(processed, 4);
}
