//! Rendezvous handoff between the dispatcher and the worker pool.
//!
//! Jobs are never buffered. A worker that wants work sends a one-shot reply
//! slot up the request channel and waits on it; the dispatcher pairs the job
//! it holds with the next live slot. Only demand is queued, so the dispatcher
//! can never run ahead of the pool by more than the job in its hand.
//!
//! ```text
//!  Worker ──(oneshot slot)──► request channel ──► Dispatcher
//!  Worker ◄────────────────── Job via slot ◄──────┘
//! ```

use tokio::sync::{mpsc, oneshot};

use crate::lifecycle::shutdown::Shutdown;
use crate::queue::job::Job;

type Slot = oneshot::Sender<Job>;

/// Outcome of [`JobSender::offer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// A waiting worker received the job.
    Delivered,
    /// The shutdown signal fired first; the job was dropped.
    Cancelled,
    /// Every receiver is gone; the job was dropped.
    Closed,
}

/// Outcome of [`JobReceiver::take`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Take {
    Job(Job),
    /// Shutdown fired, or the dispatcher is gone.
    Stop,
}

/// Create a rendezvous queue.
///
/// `workers` sizes the request channel so idle workers never block each
/// other while registering demand; it does not buffer jobs.
pub fn job_queue(workers: usize) -> (JobSender, JobReceiver) {
    let (tx, rx) = mpsc::channel(workers.max(1));
    (JobSender { requests: rx }, JobReceiver { requests: tx })
}

/// Producer half. Unique: the pipeline has exactly one dispatcher.
#[derive(Debug)]
pub struct JobSender {
    requests: mpsc::Receiver<Slot>,
}

impl JobSender {
    /// Hand `job` to a waiting worker, or give up when shutdown fires.
    ///
    /// Blocks while no worker is waiting. When a job is ready and shutdown
    /// has fired at the same time, either outcome may be chosen.
    pub async fn offer(&mut self, mut job: Job, shutdown: &Shutdown) -> Offer {
        loop {
            let slot = tokio::select! {
                _ = shutdown.triggered() => return Offer::Cancelled,
                slot = self.requests.recv() => match slot {
                    Some(slot) => slot,
                    None => return Offer::Closed,
                },
            };

            match slot.send(job) {
                Ok(()) => return Offer::Delivered,
                // That worker stopped waiting; try the next request.
                Err(returned) => job = returned,
            }
        }
    }
}

/// Consumer half, cloned once per worker.
#[derive(Debug, Clone)]
pub struct JobReceiver {
    requests: mpsc::Sender<Slot>,
}

impl JobReceiver {
    /// Wait for the next job, or stop when shutdown fires.
    ///
    /// A job that already reached this worker's slot is returned even if
    /// shutdown fired at the same moment; `offer` reports `Delivered` only
    /// for jobs this returns.
    pub async fn take(&self, shutdown: &Shutdown) -> Take {
        let (slot, mut reply) = oneshot::channel();

        let registered = tokio::select! {
            _ = shutdown.triggered() => false,
            sent = self.requests.send(slot) => sent.is_ok(),
        };
        if !registered {
            return Take::Stop;
        }

        tokio::select! {
            _ = shutdown.triggered() => {
                // Refuse any further handoff, then keep what already arrived.
                reply.close();
                match reply.try_recv() {
                    Ok(job) => Take::Job(job),
                    Err(_) => Take::Stop,
                }
            }
            job = &mut reply => match job {
                Ok(job) => Take::Job(job),
                Err(_) => Take::Stop,
            },
        }
    }
}
