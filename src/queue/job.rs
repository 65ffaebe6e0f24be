//! Job definition.

use std::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tokio::time::Instant;

/// One unit of simulated work.
///
/// Created by the dispatcher, moved through the queue into exactly one
/// worker, completed there and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Sequence number assigned by the dispatcher, starting at 0.
    pub id: u64,
    /// When the dispatcher created the job.
    pub requested_at: Instant,
    /// When a worker finished the job; `None` until then.
    pub finished_at: Option<Instant>,
}

impl Job {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            requested_at: Instant::now(),
            finished_at: None,
        }
    }

    /// Stamp the job as finished now.
    pub fn complete(&mut self) {
        self.finished_at = Some(Instant::now());
    }

    /// Time from request to completion.
    pub fn processing_time(&self) -> Option<Duration> {
        self.finished_at
            .map(|finished| finished.saturating_duration_since(self.requested_at))
    }
}

// Instants are process-local, so only the derived duration is exported.
impl Serialize for Job {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Job", 2)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field(
            "processing_time_ms",
            &self.processing_time().map(|d| d.as_secs_f64() * 1000.0),
        )?;
        state.end()
    }
}
