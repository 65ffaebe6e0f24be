//! Shutdown coordination for the pipeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Broadcast-once cancellation signal.
///
/// Every clone observes the same state. The signal starts open and moves to
/// fired at most once; after that, [`Shutdown::triggered`] resolves immediately
/// for every current and future waiter.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    token: CancellationToken,
    /// Only elects the caller whose `trigger` returns `true`; the token is
    /// the signal's state for everything else.
    fired: Arc<AtomicBool>,
}

impl Shutdown {
    /// Create a new, open signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal.
    ///
    /// Returns `true` only for the call that performed the transition;
    /// repeated calls are no-ops.
    pub fn trigger(&self) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.token.cancel();
        true
    }

    /// Whether the signal has fired.
    ///
    /// Reads the same token [`Shutdown::triggered`] waits on, so a `true`
    /// here means every waiter has been released.
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the signal fires.
    pub async fn triggered(&self) {
        self.token.cancelled().await
    }
}
