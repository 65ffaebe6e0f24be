//! OS signal handling.
//!
//! # Responsibilities
//! - Register the interrupt handlers (SIGINT, plus SIGTERM on unix)
//! - Translate the first delivery into the pipeline's shutdown signal
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - One-shot: the handler is not re-armed after the first signal
//! - A handler that cannot be registered counts as an interrupt, so no
//!   task is left waiting on a signal that can never arrive

use std::future::Future;

use crate::lifecycle::shutdown::Shutdown;

/// Resolve once the operator interrupts the process.
pub async fn interrupt() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                return;
            }
        };

        tokio::select! {
            result = tokio::signal::ctrl_c() => log_ctrl_c(result),
            _ = sigterm.recv() => tracing::info!("Received SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    log_ctrl_c(tokio::signal::ctrl_c().await);
}

fn log_ctrl_c(result: std::io::Result<()>) {
    match result {
        Ok(()) => tracing::info!("Received interrupt"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for interrupt"),
    }
}

/// Bridges an external one-shot interrupt into the shutdown signal.
///
/// The coordinator is the only component that fires [`Shutdown`].
pub struct ShutdownCoordinator<I> {
    interrupt: I,
    shutdown: Shutdown,
}

impl<I> ShutdownCoordinator<I>
where
    I: Future<Output = ()>,
{
    pub fn new(interrupt: I, shutdown: Shutdown) -> Self {
        Self {
            interrupt,
            shutdown,
        }
    }

    /// Wait for the interrupt, then fire the shutdown signal once.
    pub async fn run(self) {
        self.interrupt.await;
        if self.shutdown.trigger() {
            tracing::info!("Shutdown signal broadcast to dispatcher and workers");
        }
    }
}
