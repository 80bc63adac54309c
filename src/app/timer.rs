//! Delayed pair resolution
//!
//! Schedules the settlement of a flipped pair on the tokio runtime and
//! aborts it if the owning screen goes away first.

use crate::game::Resolution;
use std::time::Duration;
use tokio::{sync::mpsc, task::JoinHandle, time::sleep};

/// Events delivered back to the play screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEvent {
    /// The reveal delay for a pair has elapsed
    Resolve(Resolution),
    /// The board is solved; fire the completion callback
    Completed,
}

/// Cancellable timer for the pending pair
#[derive(Debug, Default)]
pub struct ResolutionTimer {
    handle: Option<JoinHandle<()>>,
}

impl ResolutionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `resolution` on `tx` after `delay`, replacing any pending task
    pub fn schedule(
        &mut self,
        delay: Duration,
        resolution: Resolution,
        tx: mpsc::UnboundedSender<PlayEvent>,
    ) {
        self.cancel();
        tracing::debug!(pair = ?resolution.pair, ?delay, "scheduled pair resolution");
        self.handle = Some(tokio::spawn(async move {
            sleep(delay).await;
            let _ = tx.send(PlayEvent::Resolve(resolution));
        }));
    }

    /// Abort the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                tracing::debug!("cancelled pending pair resolution");
            }
            handle.abort();
        }
    }

    /// Whether a resolution is still waiting to fire
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ResolutionTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
