//! Debounced recomputation for interactive callers.
//!
//! A form that recomputes on every keystroke would rebuild the whole
//! curve many times a second.  [`Debouncer`] defers each submitted
//! input until a quiet period has passed with no newer submission, and
//! publishes the result on a [`tokio::sync::watch`] channel.  Submitting
//! again before the period elapses aborts the pending computation.
//! The projection itself runs on the blocking pool so that a long
//! curve does not stall the runtime's async workers.
//! The engine itself does not need this; it is purely a responsiveness
//! aid for callers.

use crate::engine::project_raw;
use crate::models::{ProjectionResult, RawProjectionInput};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Quiet period used by [`Debouncer::default`].
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// A published result tagged with the submission that produced it.
#[derive(Debug, Clone)]
pub struct Debounced {
    pub generation: u64,
    pub result: Arc<ProjectionResult>,
}

pub struct Debouncer {
    quiet_period: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    sender: Arc<watch::Sender<Option<Debounced>>>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            quiet_period,
            generation: 0,
            pending: None,
            sender: Arc::new(sender),
        }
    }

    /// A receiver that observes every published result.
    pub fn subscribe(&self) -> watch::Receiver<Option<Debounced>> {
        self.sender.subscribe()
    }

    /// Schedule a projection of `input`, superseding any pending one.
    /// Returns the generation number the result will carry.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&mut self, input: RawProjectionInput) -> u64 {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let quiet_period = self.quiet_period;
        let sender = Arc::clone(&self.sender);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            match tokio::task::spawn_blocking(move || project_raw(&input)).await {
                Ok(result) => {
                    sender.send_replace(Some(Debounced {
                        generation,
                        result: Arc::new(result),
                    }));
                }
                Err(e) => warn!(generation, error = %e, "debounced projection failed"),
            }
        }));
        generation
    }

    /// Abort the pending computation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!(generation = self.generation, "superseding pending projection");
            }
            handle.abort();
        }
    }

    /// Whether a submitted input has not been published yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
