//! Consensus cadence timer
//!
//! Tracks elapsed time since a team's last resolution against the
//! configured consensus window. The window length is configuration, not a
//! constant, and the time source is the injected clock port.

use crate::ports::clock::Clock;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Per-team window timer
///
/// `is_due` never mutates; the resolver calls `reset` only after a window
/// actually produced a consensus, so an empty drain leaves the timer
/// expired and the next vote resolves immediately.
pub struct CadenceTimer {
    window: Duration,
    clock: Arc<dyn Clock>,
    last_resolution: Mutex<Instant>,
}

impl CadenceTimer {
    pub fn new(window: Duration, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            window,
            clock,
            last_resolution: Mutex::new(now),
        }
    }

    /// Has the consensus window elapsed since the last resolution?
    pub fn is_due(&self) -> bool {
        let last = *self.lock();
        self.clock.now().duration_since(last) >= self.window
    }

    /// Mark "now" as the last resolution
    pub fn reset(&self) {
        *self.lock() = self.clock.now();
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Instant> {
        self.last_resolution
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
