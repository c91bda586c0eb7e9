//! Tick timer: a single cancellable deferred tick.
//!
//! The timer never holds more than one pending tick. Scheduling replaces
//! whatever was pending, so a stop/restart cycle can never leave an older
//! deadline behind to fire later.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick at `deadline`, replacing any pending tick.
    pub fn schedule(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    /// Drop the pending tick. Returns whether one was pending.
    pub fn clear(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Time left until the pending tick is due (zero if overdue).
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Fire the pending tick if it is due at `now`. A fired tick is
    /// consumed; the caller reschedules if it wants another.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
