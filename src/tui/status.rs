//! Status bar: displays clock state, position, interval, and segment.

use crate::clock::ClockState;
use crate::envelope::Segment;
use crate::session::Session;

/// Status information for the TUI status bar.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub clock: ClockState,
    pub time: f64,
    pub interval_secs: f64,
    pub segment: Segment,
}

impl StatusInfo {
    /// Snapshot the session.
    pub fn from_session(session: &Session) -> Self {
        Self {
            clock: session.clock_state(),
            time: session.time(),
            interval_secs: session.interval_secs(),
            segment: session.readout().segment,
        }
    }

    /// Format the clock indicator.
    pub fn clock_display(&self) -> &str {
        match self.clock {
            ClockState::Running => "RUN",
            ClockState::Stopped => "STOP",
        }
    }

    /// Format the time position.
    pub fn position_display(&self) -> String {
        format!("t={:.1}", self.time)
    }

    /// Format the tick interval.
    pub fn interval_display(&self) -> String {
        format!("every {:.1}s", self.interval_secs)
    }
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            clock: ClockState::Stopped,
            time: 0.0,
            interval_secs: 1.0,
            segment: Segment::Outside,
        }
    }
}
