//! Playback clock: start/stop state plus the periodic tick that advances
//! time.
//!
//! The clock does not own the time value. It decides *when* a tick is due
//! and, through [`advance`], *what* the next time is; the session applies
//! the result and re-evaluates the envelope.

pub mod timer;

pub use timer::TickTimer;

use std::time::{Duration, Instant};

/// Upper end of the timeline.
pub const TIME_MAX: f64 = 100.0;

/// Time added per tick, independent of the tick interval.
pub const TIME_STEP: f64 = 1.0;

/// Clock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running,
}

impl ClockState {
    /// Label for the start/stop control: the action it would perform.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Stopped => "start",
            Self::Running => "stop",
        }
    }
}

/// Next time position after one tick from `current`.
///
/// Below the end the step is added and clamped; at the end the timeline
/// wraps back to zero.
pub fn advance(current: f64) -> f64 {
    if current < TIME_MAX {
        (current + TIME_STEP).min(TIME_MAX)
    } else {
        0.0
    }
}

#[derive(Debug)]
pub struct PlaybackClock {
    state: ClockState,
    interval: Duration,
    timer: TickTimer,
}

impl PlaybackClock {
    /// Create a stopped clock ticking every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            state: ClockState::Stopped,
            interval,
            timer: TickTimer::new(),
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Change the tick interval. A pending tick keeps its deadline; the
    /// new interval applies from the next reschedule.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Start running with the first tick due at `now`. No-op if already
    /// running. Returns whether the state changed.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = ClockState::Running;
        self.timer.schedule(now);
        true
    }

    /// Stop and cancel the pending tick. Returns whether the state changed.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = ClockState::Stopped;
        self.timer.clear();
        true
    }

    /// Whether a tick is due at `now`. A due tick is consumed and the next
    /// one is scheduled one interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        if !self.timer.poll(now) {
            return false;
        }
        self.timer.schedule(now + self.interval);
        true
    }

    /// Time left until the next tick, if one is pending.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn advance_steps_by_one() {
        assert_eq!(advance(0.0), 1.0);
        assert_eq!(advance(41.0), 42.0);
        assert_eq!(advance(98.0), 99.0);
    }

    #[test]
    fn advance_clamps_at_max() {
        assert_eq!(advance(99.0), 100.0);
        assert_eq!(advance(99.5), 100.0);
    }

    #[test]
    fn advance_wraps_from_max() {
        assert_eq!(advance(100.0), 0.0);
    }

    #[test]
    fn toggle_labels() {
        assert_eq!(ClockState::Stopped.toggle_label(), "start");
        assert_eq!(ClockState::Running.toggle_label(), "stop");
    }

    #[test]
    fn initial_state() {
        let clock = PlaybackClock::new(SECOND);
        assert_eq!(clock.state(), ClockState::Stopped);
        assert!(clock.time_until_tick(Instant::now()).is_none());
    }

    #[test]
    fn first_tick_is_immediate() {
        let now = Instant::now();
        let mut clock = PlaybackClock::new(SECOND);
        assert!(clock.start(now));
        assert!(clock.is_running());
        assert!(clock.poll(now));
    }

    #[test]
    fn ticks_follow_interval() {
        let now = Instant::now();
        let mut clock = PlaybackClock::new(SECOND);
        clock.start(now);
        assert!(clock.poll(now));
        assert!(!clock.poll(now + Duration::from_millis(999)));
        assert!(clock.poll(now + SECOND));
        assert!(!clock.poll(now + SECOND));
        assert!(clock.poll(now + 2 * SECOND));
    }

    #[test]
    fn stopped_clock_never_ticks() {
        let now = Instant::now();
        let mut clock = PlaybackClock::new(SECOND);
        assert!(!clock.poll(now + 10 * SECOND));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let now = Instant::now();
        let mut clock = PlaybackClock::new(SECOND);
        clock.start(now);
        assert!(clock.stop());
        assert!(clock.time_until_tick(now).is_none());
        assert!(!clock.poll(now + 5 * SECOND));
        assert!(!clock.stop());
    }

    #[test]
    fn fired_tick_reports_next_deadline() {
        let now = Instant::now();
        let mut clock = PlaybackClock::new(SECOND);
        clock.start(now);
        assert_eq!(clock.time_until_tick(now), Some(Duration::ZERO));
        assert!(clock.poll(now));
        assert_eq!(clock.time_until_tick(now), Some(SECOND));
        assert!(clock.stop());
        assert!(clock.time_until_tick(now).is_none());
        assert!(!clock.poll(now + SECOND));
    }

    #[test]
    fn restart_keeps_single_pending_tick() {
        let now = Instant::now();
        let mut clock = PlaybackClock::new(SECOND);
        clock.start(now);
        clock.poll(now);
        clock.stop();
        let later = now + Duration::from_millis(300);
        clock.start(later);
        // The tick scheduled before the stop must not fire.
        assert!(clock.poll(later));
        assert!(!clock.poll(now + SECOND));
        assert!(clock.poll(later + SECOND));
    }

    #[test]
    fn start_twice_does_not_reschedule() {
        let now = Instant::now();
        let mut clock = PlaybackClock::new(SECOND);
        clock.start(now);
        clock.poll(now);
        assert!(!clock.start(now + Duration::from_millis(10)));
        assert_eq!(clock.time_until_tick(now), Some(SECOND));
    }

    #[test]
    fn interval_change_applies_on_next_reschedule() {
        let now = Instant::now();
        let mut clock = PlaybackClock::new(SECOND);
        clock.start(now);
        clock.poll(now);
        clock.set_interval(Duration::from_millis(200));
        assert_eq!(clock.time_until_tick(now), Some(SECOND));
        assert!(clock.poll(now + SECOND));
        assert_eq!(
            clock.time_until_tick(now + SECOND),
            Some(Duration::from_millis(200))
        );
    }
}
