//! Session: the live model behind the UI.
//!
//! Holds the four inputs, the current envelope readout, and the playback
//! clock. Every write to time, attack, or decay re-evaluates the envelope
//! before returning, so `readout()` is always current.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::clock::{self, ClockState, PlaybackClock};
use crate::config::AppConfig;
use crate::envelope::{self, Envelope, Normalized};
use crate::param::BoundedParam;

pub const INTERVAL_MIN_SECS: f64 = 0.1;
pub const INTERVAL_MAX_SECS: f64 = 10.0;

/// Who changed the time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// A manual edit. Stops a running clock.
    User,
    /// A clock tick or the clock's own restart reset.
    Clock,
}

/// Identifies one of the session inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Time,
    Attack,
    Decay,
    Interval,
}

impl Param {
    pub fn label(self) -> &'static str {
        match self {
            Self::Time => "Fake Time (0-100)",
            Self::Attack => "Attack Ratio (%)",
            Self::Decay => "Decay Ratio (%)",
            Self::Interval => "Clock Interval (sec)",
        }
    }
}

#[derive(Debug)]
pub struct Session {
    time: BoundedParam,
    attack: BoundedParam,
    decay: BoundedParam,
    interval: BoundedParam,
    readout: Normalized,
    clock: PlaybackClock,
}

impl Session {
    /// Build a session from configured initial values, clamped to range.
    pub fn new(config: &AppConfig) -> Self {
        let interval = BoundedParam::new(
            config.interval_secs,
            INTERVAL_MIN_SECS,
            INTERVAL_MAX_SECS,
            0.1,
            1,
        );
        let clock = PlaybackClock::new(Duration::from_secs_f64(interval.value()));
        let mut session = Self {
            time: BoundedParam::new(config.time, 0.0, clock::TIME_MAX, 1.0, 1),
            attack: BoundedParam::new(config.attack, 0.0, 100.0, 1.0, 1),
            decay: BoundedParam::new(config.decay, 0.0, 100.0, 1.0, 1),
            interval,
            readout: Normalized::default(),
            clock,
        };
        session.evaluate();
        session
    }

    fn evaluate(&mut self) {
        self.readout =
            envelope::evaluate(self.time.value(), self.attack.value(), self.decay.value());
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.attack.value(), self.decay.value())
    }

    pub fn readout(&self) -> Normalized {
        self.readout
    }

    pub fn param(&self, which: Param) -> &BoundedParam {
        match which {
            Param::Time => &self.time,
            Param::Attack => &self.attack,
            Param::Decay => &self.decay,
            Param::Interval => &self.interval,
        }
    }

    pub fn time(&self) -> f64 {
        self.time.value()
    }

    pub fn attack(&self) -> f64 {
        self.attack.value()
    }

    pub fn decay(&self) -> f64 {
        self.decay.value()
    }

    pub fn interval_secs(&self) -> f64 {
        self.interval.value()
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Label for the start/stop control.
    pub fn toggle_label(&self) -> &'static str {
        self.clock.state().toggle_label()
    }

    /// Time left until the next clock tick, if one is pending.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.time_until_tick(now)
    }

    /// Write the time value. A user write while running stops the clock
    /// first, whether or not the value actually changes.
    pub fn set_time(&mut self, value: f64, origin: ChangeOrigin) -> f64 {
        if origin == ChangeOrigin::User && self.clock.stop() {
            info!(target: "envnorm::clock", "clock stopped by manual time change");
        }
        self.time.set(value);
        self.evaluate();
        self.time.value()
    }

    pub fn set_attack(&mut self, value: f64) -> f64 {
        self.attack.set(value);
        self.evaluate();
        self.attack.value()
    }

    pub fn set_decay(&mut self, value: f64) -> f64 {
        self.decay.set(value);
        self.evaluate();
        self.decay.value()
    }

    /// Set the tick interval. Does not interrupt a running clock.
    pub fn set_interval(&mut self, secs: f64) -> f64 {
        let secs = self.interval.set(secs);
        self.clock.set_interval(Duration::from_secs_f64(secs));
        info!(target: "envnorm::clock", interval_secs = secs, "interval changed");
        secs
    }

    /// Write any parameter as a user edit.
    pub fn set(&mut self, which: Param, value: f64) -> f64 {
        match which {
            Param::Time => self.set_time(value, ChangeOrigin::User),
            Param::Attack => self.set_attack(value),
            Param::Decay => self.set_decay(value),
            Param::Interval => self.set_interval(value),
        }
    }

    /// Move a parameter by `steps` of its step size.
    pub fn nudge(&mut self, which: Param, steps: f64) -> f64 {
        let target = self.param(which).nudged(steps);
        self.set(which, target)
    }

    pub fn set_min(&mut self, which: Param) -> f64 {
        let min = self.param(which).min();
        self.set(which, min)
    }

    pub fn set_max(&mut self, which: Param) -> f64 {
        let max = self.param(which).max();
        self.set(which, max)
    }

    /// Commit typed text to a parameter. Text that is not a finite number
    /// is dropped and the parameter keeps its last value.
    pub fn commit_text(&mut self, which: Param, text: &str) -> bool {
        match BoundedParam::parse(text) {
            Ok(value) => {
                self.set(which, value);
                true
            }
            Err(_) => false,
        }
    }

    /// Start the clock. At the end of the timeline, time rewinds to zero
    /// first. The first tick is due immediately.
    pub fn start_clock(&mut self, now: Instant) {
        if self.clock.is_running() {
            return;
        }
        if self.time.at_max() {
            self.set_time(0.0, ChangeOrigin::Clock);
        }
        self.clock.start(now);
        info!(target: "envnorm::clock", time = self.time.value(), "clock started");
    }

    pub fn stop_clock(&mut self) {
        if self.clock.stop() {
            info!(target: "envnorm::clock", time = self.time.value(), "clock stopped");
        }
    }

    pub fn toggle_clock(&mut self, now: Instant) {
        if self.clock.is_running() {
            self.stop_clock();
        } else {
            self.start_clock(now);
        }
    }

    /// Run a due clock tick, if any. Returns whether time advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.clock.poll(now) {
            return false;
        }
        let next = clock::advance(self.time.value());
        self.set_time(next, ChangeOrigin::Clock);
        debug!(target: "envnorm::clock", time = next, "tick");
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Segment;
    use assert_approx_eq::assert_approx_eq;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn default_session() {
        let s = Session::default();
        assert_eq!(s.time(), 0.0);
        assert_eq!(s.attack(), 20.0);
        assert_eq!(s.decay(), 100.0);
        assert_eq!(s.interval_secs(), 1.0);
        assert_eq!(s.clock_state(), ClockState::Stopped);
        assert_eq!(s.toggle_label(), "start");
        assert_eq!(s.readout().attack_display(), "0.00");
        assert_eq!(s.readout().decay_display(), "0.00");
    }

    #[test]
    fn config_values_are_clamped() {
        let config = AppConfig {
            time: 250.0,
            attack: -5.0,
            interval_secs: 0.01,
            ..Default::default()
        };
        let s = Session::new(&config);
        assert_eq!(s.time(), 100.0);
        assert_eq!(s.attack(), 0.0);
        assert_approx_eq!(s.interval_secs(), INTERVAL_MIN_SECS);
    }

    #[test]
    fn every_input_write_reevaluates() {
        let mut s = Session::default();
        s.set_time(10.0, ChangeOrigin::User);
        assert_eq!(s.readout().attack_display(), "0.50");

        s.set_attack(40.0);
        assert_eq!(s.readout().attack_display(), "0.25");

        s.set_time(70.0, ChangeOrigin::User);
        assert_eq!(s.readout().segment, Segment::Decay);
        assert_eq!(s.readout().decay_display(), "0.50");

        s.set_decay(55.0);
        assert_eq!(s.readout().segment, Segment::Outside);
        assert_eq!(s.readout().decay_display(), "0.00");
    }

    #[test]
    fn invalid_text_keeps_value() {
        let mut s = Session::default();
        s.set_attack(30.0);
        let before = s.readout();
        assert!(!s.commit_text(Param::Attack, "thirty"));
        assert!(!s.commit_text(Param::Attack, ""));
        assert!(!s.commit_text(Param::Attack, "nan"));
        assert_eq!(s.attack(), 30.0);
        assert_eq!(s.readout(), before);
    }

    #[test]
    fn valid_text_is_clamped() {
        let mut s = Session::default();
        assert!(s.commit_text(Param::Decay, "140"));
        assert_eq!(s.decay(), 100.0);
        assert!(s.commit_text(Param::Interval, "0.5s"));
        assert_approx_eq!(s.interval_secs(), 0.5);
    }

    #[test]
    fn start_ticks_immediately() {
        let now = Instant::now();
        let mut s = Session::default();
        s.start_clock(now);
        assert!(s.is_running());
        assert_eq!(s.toggle_label(), "stop");
        assert!(s.tick(now));
        assert_eq!(s.time(), 1.0);
        assert_approx_eq!(s.readout().attack, 0.05);
    }

    #[test]
    fn start_at_max_rewinds_and_keeps_running() {
        let now = Instant::now();
        let mut s = Session::default();
        s.set_time(100.0, ChangeOrigin::User);
        s.start_clock(now);
        assert_eq!(s.time(), 0.0);
        assert!(s.is_running());
        assert!(s.tick(now));
        assert_eq!(s.time(), 1.0);
    }

    #[test]
    fn manual_time_change_stops_clock() {
        let now = Instant::now();
        let mut s = Session::default();
        s.start_clock(now);
        s.tick(now);
        s.set_time(50.0, ChangeOrigin::User);
        assert_eq!(s.clock_state(), ClockState::Stopped);
        assert!(!s.tick(now + 10 * SECOND));
        assert_eq!(s.time(), 50.0);
    }

    #[test]
    fn manual_write_of_same_value_still_stops() {
        let now = Instant::now();
        let mut s = Session::default();
        s.start_clock(now);
        s.tick(now);
        let t = s.time();
        s.set_time(t, ChangeOrigin::User);
        assert!(!s.is_running());
    }

    #[test]
    fn bound_changes_do_not_stop_clock() {
        let now = Instant::now();
        let mut s = Session::default();
        s.start_clock(now);
        s.set_attack(50.0);
        s.set_decay(80.0);
        s.set_interval(0.2);
        assert!(s.is_running());
    }

    #[test]
    fn tick_wraps_at_end() {
        let now = Instant::now();
        let mut s = Session::default();
        s.set_time(99.0, ChangeOrigin::User);
        s.start_clock(now);
        assert!(s.tick(now));
        assert_eq!(s.time(), 100.0);
        assert!(s.tick(now + SECOND));
        assert_eq!(s.time(), 0.0);
        assert!(s.is_running());
    }

    #[test]
    fn nudge_and_extremes() {
        let mut s = Session::default();
        assert_eq!(s.nudge(Param::Time, 10.0), 10.0);
        assert_eq!(s.nudge(Param::Time, -20.0), 0.0);
        assert_eq!(s.set_max(Param::Attack), 100.0);
        assert_eq!(s.set_min(Param::Decay), 0.0);
        assert_approx_eq!(s.nudge(Param::Interval, 1.0), 1.1);
    }

    #[test]
    fn toggle_twice_returns_to_stopped() {
        let now = Instant::now();
        let mut s = Session::default();
        s.toggle_clock(now);
        assert!(s.is_running());
        s.toggle_clock(now);
        assert!(!s.is_running());
        assert!(s.time_until_tick(now).is_none());
    }

    #[test]
    fn param_labels() {
        assert_eq!(Param::Time.label(), "Fake Time (0-100)");
        assert_eq!(Param::Interval.label(), "Clock Interval (sec)");
    }

    #[test]
    fn typed_negative_zero_reads_as_zero() {
        let mut s = Session::default();
        assert!(s.commit_text(Param::Time, "-0"));
        assert_eq!(s.param(Param::Time).display(), "0.0");
        assert_eq!(s.readout().attack_display(), "0.00");
        assert!(s.readout().attack.is_sign_positive());

        s.set_attack(0.0);
        assert!(s.commit_text(Param::Time, "-0"));
        assert_eq!(s.readout().decay_display(), "0.00");
        assert!(s.readout().decay.is_sign_positive());
    }
}
