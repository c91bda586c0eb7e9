//! Envelope evaluator: maps a time position onto a two-segment
//! attack/decay envelope and reports the normalized progress through
//! whichever segment is active.
//!
//! All three inputs share the same 0–100 scale. The attack segment runs
//! from 0 to the attack bound, the decay segment from the attack bound to
//! the decay bound. Both ramps are linear.

/// Which segment of the envelope a time position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Attack,
    Decay,
    Outside,
}

impl Segment {
    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Decay => "decay",
            Self::Outside => "outside",
        }
    }
}

/// Two-segment envelope shape. Bounds are positions on the 0–100 timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub attack: f64,
    pub decay: f64,
}

impl Envelope {
    pub fn new(attack: f64, decay: f64) -> Self {
        Self { attack, decay }
    }

    /// Whether the attack branch can ever be taken.
    pub fn has_attack(&self) -> bool {
        self.attack > 0.0
    }

    /// Whether the decay branch can ever be taken.
    pub fn has_decay(&self) -> bool {
        self.decay > self.attack
    }

    /// Evaluate the envelope at time `t`.
    ///
    /// The attack branch wins when `t == attack`, so the boundary reads as
    /// a completed attack (1.00) rather than a fresh decay (0.00). Each
    /// branch checks its divisor before dividing.
    pub fn evaluate(&self, t: f64) -> Normalized {
        let (a, d) = (self.attack, self.decay);
        if self.has_attack() && t <= a {
            Normalized {
                attack: t / a,
                decay: 0.0,
                segment: Segment::Attack,
            }
        } else if self.has_decay() && t >= a && t <= d {
            Normalized {
                attack: 0.0,
                decay: (t - a) / (d - a),
                segment: Segment::Decay,
            }
        } else {
            Normalized::OUTSIDE
        }
    }
}

/// Normalized progress through the active segment.
///
/// At most one of `attack` and `decay` is non-zero. Values carry full
/// precision; rounding happens only in the display helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub attack: f64,
    pub decay: f64,
    pub segment: Segment,
}

impl Normalized {
    /// The all-zero result for positions outside both segments.
    pub const OUTSIDE: Self = Self {
        attack: 0.0,
        decay: 0.0,
        segment: Segment::Outside,
    };

    /// Normalized attack formatted to two decimals.
    pub fn attack_display(&self) -> String {
        format!("{:.2}", self.attack)
    }

    /// Normalized decay formatted to two decimals.
    pub fn decay_display(&self) -> String {
        format!("{:.2}", self.decay)
    }
}

impl Default for Normalized {
    fn default() -> Self {
        Self::OUTSIDE
    }
}

/// Evaluate time `t` against attack bound `a` and decay bound `d`.
pub fn evaluate(t: f64, a: f64, d: f64) -> Normalized {
    Envelope::new(a, d).evaluate(t)
}
