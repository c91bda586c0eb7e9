//! Bounded parameters: range-clamped numeric inputs with a step size.
//!
//! Each user-adjustable value (time, attack, decay, interval) is a
//! `BoundedParam`. Writes are clamped into range; typed text goes through
//! [`BoundedParam::parse`] first.

use crate::error::InputError;

#[derive(Debug, Clone, PartialEq)]
pub struct BoundedParam {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    precision: usize,
}

impl BoundedParam {
    /// Create a parameter. `value` is clamped into `[min, max]`.
    pub fn new(value: f64, min: f64, max: f64, step: f64, precision: usize) -> Self {
        let mut p = Self {
            value: min,
            min,
            max,
            step,
            precision,
        };
        p.set(value);
        p
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Set a new value, clamped to range. Returns the stored value.
    pub fn set(&mut self, value: f64) -> f64 {
        // `+ 0.0` turns a typed "-0" into +0.0; clamp keeps the sign.
        self.value = value.clamp(self.min, self.max) + 0.0;
        self.value
    }

    /// The clamped value `steps` increments away (negative moves down).
    /// Does not store it.
    pub fn nudged(&self, steps: f64) -> f64 {
        (self.value + steps * self.step).clamp(self.min, self.max)
    }

    /// Whether the value sits at the top of the range.
    pub fn at_max(&self) -> bool {
        self.value >= self.max
    }

    /// Position within the range as 0.0–1.0, for gauges.
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Value formatted at the parameter's display precision.
    pub fn display(&self) -> String {
        format!("{:.*}", self.precision, self.value)
    }

    /// Parse typed text into a number. Accepts an optional trailing `%`
    /// or `s` unit. The result is not clamped.
    pub fn parse(text: &str) -> Result<f64, InputError> {
        let trimmed = text.trim();
        let number = trimmed
            .strip_suffix('%')
            .or_else(|| trimmed.strip_suffix('s'))
            .unwrap_or(trimmed)
            .trim();
        if number.is_empty() {
            return Err(InputError::Empty);
        }
        let value: f64 = number
            .parse()
            .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(InputError::NotFinite);
        }
        Ok(value)
    }
}
