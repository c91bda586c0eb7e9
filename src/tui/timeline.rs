//! Envelope timeline: projects the 0–100 timeline onto a row of cells.

use crate::clock::TIME_MAX;
use crate::envelope::{Envelope, Segment};

/// What a single timeline column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineCell {
    Attack,
    Decay,
    Outside,
    Playhead,
}

impl TimelineCell {
    pub fn symbol(self) -> char {
        match self {
            Self::Attack => '▲',
            Self::Decay => '▼',
            Self::Outside => '·',
            Self::Playhead => '│',
        }
    }
}

/// Time position at the center of column `col` out of `width`.
fn column_time(col: usize, width: usize) -> f64 {
    if width <= 1 {
        return 0.0;
    }
    col as f64 * TIME_MAX / (width - 1) as f64
}

/// Column holding the playhead for `time`.
pub fn playhead_column(time: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let ratio = (time / TIME_MAX).clamp(0.0, 1.0);
    (ratio * (width - 1) as f64).round() as usize
}

/// Project the envelope and playhead onto `width` columns.
pub fn project(envelope: &Envelope, time: f64, width: usize) -> Vec<TimelineCell> {
    let playhead = playhead_column(time, width);
    (0..width)
        .map(|col| {
            if col == playhead {
                return TimelineCell::Playhead;
            }
            match envelope.evaluate(column_time(col, width)).segment {
                Segment::Attack => TimelineCell::Attack,
                Segment::Decay => TimelineCell::Decay,
                Segment::Outside => TimelineCell::Outside,
            }
        })
        .collect()
}
