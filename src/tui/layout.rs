//! Layout: focusable fields and focus cycling.

use crate::session::Param;

/// Which control currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Time,
    Attack,
    Decay,
    Interval,
    Transport,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Field::Time,
        Field::Attack,
        Field::Decay,
        Field::Interval,
        Field::Transport,
    ];

    /// Cycle to the next field.
    pub fn next(self) -> Self {
        match self {
            Self::Time => Self::Attack,
            Self::Attack => Self::Decay,
            Self::Decay => Self::Interval,
            Self::Interval => Self::Transport,
            Self::Transport => Self::Time,
        }
    }

    /// Cycle to the previous field.
    pub fn prev(self) -> Self {
        match self {
            Self::Time => Self::Transport,
            Self::Attack => Self::Time,
            Self::Decay => Self::Attack,
            Self::Interval => Self::Decay,
            Self::Transport => Self::Interval,
        }
    }

    /// The session parameter behind this field, if it is numeric.
    pub fn param(self) -> Option<Param> {
        match self {
            Self::Time => Some(Param::Time),
            Self::Attack => Some(Param::Attack),
            Self::Decay => Some(Param::Decay),
            Self::Interval => Some(Param::Interval),
            Self::Transport => None,
        }
    }
}
