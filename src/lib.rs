//! envnorm: a terminal envelope segment normalizer with a playback clock.

pub mod clock;
pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod param;
pub mod session;
pub mod tui;
