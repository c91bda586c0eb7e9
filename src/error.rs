//! Error types for value entry and configuration loading.

use std::fmt;
use std::io;

/// A typed value that could not be turned into a number.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Empty,
    NotANumber(String),
    NotFinite,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::NotANumber(text) => write!(f, "not a number: {text:?}"),
            Self::NotFinite => write!(f, "value must be finite"),
        }
    }
}

impl std::error::Error for InputError {}

/// Failure to load the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config read failed: {e}"),
            Self::Parse(e) => write!(f, "config parse failed: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_display() {
        assert_eq!(InputError::Empty.to_string(), "empty input");
        assert_eq!(
            InputError::NotANumber("abc".into()).to_string(),
            "not a number: \"abc\""
        );
        assert_eq!(InputError::NotFinite.to_string(), "value must be finite");
    }

    #[test]
    fn config_error_wraps_io() {
        let err: ConfigError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(err.to_string().starts_with("config read failed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_error_invalid_has_no_source() {
        let err = ConfigError::Invalid("decay is NaN".into());
        assert_eq!(err.to_string(), "invalid config: decay is NaN");
        assert!(std::error::Error::source(&err).is_none());
    }
}
