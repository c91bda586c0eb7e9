//! Configuration: initial values and preferences loaded from
//! ~/.envnorm/config.yaml.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::ConfigError;

/// Application configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial time position (0–100).
    pub time: f64,
    /// Initial attack bound (0–100).
    pub attack: f64,
    /// Initial decay bound (0–100).
    pub decay: f64,
    /// Initial tick interval in seconds (0.1–10).
    pub interval_secs: f64,
    /// Builtin theme name. None = theme.yaml or the default builtin.
    pub theme: Option<String>,
    /// Most verbose level shown in the activity panel.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            time: 0.0,
            attack: 20.0,
            decay: 100.0,
            interval_secs: 1.0,
            theme: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot be clamped into range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("time", self.time),
            ("attack", self.attack),
            ("decay", self.decay),
            ("interval_secs", self.interval_secs),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        if self.level().is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown log_level {:?}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// The configured log level.
    pub fn level(&self) -> Option<Level> {
        match self.log_level.trim().to_lowercase().as_str() {
            "error" => Some(Level::ERROR),
            "warn" => Some(Level::WARN),
            "info" => Some(Level::INFO),
            "debug" => Some(Level::DEBUG),
            "trace" => Some(Level::TRACE),
            _ => None,
        }
    }
}

/// Directory holding config and theme files.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".envnorm");
    path
}

/// Default config file path.
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_values() {
        let config = AppConfig::default();
        assert_eq!(config.time, 0.0);
        assert_eq!(config.attack, 20.0);
        assert_eq!(config.decay, 100.0);
        assert_eq!(config.interval_secs, 1.0);
        assert!(config.theme.is_none());
        assert_eq!(config.level(), Some(Level::INFO));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = AppConfig::from_yaml("attack: 35\ninterval_secs: 0.25\n").unwrap();
        assert_eq!(config.attack, 35.0);
        assert_eq!(config.interval_secs, 0.25);
        assert_eq!(config.decay, 100.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn full_yaml() {
        let yaml = r#"
time: 12.5
attack: 10
decay: 60
interval_secs: 2
theme: Mono
log_level: debug
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.time, 12.5);
        assert_eq!(config.theme.as_deref(), Some("Mono"));
        assert_eq!(config.level(), Some(Level::DEBUG));
    }

    #[test]
    fn non_finite_rejected() {
        let err = AppConfig::from_yaml("decay: .nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = AppConfig::from_yaml("time: .inf\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_log_level_rejected() {
        let err = AppConfig::from_yaml("log_level: loud\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = AppConfig::from_yaml("attack: [1, 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = AppConfig::from_yaml("attack: loud\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn default_path_under_config_dir() {
        let path = default_config_path();
        assert!(path.ends_with(".envnorm/config.yaml"));
    }
}
