//! Configuration management module
//!
//! Handles loading, saving, and validation of user preferences. Durations
//! are stored as human-readable strings such as `5m` or `33ms`.

use crate::format::TimeFormat;
use crate::{Result, StopwatchError, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MAX_COUNTDOWN: Duration = Duration::from_secs(24 * 3600);
const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);
const MAX_FRAME_INTERVAL: Duration = Duration::from_secs(1);

/// Application configuration loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Length of every countdown opened from the menu
    #[serde(with = "duration_str")]
    pub countdown_duration: Duration,
    /// Redraw cadence of the frame loop
    #[serde(with = "duration_str")]
    pub frame_interval: Duration,
    /// Clock layout on the timer screen
    pub time_format: TimeFormat,
    /// `env_logger` filter overriding `RUST_LOG`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            countdown_duration: Duration::from_secs(5 * 60),
            frame_interval: Duration::from_millis(33),
            time_format: TimeFormat::Full,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Countdown length in whole milliseconds
    pub fn countdown_ms(&self) -> u64 {
        self.countdown_duration.as_millis() as u64
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.countdown_duration.is_zero() {
            return Err(StopwatchError::ConfigError(
                "Countdown duration must be greater than 0".to_string(),
            ));
        }

        if self.countdown_duration > MAX_COUNTDOWN {
            return Err(StopwatchError::ConfigError(format!(
                "Countdown duration too long: {} (max: {})",
                humantime::format_duration(self.countdown_duration),
                humantime::format_duration(MAX_COUNTDOWN)
            )));
        }

        if self.frame_interval < MIN_FRAME_INTERVAL || self.frame_interval > MAX_FRAME_INTERVAL {
            return Err(StopwatchError::ConfigError(format!(
                "Frame interval must be between {} and {}",
                humantime::format_duration(MIN_FRAME_INTERVAL),
                humantime::format_duration(MAX_FRAME_INTERVAL)
            )));
        }

        Ok(())
    }

    /// Set the countdown duration
    pub fn with_countdown_duration(mut self, duration: Duration) -> Self {
        self.countdown_duration = duration;
        self
    }

    /// Set the redraw cadence
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Set the clock layout
    pub fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Set the log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            StopwatchError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            StopwatchError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        log::debug!("loaded config from {}", path.display());

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StopwatchError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            StopwatchError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/stopwatch/stopwatch.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            StopwatchError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Serialize durations as humantime strings ("5m", "33ms")
mod duration_str {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.countdown_ms(), 300_000);
        assert_eq!(config.frame_interval, Duration::from_millis(33));
    }

    #[test]
    fn test_toml_uses_human_durations() {
        let config = AppConfig::new()
            .with_countdown_duration(Duration::from_secs(90))
            .with_time_format(TimeFormat::Compact);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        assert!(toml_str.contains("countdown_duration = \"1m 30s\""));
        assert!(toml_str.contains("time_format = \"compact\""));

        let deserialized: AppConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str("countdown_duration = \"10s\"").unwrap();
        assert_eq!(config.countdown_duration, Duration::from_secs(10));
        assert_eq!(config.time_format, TimeFormat::Full);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(AppConfig::new()
            .with_countdown_duration(Duration::ZERO)
            .validate()
            .is_err());
        assert!(AppConfig::new()
            .with_countdown_duration(Duration::from_secs(25 * 3600))
            .validate()
            .is_err());
        assert!(AppConfig::new()
            .with_frame_interval(Duration::from_secs(2))
            .validate()
            .is_err());
        assert!(AppConfig::new()
            .with_frame_interval(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_bad_duration_string_is_rejected() {
        let parsed: std::result::Result<AppConfig, _> =
            toml::from_str("frame_interval = \"soon\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("stopwatch.toml"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let missing = AppConfig::load_from(&path).unwrap();
        assert_eq!(missing, AppConfig::default());

        let config = AppConfig::new()
            .with_countdown_duration(Duration::from_millis(1500))
            .with_log_filter("stopwatch=debug");
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "countdown_duration = \"0s\"").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(StopwatchError::ConfigError(_))
        ));
    }
}
