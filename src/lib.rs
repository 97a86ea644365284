//! Stopwatch - terminal stopwatch and countdown timer
//!
//! A small TUI application with two timing modes navigated from a menu.
//! The timing core (tick source, time modes, navigator, formatter) is
//! independent of the terminal front end and can be driven by a fake clock.

use std::fmt;

// Public re-exports
pub mod app;
pub mod clock;
pub mod config;
pub mod format;
pub mod logging;
pub mod timer;

// Common error types
#[derive(Debug)]
pub enum StopwatchError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Logger could not be set up
    LoggingError(String),
    /// Display string could not be parsed back into components
    FormatError(String),
}

impl fmt::Display for StopwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopwatchError::IoError(err) => write!(f, "I/O error: {}", err),
            StopwatchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            StopwatchError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            StopwatchError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
            StopwatchError::FormatError(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for StopwatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StopwatchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StopwatchError {
    fn from(err: std::io::Error) -> Self {
        StopwatchError::IoError(err)
    }
}

impl From<toml::de::Error> for StopwatchError {
    fn from(err: toml::de::Error) -> Self {
        StopwatchError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for StopwatchError {
    fn from(err: toml::ser::Error) -> Self {
        StopwatchError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for stopwatch operations
pub type Result<T> = std::result::Result<T, StopwatchError>;

/// Error handling utilities
pub mod error {
    use super::StopwatchError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &StopwatchError) -> String {
        match error {
            StopwatchError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            StopwatchError::TuiError(_) => {
                "Terminal could not be driven. Make sure stdout is an interactive terminal."
                    .to_string()
            }
            StopwatchError::LoggingError(_) => {
                "Failed to open the log file. Check permissions on the data directory."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "stopwatch";
pub const CONFIG_FILE: &str = "stopwatch.toml";
pub const LOG_FILE: &str = "stopwatch.log";
