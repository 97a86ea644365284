//! Logging setup
//!
//! Uses the `log` facade with an `env_logger` backend. The terminal UI owns
//! stdout, so the application logs to a file in the user's data directory.

use crate::{Result, StopwatchError, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Once;

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    /// Append to this file, creating it and its parent directories
    File(PathBuf),
}

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "stopwatch=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            output: LogOutput::Stderr,
        }
    }
}

impl LoggingConfig {
    /// Log to `path` instead of stderr
    pub fn to_file(path: PathBuf) -> Self {
        Self {
            env_filter: None,
            output: LogOutput::File(path),
        }
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.env_filter = filter;
        self
    }
}

/// Default log file: $DATA_LOCAL_HOME/stopwatch/stopwatch.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| {
        StopwatchError::LoggingError("Unable to determine data directory".to_string())
    })?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. The log file is opened before the logger
/// is installed so that a bad path is reported instead of silently dropping
/// output.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let target = match &config.output {
        LogOutput::Stderr => env_logger::Target::Stderr,
        LogOutput::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    StopwatchError::LoggingError(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    StopwatchError::LoggingError(format!(
                        "Failed to open log file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            env_logger::Target::Pipe(Box::new(file))
        }
    };

    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.target(target);

        // Another logger may already be installed, e.g. by a test harness
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });

    Ok(())
}
