//! Logging configuration from environment variables

use std::path::PathBuf;

/// Filter used when neither `RUST_LOG` nor an explicit level is set.
pub const DEFAULT_LOG_LEVEL: &str = "heroes_client=info,warn";

/// File name prefix of the daily-rotated log.
pub const LOG_FILE_PREFIX: &str = "heroes-client.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding the rotated log files
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "heroes_client=debug,info")
    pub log_level: String,
    /// Also write human-readable output to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_dir: std::env::var("HEROES_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            stderr: std::env::var("HEROES_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Path of today's log file is `<log_dir>/<prefix>.<date>`.
    pub fn log_file_prefix(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_PREFIX)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
