//! File-based logging initialization

use std::fs;
use std::io;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::{LogConfig, DEFAULT_LOG_LEVEL, LOG_FILE_PREFIX};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to create log directory: {0}")]
    CreateDir(#[from] io::Error),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize the logging system
///
/// Sets up:
/// - Daily rotated log file under `config.log_dir`
/// - Optional stderr output (`config.stderr`)
/// - Non-blocking file writes
/// - Panic hook that records panics in the log
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, LoggerError> {
    fs::create_dir_all(&config.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stderr_layer = config
        .stderr
        .then(|| fmt::layer().with_writer(io::stderr).with_target(false).boxed());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        stderr = config.stderr,
        "Logging initialized"
    );

    setup_panic_hook();

    Ok(guard)
}

/// Log panics before handing over to the previous hook.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_dir_and_rejects_second_subscriber() {
        let dir = TempDir::new().unwrap();
        let config = LogConfig {
            log_dir: dir.path().join("nested").join("logs"),
            ..LogConfig::default()
        };

        // The global subscriber may already be set by another test in this binary
        let first = init(&config);
        assert!(config.log_dir.is_dir());

        let second = init(&config);
        assert!(matches!(second, Err(LoggerError::AlreadyInitialized(_))));
        drop(first);
    }
}
