//! # Logging Infrastructure
//!
//! Structured logging for the client core via `tracing`.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/heroes-client.log.<date>` with daily rotation
//! - **Optional stderr output** for interactive runs
//! - **Panic logging**: panics are recorded before the default hook runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use heroes_client::debug::{init_logger, LogConfig};
//!
//! // Keep the guard alive until shutdown so buffered lines are flushed
//! let _guard = init_logger(&LogConfig::from_env()).expect("logging");
//! tracing::info!(endpoint = "/api/heros/all", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `heroes_client=info,warn`)
//! - `HEROES_LOG_DIR`: Log directory (default: `logs`)
//! - `HEROES_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

#[cfg(test)]
pub(crate) mod capture;

pub use config::LogConfig;
pub use logger::{init as init_logger, LoggerError};
