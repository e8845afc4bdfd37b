//! # Client Configuration
//!
//! Configuration loaded from environment variables (and a `.env` file when
//! present). Validated before use so a misconfigured client fails fast.
//!
//! | Variable | Default |
//! |---|---|
//! | `HEROES_API_URL` | `https://dragonball.keepcoding.education` |
//! | `HEROES_HTTP_TIMEOUT_SECS` | `10` |
//! | `HEROES_TOKEN_FILE` | `<config dir>/heroes-client/session.json` |
//! | `HEROES_NAVIGATION_DELAY_MS` | `1000` |
//! | `HEROES_LOCALE` | `en` |
//!
//! ```rust,no_run
//! use heroes_client::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//! # Ok::<(), heroes_client::config::ConfigError>(())
//! ```

use lib_utils::envs::{self, get_env_or, get_env_parse_or};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::app::messages::Locale;

/// Base URL of the production API.
pub const DEFAULT_API_URL: &str = "https://dragonball.keepcoding.education";

/// Delay before the login screen hands over to the heroes screen.
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_secs(1);

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment: {0}")]
    Env(#[from] envs::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Runtime configuration of the client core.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,

    /// Whole-request timeout applied by the HTTP client
    pub request_timeout: Duration,

    /// File backing the session token
    pub token_file: PathBuf,

    /// Delay before a scheduled navigation to the heroes screen
    pub navigation_delay: Duration,

    /// Language of user-facing messages
    pub locale: Locale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_file: default_token_file(),
            navigation_delay: DEFAULT_NAVIGATION_DELAY,
            locale: Locale::En,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case
        let _ = dotenvy::dotenv();

        let base_url = get_env_or("HEROES_API_URL", DEFAULT_API_URL);
        let timeout_secs = get_env_parse_or("HEROES_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let token_file = envs::get_env("HEROES_TOKEN_FILE")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(default_token_file);
        let delay_ms = get_env_parse_or(
            "HEROES_NAVIGATION_DELAY_MS",
            DEFAULT_NAVIGATION_DELAY.as_millis() as u64,
        )?;
        let locale = get_env_or("HEROES_LOCALE", "en")
            .parse()
            .map_err(ConfigError::Invalid)?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            token_file,
            navigation_delay: Duration::from_millis(delay_ms),
            locale,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("HEROES_API_URL is not a valid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(
                "HEROES_API_URL must use http or https".to_string(),
            ));
        }

        let secs = self.request_timeout.as_secs();
        if !(1..=300).contains(&secs) {
            return Err(ConfigError::Invalid(
                "HEROES_HTTP_TIMEOUT_SECS must be between 1 and 300".to_string(),
            ));
        }

        Ok(())
    }
}

/// Session file under the platform config directory.
///
/// - Linux: `~/.config/heroes-client/session.json`
/// - macOS: `~/Library/Application Support/heroes-client/session.json`
/// - Windows: `%APPDATA%\heroes-client\session.json`
///
/// Falls back to `~/.config`, then to the system temp directory, so the path
/// is always absolute and independent of the working directory.
pub fn default_token_file() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(std::env::temp_dir)
        .join("heroes-client")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.navigation_delay, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = ClientConfig {
            base_url: "ftp://dragonball.keepcoding.education".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_token_file_is_absolute() {
        let path = default_token_file();

        assert!(path.is_absolute(), "{}", path.display());
        assert!(path.ends_with("heroes-client/session.json"));
    }

    #[test]
    fn test_from_env_reads_token_file_override() {
        std::env::set_var("HEROES_TOKEN_FILE", "/tmp/heroes-test/session.json");
        let config = ClientConfig::from_env();
        std::env::remove_var("HEROES_TOKEN_FILE");

        assert_eq!(
            config.unwrap().token_file,
            PathBuf::from("/tmp/heroes-test/session.json")
        );
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout: Duration::ZERO,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
