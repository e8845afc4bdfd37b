//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get and parse an environment variable, using `default` when unset.
///
/// A set-but-unparseable value is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so they can run in parallel.

    #[test]
    fn test_get_env_parse_or_uses_default_when_unset() {
        env::remove_var("LIB_UTILS_TEST_UNSET");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_UNSET", 42u64), Ok(42));
    }

    #[test]
    fn test_get_env_parse_or_rejects_bad_value() {
        env::set_var("LIB_UTILS_TEST_BAD", "forty-two");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_BAD", 42u64),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD"))
        );
    }

    #[test]
    fn test_get_env_or_reads_value() {
        env::set_var("LIB_UTILS_TEST_SET", "value");
        assert_eq!(get_env_or("LIB_UTILS_TEST_SET", "default"), "value");
    }
}
