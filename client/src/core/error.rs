//! # Common Error Types
//!
//! The flat error taxonomy raised by the domain services and propagated
//! unchanged through repositories and use cases.
//!
//! ## Error Categories
//!
//! | Variant | Raised when |
//! |---|---|
//! | [`AppError::InvalidCredentials`] | HTTP 401 |
//! | [`AppError::AccessDenied`] | HTTP 403 on login |
//! | [`AppError::Server`] | HTTP 500-599 |
//! | [`AppError::Network`] | transport failure (connect, timeout, DNS, body read) |
//! | [`AppError::Unexpected`] | any other status, malformed body, request build failure |
//!
//! View models are the only place these are translated into user-facing text
//! (see [`crate::app::messages`]).
//!
//! ## Usage Pattern
//!
//! ```rust
//! use heroes_client::core::error::{AppError, Result};
//!
//! fn classify(status: u16) -> Result<()> {
//!     match status {
//!         200 => Ok(()),
//!         401 => Err(AppError::InvalidCredentials),
//!         500..=599 => Err(AppError::Server(status)),
//!         _ => Err(AppError::Unexpected),
//!     }
//! }
//!
//! assert_eq!(classify(503), Err(AppError::Server(503)));
//! ```

use thiserror::Error;

/// Error taxonomy shared by every layer of the client core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError {
    /// The server rejected the credentials or the session token (401).
    #[error("Invalid username or password. Check your credentials.")]
    InvalidCredentials,

    /// The account is not allowed to log in (403).
    #[error("You do not have permission to access this resource.")]
    AccessDenied,

    /// The server failed with a 5xx status.
    #[error("The server ran into a problem (code: {0}). Try again later.")]
    Server(u16),

    /// The request never got a response.
    #[error("Could not reach the server. Check your connection.")]
    Network,

    /// Anything else: unexpected status, undecodable body, bad request.
    #[error("An unexpected error occurred.")]
    Unexpected,
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<crate::store::StoreError> for AppError {
    fn from(err: crate::store::StoreError) -> Self {
        tracing::error!(error = %err, "Session store failure");
        AppError::Unexpected
    }
}

impl From<crate::services::api::RequestError> for AppError {
    fn from(err: crate::services::api::RequestError) -> Self {
        tracing::error!(error = %err, "Failed to build request");
        AppError::Unexpected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display_includes_code() {
        assert_eq!(
            AppError::Server(502).to_string(),
            "The server ran into a problem (code: 502). Try again later."
        );
    }

    #[test]
    fn test_store_error_maps_to_unexpected() {
        let err = crate::store::StoreError::Io(std::io::Error::other("disk full"));
        assert_eq!(AppError::from(err), AppError::Unexpected);
    }
}
