//! # Base64 Encoding/Decoding
//!
//! Standard (padded) base64, as used by HTTP Basic authentication.

use base64::{engine::general_purpose, Engine as _};

/// Encode bytes to a standard base64 string (with padding).
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Decode a standard base64 string to UTF-8.
pub fn b64_decode_to_string(b64: &str) -> Result<String, Error> {
    general_purpose::STANDARD
        .decode(b64)
        .map_err(|_| Error::FailToB64Decode)
        .and_then(|bytes| String::from_utf8(bytes).map_err(|_| Error::FailToB64Decode))
}

/// Build the value of an `Authorization` header for HTTP Basic auth.
///
/// ```rust
/// use lib_utils::b64::basic_auth_value;
///
/// assert_eq!(basic_auth_value("goku", "kame"), "Basic Z29rdTprYW1l");
/// ```
pub fn basic_auth_value(user: &str, password: &str) -> String {
    format!("Basic {}", b64_encode(format!("{user}:{password}")))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToB64Decode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
