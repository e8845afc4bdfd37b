//! # Utilities Library
//!
//! Small helpers shared by the workspace: base64 credential encoding and
//! environment variable parsing.

pub mod b64;
pub mod envs;

// Re-export commonly used functions
pub use b64::{b64_decode_to_string, b64_encode, basic_auth_value};
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
