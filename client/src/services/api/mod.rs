//! # Heroes API Client Module
//!
//! HTTP client for the heroes API: request building, login, hero list and
//! transformation list.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs              - Module exports
//! ├── client.rs           - ApiClient, Endpoint table, request builder, status classification
//! ├── auth.rs             - POST /api/auth/login
//! ├── heroes.rs           - POST /api/heros/all
//! └── transformations.rs  - POST /api/heros/tranformations
//! ```
//!
//! ## Status Classification
//!
//! | Status | Result |
//! |---|---|
//! | 200 | decoded body (raw token for login) |
//! | 401 | `AppError::InvalidCredentials` |
//! | 403 | `AppError::AccessDenied` on login, `AppError::Unexpected` elsewhere |
//! | 500-599 | `AppError::Server(code)` |
//! | other | `AppError::Unexpected` |
//! | no response | `AppError::Network` |

pub mod auth;
pub mod client;
pub mod heroes;
pub mod transformations;

pub use client::{ApiClient, Endpoint, RequestError};

#[cfg(test)]
mod tests;
