//! # Session Storage
//!
//! Persistence for the session token.
//!
//! ```text
//! store/
//! ├── mod.rs      - StoreError and re-exports
//! ├── secret.rs   - SecretStore trait, memory and file backends
//! └── session.rs  - SessionStore (the single token, key "kcAuthToken")
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use heroes_client::store::SessionStore;
//!
//! let session = SessionStore::in_memory();
//! session.save("eyJraWQiOi...").unwrap();
//! assert!(session.has_token());
//! session.delete().unwrap();
//! assert_eq!(session.load(), None);
//! ```

pub mod secret;
pub mod session;

pub use secret::{FileSecretStore, MemorySecretStore, SecretStore};
pub use session::{SessionStore, TOKEN_KEY};

use thiserror::Error;

/// Failure of a secret store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("secret store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("secret store is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}
