//! # Session Store
//!
//! The single persisted session token, stored under one key of a
//! [`SecretStore`](super::SecretStore) backend.

use parking_lot::Mutex;
use std::sync::Arc;

use super::secret::{MemorySecretStore, SecretStore};
use super::StoreError;

/// Key the session token is stored under.
pub const TOKEN_KEY: &str = "kcAuthToken";

/// Holds the single session token of this installation.
///
/// Constructed once by the composition root and shared as `Arc<SessionStore>`
/// with everything that reads or writes the token. Calls are serialized
/// because secret backends are not required to be thread-safe across
/// read-modify-write sequences.
pub struct SessionStore {
    backend: Arc<dyn SecretStore>,
    lock: Mutex<()>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SecretStore>) -> Self {
        Self {
            backend,
            lock: Mutex::new(()),
        }
    }

    /// Store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySecretStore::new()))
    }

    /// Persist `token`, replacing any previous one.
    pub fn save(&self, token: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        self.backend.set(TOKEN_KEY, token)?;
        tracing::debug!(token_len = token.len(), "Session token saved");
        Ok(())
    }

    /// The stored token, if any. Backend failures read as "no token".
    pub fn load(&self) -> Option<String> {
        let _guard = self.lock.lock();
        match self.backend.get(TOKEN_KEY) {
            Ok(token) => {
                tracing::debug!(found = token.is_some(), "Session token loaded");
                token
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session token, treating as absent");
                None
            }
        }
    }

    /// Remove the stored token. Removing a missing token is not an error.
    pub fn delete(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        self.backend.delete(TOKEN_KEY)?;
        tracing::debug!("Session token deleted");
        Ok(())
    }

    /// True when a non-empty token is stored.
    pub fn has_token(&self) -> bool {
        self.load().is_some_and(|token| !token.is_empty())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
