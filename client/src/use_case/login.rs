//! Login orchestration. A successful login persists the session token.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::repository::LoginRepository;
use crate::store::SessionStore;

/// Login orchestration: authenticate, persist the token, check for a session.
#[async_trait]
pub trait LoginUseCase: Send + Sync {
    /// Log in and persist the returned token. Repository errors propagate unchanged.
    async fn login_app(&self, user: &str, password: &str) -> Result<bool>;

    /// True when a non-empty token is stored. Never contacts the server.
    fn check_token(&self) -> bool;

    /// Forget the stored token. Purely local.
    fn logout(&self);
}

pub struct DefaultLoginUseCase {
    repo: Arc<dyn LoginRepository>,
    session: Arc<SessionStore>,
}

impl DefaultLoginUseCase {
    pub fn new(repo: Arc<dyn LoginRepository>, session: Arc<SessionStore>) -> Self {
        Self { repo, session }
    }
}

#[async_trait]
impl LoginUseCase for DefaultLoginUseCase {
    async fn login_app(&self, user: &str, password: &str) -> Result<bool> {
        let token = self.repo.login(user, password).await?;
        self.session.save(&token)?;
        Ok(true)
    }

    fn check_token(&self) -> bool {
        self.session.has_token()
    }

    fn logout(&self) {
        if let Err(e) = self.session.delete() {
            tracing::warn!(error = %e, "Failed to delete session token on logout");
        }
    }
}
