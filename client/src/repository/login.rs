//! Login repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::service::LoginService;

/// Source of session tokens.
#[async_trait]
pub trait LoginRepository: Send + Sync {
    async fn login(&self, user: &str, password: &str) -> Result<String>;
}

/// Repository backed by a [`LoginService`].
pub struct DefaultLoginRepository {
    service: Arc<dyn LoginService>,
}

impl DefaultLoginRepository {
    pub fn new(service: Arc<dyn LoginService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LoginRepository for DefaultLoginRepository {
    async fn login(&self, user: &str, password: &str) -> Result<String> {
        self.service.login(user, password).await
    }
}
