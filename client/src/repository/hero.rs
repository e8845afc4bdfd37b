//! Hero repository over [`HeroService`](crate::core::service::HeroService).

use async_trait::async_trait;
use shared::Hero;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::service::HeroService;

/// Source of hero lists.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    async fn get_heroes(&self, filter: &str) -> Result<Vec<Hero>>;
}

/// Repository backed by a [`HeroService`].
pub struct DefaultHeroRepository {
    service: Arc<dyn HeroService>,
}

impl DefaultHeroRepository {
    pub fn new(service: Arc<dyn HeroService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl HeroRepository for DefaultHeroRepository {
    async fn get_heroes(&self, filter: &str) -> Result<Vec<Hero>> {
        self.service.get_heroes(filter).await
    }
}
