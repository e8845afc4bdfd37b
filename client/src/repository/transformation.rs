//! Transformation repository.

use async_trait::async_trait;
use shared::Transformation;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::service::TransformationService;

/// Source of a hero's transformations.
#[async_trait]
pub trait TransformationRepository: Send + Sync {
    async fn get_transformations(&self, id: &str) -> Result<Vec<Transformation>>;
}

/// Repository backed by a [`TransformationService`].
pub struct DefaultTransformationRepository {
    service: Arc<dyn TransformationService>,
}

impl DefaultTransformationRepository {
    pub fn new(service: Arc<dyn TransformationService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TransformationRepository for DefaultTransformationRepository {
    async fn get_transformations(&self, id: &str) -> Result<Vec<Transformation>> {
        self.service.get_transformations(id).await
    }
}
