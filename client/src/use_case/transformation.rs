//! Transformations of a hero, deduplicated by name and ordered numerically.

use async_trait::async_trait;
use shared::Transformation;
use std::collections::HashSet;
use std::sync::Arc;

use super::ordering::compare_numeric;
use crate::core::error::Result;
use crate::repository::TransformationRepository;

/// Transformation list orchestration.
#[async_trait]
pub trait TransformationUseCase: Send + Sync {
    /// Transformations of hero `id`, deduplicated by name and numerically sorted.
    async fn get_transformations(&self, id: &str) -> Result<Vec<Transformation>>;
}

pub struct DefaultTransformationUseCase {
    repo: Arc<dyn TransformationRepository>,
}

impl DefaultTransformationUseCase {
    pub fn new(repo: Arc<dyn TransformationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TransformationUseCase for DefaultTransformationUseCase {
    async fn get_transformations(&self, id: &str) -> Result<Vec<Transformation>> {
        let transformations = self.repo.get_transformations(id).await?;
        Ok(process_transformations(transformations))
    }
}

/// Drop repeated names (first occurrence wins), then sort with
/// numeric-aware name comparison.
pub fn process_transformations(transformations: Vec<Transformation>) -> Vec<Transformation> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Transformation> = transformations
        .into_iter()
        .filter(|t| seen.insert(t.name.clone()))
        .collect();

    unique.sort_by(|a, b| compare_numeric(&a.name, &b.name));
    unique
}
