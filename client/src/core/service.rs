//! # Service Traits
//!
//! One trait per remote resource, so repositories depend on an interface
//! rather than on [`ApiClient`](crate::services::api::ApiClient).
//! Deterministic stand-ins live in [`crate::fakes`].

use async_trait::async_trait;
use shared::{Hero, Transformation};

use super::error::Result;

/// Authenticates against `POST /api/auth/login`.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Exchange credentials for a session token.
    async fn login(&self, user: &str, password: &str) -> Result<String>;
}

/// Fetches heroes from `POST /api/heros/all`.
#[async_trait]
pub trait HeroService: Send + Sync {
    /// Heroes matching `filter` (server-side; empty means all).
    async fn get_heroes(&self, filter: &str) -> Result<Vec<Hero>>;
}

/// Fetches transformations from `POST /api/heros/tranformations`.
#[async_trait]
pub trait TransformationService: Send + Sync {
    /// Transformations of the hero with the given id.
    async fn get_transformations(&self, id: &str) -> Result<Vec<Transformation>>;
}
