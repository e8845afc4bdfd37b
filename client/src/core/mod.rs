//! # Core Abstractions
//!
//! Error taxonomy and service traits used throughout the client.
//!
//! - **[`error`]**: [`AppError`] and the `Result<T>` alias
//! - **[`service`]**: per-resource service traits for dependency injection
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use heroes_client::core::service::HeroService;
//! use heroes_client::fakes::{HeroServiceFake, HeroServiceScenario};
//!
//! // In production: Arc::new(ApiClient::new(config, session))
//! // In tests: a deterministic fake
//! let heroes: Arc<dyn HeroService> = Arc::new(HeroServiceFake::new(HeroServiceScenario::Success));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{HeroService, LoginService, TransformationService};
