//! # Repositories
//!
//! Pass-through layer between the use cases and the remote services.
//!
//! Each repository forwards to an `Arc<dyn *Service>` without adding logic or
//! failure modes; errors propagate unchanged. The seam exists so that use
//! cases depend on a trait and can be exercised against deterministic fakes.
//!
//! ```text
//! use_case ──► LoginRepository          ──► LoginService          (ApiClient / fake)
//!          ──► HeroRepository           ──► HeroService
//!          ──► TransformationRepository ──► TransformationService
//! ```

pub mod hero;
pub mod login;
pub mod transformation;

pub use hero::{DefaultHeroRepository, HeroRepository};
pub use login::{DefaultLoginRepository, LoginRepository};
pub use transformation::{DefaultTransformationRepository, TransformationRepository};
