//! # Use Cases
//!
//! Orchestration between the view models and the repositories:
//!
//! - [`LoginUseCase`]: authenticate, persist the token, check for an existing session
//! - [`HeroUseCase`]: fetch heroes and sort them by name (case-insensitive)
//! - [`TransformationUseCase`]: fetch transformations, dedupe by name, sort numerically
//!
//! Errors from the repositories propagate unchanged; translation into
//! user-facing text happens in [`crate::app`].

pub mod hero;
pub mod login;
pub mod ordering;
pub mod transformation;

pub use hero::{DefaultHeroUseCase, HeroUseCase};
pub use login::{DefaultLoginUseCase, LoginUseCase};
pub use transformation::{DefaultTransformationUseCase, TransformationUseCase};
