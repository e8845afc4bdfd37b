//! # Services Module
//!
//! Remote service integrations. The only remote system is the heroes API,
//! reached through [`api::ApiClient`], which implements the
//! [`LoginService`](crate::core::service::LoginService),
//! [`HeroService`](crate::core::service::HeroService) and
//! [`TransformationService`](crate::core::service::TransformationService) traits.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Repositories                │
//! └──────────────┬───────────────┘
//!                │ Arc<dyn *Service>
//! ┌──────────────▼───────────────┐        ┌──────────────────────────────┐
//! │  ApiClient (api/client.rs)   │  HTTP  │  dragonball.keepcoding...    │
//! │  + SessionStore (bearer)     ├───────►│  /api/auth/login             │
//! └──────────────────────────────┘  JSON  │  /api/heros/all              │
//!                                         │  /api/heros/tranformations   │
//!                                         └──────────────────────────────┘
//! ```
//!
//! `ApiClient` wraps `reqwest::Client` (internally pooled and thread-safe) and
//! can be shared across tasks behind an `Arc`.

pub mod api;
