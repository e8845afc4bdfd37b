//! # Heroes Client - Library Root
//!
//! Client core of the KC heroes app: session handling, data fetching and the
//! screen state machines a UI layer binds to. No UI code lives here.
//!
//! ## Features
//!
//! - **Session Store**: one persisted token, file or in-memory backed
//! - **HTTP Client**: Basic-auth login, bearer-authenticated hero and transformation queries
//! - **Use Cases**: case-insensitive hero ordering, transformation dedupe and numeric ordering
//! - **View Models**: login, hero list and hero detail state machines
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  app          LoginViewModel / HeroesViewModel /       │
//! │               DetailsViewModel (watch-published state)  │
//! ├────────────────────────────────────────────────────────┤
//! │  use_case     LoginUseCase / HeroUseCase /             │
//! │               TransformationUseCase                     │
//! ├────────────────────────────────────────────────────────┤
//! │  repository   pass-through seams over the services      │
//! ├────────────────────────────────────────────────────────┤
//! │  core         AppError + service traits                 │
//! │  services     ApiClient (reqwest)                       │
//! │  store        SessionStore over a SecretStore backend   │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTPS
//!          ▼
//! ┌─────────────────────────────────────────┐
//! │  dragonball.keepcoding.education API    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: view models and the localized message catalog
//! - **config**: `ClientConfig` loaded from the environment
//! - **container**: composition root wiring the production graph
//! - **core**: error taxonomy and service traits
//! - **debug**: logging setup
//! - **fakes**: deterministic service and use-case implementations
//! - **repository**: repository traits and default implementations
//! - **services**: HTTP API client
//! - **store**: session token persistence
//! - **use_case**: orchestration and ordering rules
//!
//! ## Usage
//!
//! ```rust,no_run
//! use heroes_client::app::LoginState;
//! use heroes_client::config::ClientConfig;
//! use heroes_client::container::Container;
//! use heroes_client::debug::{init_logger, LogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let _guard = init_logger(&LogConfig::from_env())?;
//!     let config = ClientConfig::from_env()?;
//!     config.validate()?;
//!
//!     let container = Container::from_config(&config);
//!     let login = container.login_view_model();
//!     if login.state() == LoginState::ShowLogin {
//!         login.login("goku@dragonball.com", "kamehameha").await;
//!     }
//!
//!     let heroes = container.heroes_view_model();
//!     heroes.load_heroes("").await;
//!     for hero in heroes.heroes() {
//!         println!("{}", hero.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p heroes-client
//! ```
//!
//! Service tests run against an in-process `axum` stub; view-model tests use
//! the fakes in [`fakes`] and Tokio's paused clock.

pub mod app;
pub mod config;
pub mod container;
pub mod core;
pub mod debug;
pub mod fakes;
pub mod repository;
pub mod services;
pub mod store;
pub mod use_case;

// Re-export commonly used types for convenience
pub use app::{DetailsViewModel, HeroesViewModel, LoginState, LoginViewModel, TransformationsState};
pub use config::ClientConfig;
pub use container::Container;
pub use core::{AppError, Result};
pub use store::SessionStore;
