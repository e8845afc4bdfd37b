//! # Composition Root
//!
//! Builds the production object graph from a [`ClientConfig`] and hands out
//! view models wired to it:
//!
//! ```text
//! ClientConfig
//!   ├─► SessionStore (FileSecretStore at config.token_file)
//!   └─► ApiClient ──► Default*Repository ──► Default*UseCase ──► *ViewModel
//! ```
//!
//! ```rust,no_run
//! use heroes_client::config::ClientConfig;
//! use heroes_client::container::Container;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//!
//! let container = Container::from_config(&config);
//! let login = container.login_view_model();
//! login.login("goku@dragonball.com", "kamehameha").await;
//! # Ok(())
//! # }
//! ```

use shared::Hero;
use std::sync::Arc;

use crate::app::{DetailsViewModel, HeroesViewModel, LoginViewModel};
use crate::config::ClientConfig;
use crate::repository::{
    DefaultHeroRepository, DefaultLoginRepository, DefaultTransformationRepository,
};
use crate::services::api::ApiClient;
use crate::store::{FileSecretStore, SessionStore};
use crate::use_case::{
    DefaultHeroUseCase, DefaultLoginUseCase, DefaultTransformationUseCase, HeroUseCase,
    LoginUseCase, TransformationUseCase,
};

/// Shared services for one client instance.
pub struct Container {
    config: ClientConfig,
    session: Arc<SessionStore>,
    login: Arc<dyn LoginUseCase>,
    heroes: Arc<dyn HeroUseCase>,
    transformations: Arc<dyn TransformationUseCase>,
}

impl Container {
    /// Production wiring with the session persisted to `config.token_file`.
    pub fn from_config(config: &ClientConfig) -> Self {
        let backend = Arc::new(FileSecretStore::new(&config.token_file));
        Self::with_session(config, Arc::new(SessionStore::new(backend)))
    }

    /// Production wiring over a caller-provided session store.
    pub fn with_session(config: &ClientConfig, session: Arc<SessionStore>) -> Self {
        let api = Arc::new(ApiClient::new(config, Arc::clone(&session)));

        let login_repo = Arc::new(DefaultLoginRepository::new(api.clone()));
        let hero_repo = Arc::new(DefaultHeroRepository::new(api.clone()));
        let transformation_repo = Arc::new(DefaultTransformationRepository::new(api));

        tracing::info!(
            base_url = %config.base_url,
            token_file = %config.token_file.display(),
            "Client container ready"
        );

        Self {
            config: config.clone(),
            login: Arc::new(DefaultLoginUseCase::new(login_repo, Arc::clone(&session))),
            heroes: Arc::new(DefaultHeroUseCase::new(hero_repo, Arc::clone(&session))),
            transformations: Arc::new(DefaultTransformationUseCase::new(transformation_repo)),
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Must be called inside a Tokio runtime.
    pub fn login_view_model(&self) -> LoginViewModel {
        LoginViewModel::with_options(
            Arc::clone(&self.login),
            self.config.navigation_delay,
            self.config.locale,
        )
    }

    /// Hero list that starts loading right away. Must be called inside a Tokio runtime.
    pub fn heroes_view_model(&self) -> HeroesViewModel {
        HeroesViewModel::with_initial_load(Arc::clone(&self.heroes), self.config.locale)
    }

    /// Must be called inside a Tokio runtime.
    pub fn details_view_model(&self, hero: Hero) -> DetailsViewModel {
        DetailsViewModel::new(hero, Arc::clone(&self.transformations))
    }
}
