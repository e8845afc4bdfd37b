//! # Heroes View Model
//!
//! Hero list screen state: the sorted list, a loading flag and an error flag.

use shared::Hero;
use std::sync::Arc;
use tokio::sync::watch;

use super::messages::{Locale, MessageKey};
use super::spawn_on_current;
use crate::use_case::HeroUseCase;

/// Published state of the hero list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroesState {
    pub heroes: Vec<Hero>,
    pub is_loading: bool,
    pub show_error: bool,
}

/// Hero list screen.
pub struct HeroesViewModel {
    inner: Arc<Inner>,
}

struct Inner {
    use_case: Arc<dyn HeroUseCase>,
    state: watch::Sender<HeroesState>,
    locale: Locale,
}

impl HeroesViewModel {
    pub fn new(use_case: Arc<dyn HeroUseCase>) -> Self {
        Self::with_locale(use_case, Locale::default())
    }

    pub fn with_locale(use_case: Arc<dyn HeroUseCase>, locale: Locale) -> Self {
        let (state, _) = watch::channel(HeroesState::default());
        Self {
            inner: Arc::new(Inner {
                use_case,
                state,
                locale,
            }),
        }
    }

    /// View model that immediately starts loading the unfiltered list.
    ///
    /// Must be created inside a Tokio runtime; without one nothing is loaded.
    pub fn with_initial_load(use_case: Arc<dyn HeroUseCase>, locale: Locale) -> Self {
        let vm = Self::with_locale(use_case, locale);
        let inner = Arc::clone(&vm.inner);
        if spawn_on_current(async move { inner.load("").await }).is_none() {
            tracing::warn!("No runtime available, initial hero load skipped");
        }
        vm
    }

    pub fn state(&self) -> HeroesState {
        self.inner.state.borrow().clone()
    }

    pub fn heroes(&self) -> Vec<Hero> {
        self.inner.state.borrow().heroes.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading
    }

    pub fn show_error(&self) -> bool {
        self.inner.state.borrow().show_error
    }

    /// Text to display while `show_error` is set.
    pub fn error_message(&self) -> Option<String> {
        self.show_error()
            .then(|| MessageKey::HeroesError.text(self.inner.locale))
    }

    pub fn subscribe(&self) -> watch::Receiver<HeroesState> {
        self.inner.state.subscribe()
    }

    /// Fetch heroes matching `filter`. An empty result counts as an error;
    /// a failure keeps the previous list.
    pub async fn load_heroes(&self, filter: &str) {
        self.inner.load(filter).await;
    }

    pub fn logout(&self) {
        self.inner.use_case.logout();
    }
}

impl Inner {
    #[tracing::instrument(skip(self))]
    async fn load(&self, filter: &str) {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.show_error = false;
        });

        let result = self.use_case.get_heroes(filter).await;

        self.state.send_modify(|s| {
            match result {
                Ok(heroes) => {
                    tracing::info!(count = heroes.len(), "Heroes loaded");
                    s.show_error = heroes.is_empty();
                    s.heroes = heroes;
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "Failed to load heroes");
                    s.show_error = true;
                }
            }
            s.is_loading = false;
        });
    }
}
