//! # Login View Model
//!
//! Drives the login screen: the stored-session check on start, the login
//! command, and the delayed hand-off to the hero list. State is published on
//! `watch` channels so a UI can render each change.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::messages::{Locale, MessageKey};
use super::spawn_on_current;
use crate::config::DEFAULT_NAVIGATION_DELAY;
use crate::use_case::LoginUseCase;

/// Screen state of the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Loading,
    ShowLogin,
    NavigateToHeroes,
}

/// Message shown above the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    pub key: MessageKey,
    pub text: String,
    pub is_error: bool,
}

/// Login screen state machine.
///
/// Starts in [`LoginState::Loading`]. A stored token leads to
/// [`LoginState::NavigateToHeroes`] after the navigation delay, otherwise the
/// form is shown at once. Every command invalidates the transition scheduled
/// by the previous one, so a late navigation never overrides a newer state.
///
/// Must be created inside a Tokio runtime.
pub struct LoginViewModel {
    inner: Arc<Inner>,
}

struct Inner {
    use_case: Arc<dyn LoginUseCase>,
    state: watch::Sender<LoginState>,
    message: watch::Sender<Option<UserMessage>>,
    generation: AtomicU64,
    pending: Mutex<Option<JoinHandle<()>>>,
    delay: Duration,
    locale: Locale,
}

impl LoginViewModel {
    pub fn new(use_case: Arc<dyn LoginUseCase>) -> Self {
        Self::with_options(use_case, DEFAULT_NAVIGATION_DELAY, Locale::default())
    }

    pub fn with_options(use_case: Arc<dyn LoginUseCase>, delay: Duration, locale: Locale) -> Self {
        let (state, _) = watch::channel(LoginState::Loading);
        let (message, _) = watch::channel(None);
        let inner = Arc::new(Inner {
            use_case,
            state,
            message,
            generation: AtomicU64::new(0),
            pending: Mutex::new(None),
            delay,
            locale,
        });

        let generation = inner.begin_command();
        inner.check_session(generation);

        Self { inner }
    }

    pub fn state(&self) -> LoginState {
        *self.inner.state.borrow()
    }

    pub fn user_message(&self) -> Option<UserMessage> {
        self.inner.message.borrow().clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<LoginState> {
        self.inner.state.subscribe()
    }

    pub fn subscribe_message(&self) -> watch::Receiver<Option<UserMessage>> {
        self.inner.message.subscribe()
    }

    /// Re-run the stored-token check performed on construction.
    pub fn trigger_auto_login(&self) {
        let generation = self.inner.begin_command();
        self.inner.check_session(generation);
    }

    /// Log in with the given credentials.
    #[tracing::instrument(skip_all)]
    pub async fn login(&self, user: &str, password: &str) {
        let generation = self.inner.begin_command();
        self.inner.message.send_replace(None);
        self.inner.state.send_replace(LoginState::Loading);

        match self.inner.use_case.login_app(user, password).await {
            Ok(true) => {
                tracing::info!("Login succeeded");
                self.inner.set_message(MessageKey::LoginSuccess, false);
                self.inner.schedule_navigation(generation);
            }
            Ok(false) => {
                tracing::warn!("Login use case reported failure without an error");
                self.inner.set_message(MessageKey::UnexpectedError, true);
                self.inner.state.send_replace(LoginState::ShowLogin);
            }
            Err(e) => {
                tracing::warn!(error = ?e, "Login failed");
                self.inner.set_message(MessageKey::from(&e), true);
                self.inner.state.send_replace(LoginState::ShowLogin);
            }
        }
    }
}

impl Drop for LoginViewModel {
    fn drop(&mut self) {
        if let Some(handle) = self.inner.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Inner {
    /// Start a new command: invalidate and abort the pending transition.
    fn begin_command(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn check_session(self: &Arc<Self>, generation: u64) {
        if self.use_case.check_token() {
            tracing::debug!("Stored session found");
            self.set_message(MessageKey::WelcomeBack, false);
            self.schedule_navigation(generation);
        } else {
            self.state.send_replace(LoginState::ShowLogin);
        }
    }

    fn set_message(&self, key: MessageKey, is_error: bool) {
        self.message.send_replace(Some(UserMessage {
            key,
            text: key.text(self.locale),
            is_error,
        }));
    }

    fn schedule_navigation(self: &Arc<Self>, generation: u64) {
        if !self.is_current(generation) {
            return;
        }

        let weak: Weak<Self> = Arc::downgrade(self);
        let delay = self.delay;
        let task = async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                if inner.is_current(generation) {
                    inner.state.send_replace(LoginState::NavigateToHeroes);
                } else {
                    tracing::debug!(generation, "Discarding stale navigation");
                }
            }
        };

        match spawn_on_current(task) {
            Some(handle) => *self.pending.lock() = Some(handle),
            None => {
                self.state.send_replace(LoginState::NavigateToHeroes);
            }
        }
    }
}
