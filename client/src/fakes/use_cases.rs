//! Use-case fakes for view-model tests, with scripted outcomes and call counts.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{Hero, Transformation};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use super::services::{sample_heroes, transformation};
use crate::core::error::{AppError, Result};
use crate::store::SessionStore;
use crate::use_case::{HeroUseCase, LoginUseCase, TransformationUseCase};

/// Token saved by [`LoginUseCaseFake::login_app`].
pub const FAKE_USE_CASE_TOKEN: &str = "LoginFakeSuccess";

// ========== Login ==========

/// Always succeeds and always reports a stored token.
pub struct LoginUseCaseFake {
    session: Arc<SessionStore>,
}

impl LoginUseCaseFake {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl LoginUseCase for LoginUseCaseFake {
    async fn login_app(&self, _user: &str, _password: &str) -> Result<bool> {
        self.session.save(FAKE_USE_CASE_TOKEN)?;
        Ok(true)
    }

    fn check_token(&self) -> bool {
        true
    }

    fn logout(&self) {
        if let Err(e) = self.session.delete() {
            tracing::warn!(error = %e, "Fake logout failed");
        }
    }
}

/// Login use case whose answers are set by the test.
///
/// With a gate installed, `login_app` parks until the gate is notified, which
/// lets a test observe the view model mid-command.
pub struct ScriptedLoginUseCase {
    has_token: AtomicBool,
    outcome: Mutex<Result<bool>>,
    gate: Option<Arc<Notify>>,
    login_calls: AtomicUsize,
    logout_calls: AtomicUsize,
}

impl ScriptedLoginUseCase {
    pub fn new(has_token: bool, outcome: Result<bool>) -> Self {
        Self {
            has_token: AtomicBool::new(has_token),
            outcome: Mutex::new(outcome),
            gate: None,
            login_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_has_token(&self, has_token: bool) {
        self.has_token.store(has_token, Ordering::SeqCst);
    }

    pub fn set_outcome(&self, outcome: Result<bool>) {
        *self.outcome.lock() = outcome;
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoginUseCase for ScriptedLoginUseCase {
    async fn login_app(&self, _user: &str, _password: &str) -> Result<bool> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        *self.outcome.lock()
    }

    fn check_token(&self) -> bool {
        self.has_token.load(Ordering::SeqCst)
    }

    fn logout(&self) {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.has_token.store(false, Ordering::SeqCst);
    }
}

// ========== Heroes ==========

/// Sample heroes filtered by case-insensitive substring, or a fixed error.
pub struct HeroUseCaseFake {
    error: Option<AppError>,
    logout_calls: AtomicUsize,
}

impl HeroUseCaseFake {
    pub fn new() -> Self {
        Self {
            error: None,
            logout_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: AppError) -> Self {
        Self {
            error: Some(error),
            logout_calls: AtomicUsize::new(0),
        }
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

impl Default for HeroUseCaseFake {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HeroUseCase for HeroUseCaseFake {
    async fn get_heroes(&self, filter: &str) -> Result<Vec<Hero>> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let needle = filter.to_lowercase();
        Ok(sample_heroes()
            .into_iter()
            .filter(|h| h.name.to_lowercase().contains(&needle))
            .collect())
    }

    fn logout(&self) {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Fake logout executed");
    }
}

// ========== Transformations ==========

/// Returns "Super Saiyan" and "Ultra Instinct" for any hero.
#[derive(Debug, Default)]
pub struct TransformationUseCaseFake;

#[async_trait]
impl TransformationUseCase for TransformationUseCaseFake {
    async fn get_transformations(&self, _id: &str) -> Result<Vec<Transformation>> {
        Ok(vec![
            transformation(0x55_01, "Super Saiyan"),
            transformation(0x55_02, "Ultra Instinct"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_use_case_fake_saves_token() {
        let session = Arc::new(SessionStore::in_memory());
        let fake = LoginUseCaseFake::new(session.clone());

        assert_eq!(fake.login_app("testUser", "testPass").await, Ok(true));
        assert!(fake.check_token());
        assert_eq!(session.load().as_deref(), Some(FAKE_USE_CASE_TOKEN));

        fake.logout();
        assert_eq!(session.load(), None);
    }

    #[tokio::test]
    async fn test_scripted_login_follows_script() {
        let fake = ScriptedLoginUseCase::new(false, Err(AppError::Network));
        assert!(!fake.check_token());
        assert_eq!(fake.login_app("u", "p").await, Err(AppError::Network));

        fake.set_outcome(Ok(true));
        fake.set_has_token(true);
        assert_eq!(fake.login_app("u", "p").await, Ok(true));
        assert!(fake.check_token());
        assert_eq!(fake.login_calls(), 2);
    }

    #[tokio::test]
    async fn test_hero_use_case_fake_filters_and_fails() {
        assert_eq!(HeroUseCaseFake::new().get_heroes("pic").await.unwrap().len(), 1);
        assert_eq!(
            HeroUseCaseFake::failing(AppError::Server(503)).get_heroes("").await,
            Err(AppError::Server(503))
        );
    }
}
