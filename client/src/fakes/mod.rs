//! # Fakes
//!
//! Deterministic implementations of the service and use-case traits, for
//! tests and for running the view models without a backend.
//!
//! Service fakes take a scenario enum selecting their outcome:
//!
//! | Fake | Scenarios |
//! |---|---|
//! | [`LoginServiceFake`] | `Success`, `InvalidCredentials`, `ServerError`, `NetworkError` |
//! | [`HeroServiceFake`] | `Success`, `Error`, `Empty` |
//! | [`TransformationServiceFake`] | `Success`, `Empty`, `Error`, `DelayedSuccess` |
//!
//! Failures that stand for "no connection" surface as
//! [`AppError::Network`](crate::core::AppError::Network).

pub mod services;
pub mod use_cases;

pub use services::{
    hero, sample_heroes, transformation, HeroServiceFake, HeroServiceScenario, LoginServiceFake,
    LoginServiceScenario, TransformationServiceFake, TransformationServiceScenario,
    FAKE_SERVICE_TOKEN, GOKU_ID, PICCOLO_ID, VEGETA_ID,
};
pub use use_cases::{
    HeroUseCaseFake, LoginUseCaseFake, ScriptedLoginUseCase, TransformationUseCaseFake,
    FAKE_USE_CASE_TOKEN,
};
