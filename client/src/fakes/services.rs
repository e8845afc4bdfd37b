//! Scenario-driven fakes of the HTTP service traits.

use async_trait::async_trait;
use shared::{hero_id_param, Hero, Transformation};
use std::time::Duration;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::service::{HeroService, LoginService, TransformationService};

/// Token returned by [`LoginServiceScenario::Success`].
pub const FAKE_SERVICE_TOKEN: &str = "eyJraWQiOiJwcml2YXRlIiwidHlwIjoiSldUIiwiYWxnIjoiSFMyNTYifQ.\
eyJleHBpcmF0aW9uIjo2NDA5MjIxMTIwMCwiaWRlbnRpZnkiOiJmYWtlIn0.fake-signature";

pub const GOKU_ID: Uuid = Uuid::from_u128(0xD13A40E5_4418_4223_9CE6_D2F9A28EBE94);
pub const VEGETA_ID: Uuid = Uuid::from_u128(0x6E1B907C_EB3A_45BA_AE03_44FA251F64E9);
pub const PICCOLO_ID: Uuid = Uuid::from_u128(0x14BB8E98_6586_4EA7_B4D7_35D6A63F5AA3);

const DELAYED_SUCCESS_LATENCY: Duration = Duration::from_secs(2);

/// Hero with a deterministic id derived from `n`.
pub fn hero(n: u128, name: &str) -> Hero {
    Hero {
        id: Uuid::from_u128(n),
        name: name.to_string(),
        description: format!("{name} description"),
        photo: format!("https://example.com/{}.jpg", name.to_lowercase()),
        favorite: None,
    }
}

/// Transformation with a deterministic id derived from `n`.
pub fn transformation(n: u128, name: &str) -> Transformation {
    Transformation {
        id: Uuid::from_u128(n),
        name: name.to_string(),
        description: format!("{name} description"),
        photo: format!("https://example.com/{}.jpg", name.to_lowercase().replace(' ', "_")),
    }
}

/// Goku, Vegeta and Piccolo, in that order.
pub fn sample_heroes() -> Vec<Hero> {
    vec![
        Hero {
            id: GOKU_ID,
            name: "Goku".to_string(),
            description: "The strongest Saiyan.".to_string(),
            photo: "https://example.com/goku.jpg".to_string(),
            favorite: Some(true),
        },
        Hero {
            id: VEGETA_ID,
            name: "Vegeta".to_string(),
            description: "Prince of all Saiyans.".to_string(),
            photo: "https://example.com/vegeta.jpg".to_string(),
            favorite: Some(false),
        },
        Hero {
            id: PICCOLO_ID,
            name: "Piccolo".to_string(),
            description: "The mighty Namekian warrior.".to_string(),
            photo: "https://example.com/piccolo.jpg".to_string(),
            favorite: Some(false),
        },
    ]
}

fn super_saiyan() -> Transformation {
    transformation(0x55_01, "Super Saiyan")
}

fn ultra_instinct() -> Transformation {
    transformation(0x55_02, "Ultra Instinct")
}

fn super_saiyan_blue() -> Transformation {
    transformation(0x55_03, "Super Saiyan Blue")
}

// ========== Login ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginServiceScenario {
    Success,
    InvalidCredentials,
    ServerError,
    NetworkError,
}

/// [`LoginService`] with a fixed outcome.
#[derive(Debug, Clone)]
pub struct LoginServiceFake {
    scenario: LoginServiceScenario,
}

impl LoginServiceFake {
    pub fn new(scenario: LoginServiceScenario) -> Self {
        Self { scenario }
    }
}

#[async_trait]
impl LoginService for LoginServiceFake {
    async fn login(&self, _user: &str, _password: &str) -> Result<String> {
        match self.scenario {
            LoginServiceScenario::Success => Ok(FAKE_SERVICE_TOKEN.to_string()),
            LoginServiceScenario::InvalidCredentials => Err(AppError::InvalidCredentials),
            LoginServiceScenario::ServerError => Err(AppError::Server(500)),
            LoginServiceScenario::NetworkError => Err(AppError::Network),
        }
    }
}

// ========== Heroes ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroServiceScenario {
    Success,
    Error,
    Empty,
}

/// [`HeroService`] over [`sample_heroes`].
///
/// `Success` filters locally by case-insensitive substring of the name.
#[derive(Debug, Clone)]
pub struct HeroServiceFake {
    scenario: HeroServiceScenario,
}

impl HeroServiceFake {
    pub fn new(scenario: HeroServiceScenario) -> Self {
        Self { scenario }
    }
}

#[async_trait]
impl HeroService for HeroServiceFake {
    async fn get_heroes(&self, filter: &str) -> Result<Vec<Hero>> {
        match self.scenario {
            HeroServiceScenario::Success => {
                let needle = filter.to_lowercase();
                Ok(sample_heroes()
                    .into_iter()
                    .filter(|h| h.name.to_lowercase().contains(&needle))
                    .collect())
            }
            HeroServiceScenario::Error => Err(AppError::Network),
            HeroServiceScenario::Empty => Ok(Vec::new()),
        }
    }
}

// ========== Transformations ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformationServiceScenario {
    Success,
    Empty,
    Error,
    DelayedSuccess,
}

/// [`TransformationService`] keyed by the sample hero ids.
///
/// `Success` returns Goku's and Vegeta's transformations and nothing for
/// any other id. `DelayedSuccess` answers after two seconds regardless of id.
#[derive(Debug, Clone)]
pub struct TransformationServiceFake {
    scenario: TransformationServiceScenario,
}

impl TransformationServiceFake {
    pub fn new(scenario: TransformationServiceScenario) -> Self {
        Self { scenario }
    }
}

#[async_trait]
impl TransformationService for TransformationServiceFake {
    async fn get_transformations(&self, id: &str) -> Result<Vec<Transformation>> {
        match self.scenario {
            TransformationServiceScenario::Success => {
                if id.eq_ignore_ascii_case(&hero_id_param(&GOKU_ID)) {
                    Ok(vec![super_saiyan(), ultra_instinct()])
                } else if id.eq_ignore_ascii_case(&hero_id_param(&VEGETA_ID)) {
                    Ok(vec![super_saiyan_blue()])
                } else {
                    Ok(Vec::new())
                }
            }
            TransformationServiceScenario::Empty => Ok(Vec::new()),
            TransformationServiceScenario::Error => Err(AppError::Network),
            TransformationServiceScenario::DelayedSuccess => {
                tokio::time::sleep(DELAYED_SUCCESS_LATENCY).await;
                Ok(vec![super_saiyan(), ultra_instinct()])
            }
        }
    }
}
