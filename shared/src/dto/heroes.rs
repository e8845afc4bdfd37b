use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hero as returned by `POST /api/heros/all`.
///
/// `favorite` is display-only: the client never sends it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Hero {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

/// Body of the hero list request. An empty name means "no filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroFilter {
    pub name: String,
}

impl HeroFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Transformation as returned by `POST /api/heros/tranformations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Transformation {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub photo: String,
}

/// Body of the transformation list request (hero id as a string).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransformationFilter {
    pub id: String,
}

impl TransformationFilter {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
