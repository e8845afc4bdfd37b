//! # Hero List Endpoint

use reqwest::Method;
use shared::{Hero, HeroFilter};

use super::client::{decode_json, ApiClient, Endpoint};
use crate::core::error::Result;

/// Fetch heroes whose name matches `filter` (empty for all).
#[tracing::instrument(skip(client))]
pub async fn get_heroes(client: &ApiClient, filter: &str) -> Result<Vec<Hero>> {
    let body = HeroFilter::new(filter);
    let request = client.create_request(
        &client.endpoint_url(Endpoint::HeroesList),
        Method::POST,
        Some(&body),
        true,
    )?;

    let (status, body) = client.execute(request).await?;
    if let Err(e) = Endpoint::HeroesList.classify(status) {
        tracing::warn!(status = status.as_u16(), error = ?e, "Hero list request failed");
        return Err(e);
    }

    let heroes: Vec<Hero> = decode_json(&body)?;
    tracing::debug!(count = heroes.len(), "Heroes received");
    Ok(heroes)
}
