//! # Transformation List Endpoint

use reqwest::Method;
use shared::{Transformation, TransformationFilter};

use super::client::{decode_json, ApiClient, Endpoint};
use crate::core::error::Result;

/// Fetch the transformations of the hero identified by `id`.
#[tracing::instrument(skip(client))]
pub async fn get_transformations(client: &ApiClient, id: &str) -> Result<Vec<Transformation>> {
    let body = TransformationFilter::new(id);
    let request = client.create_request(
        &client.endpoint_url(Endpoint::TransformationsList),
        Method::POST,
        Some(&body),
        true,
    )?;

    let (status, body) = client.execute(request).await?;
    if let Err(e) = Endpoint::TransformationsList.classify(status) {
        tracing::warn!(status = status.as_u16(), error = ?e, "Transformation list request failed");
        return Err(e);
    }

    let transformations: Vec<Transformation> = decode_json(&body)?;
    tracing::debug!(count = transformations.len(), "Transformations received");
    Ok(transformations)
}
