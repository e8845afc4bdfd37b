//! # Authentication Endpoint
//!
//! `POST /api/auth/login` with HTTP Basic credentials. The 200 response body
//! is the bearer token itself, not JSON.

use lib_utils::b64::basic_auth_value;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;

use super::client::{ApiClient, Endpoint};
use crate::core::error::{AppError, Result};

/// Exchange `user`/`password` for a session token.
#[tracing::instrument(skip_all)]
pub async fn login(client: &ApiClient, user: &str, password: &str) -> Result<String> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let url = client.endpoint_url(Endpoint::Login);
    let mut request = client.create_request::<()>(&url, Method::POST, None, false)?;

    let mut credentials = HeaderValue::from_str(&basic_auth_value(user, password))
        .map_err(|_| AppError::Unexpected)?;
    credentials.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, credentials);

    let (status, body) = client.execute(request).await?;
    let duration = start.elapsed();

    if let Err(e) = Endpoint::Login.classify(status) {
        tracing::warn!(
            status = status.as_u16(),
            error = ?e,
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        return Err(e);
    }

    let token = String::from_utf8(body).map_err(|_| {
        tracing::error!("Login response is not valid UTF-8");
        AppError::Unexpected
    })?;
    if token.is_empty() {
        tracing::error!("Login response carried an empty token");
        return Err(AppError::Unexpected);
    }

    tracing::info!(duration_ms = duration.as_millis(), "Login successful");
    Ok(token)
}
