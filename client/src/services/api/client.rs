//! # API Client
//!
//! Request builder and transport shared by the domain services.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Hero, Transformation};
use std::sync::Arc;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{HeroService, LoginService, TransformationService};
use crate::store::SessionStore;

/// Fixed endpoint table of the heroes API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    HeroesList,
    TransformationsList,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "/api/auth/login",
            Endpoint::HeroesList => "/api/heros/all",
            // Spelling is the server's
            Endpoint::TransformationsList => "/api/heros/tranformations",
        }
    }

    /// Map a response status onto the error taxonomy.
    ///
    /// Only the login endpoint distinguishes 403; elsewhere it is unexpected.
    pub fn classify(&self, status: StatusCode) -> Result<()> {
        match status.as_u16() {
            200 => Ok(()),
            401 => Err(AppError::InvalidCredentials),
            403 if *self == Endpoint::Login => Err(AppError::AccessDenied),
            code @ 500..=599 => Err(AppError::Server(code)),
            _ => Err(AppError::Unexpected),
        }
    }
}

/// Failure to build an outgoing request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("bad URL: {0}")]
    BadUrl(String),

    #[error("failed to encode request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    Build(#[from] reqwest::Error),
}

/// HTTP client for the heroes API.
///
/// Wraps a pooled `reqwest::Client` and reads the session token from the
/// injected [`SessionStore`] whenever a request needs authentication.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a client for `config.base_url` with the configured timeout.
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `endpoint` under the configured base URL.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Build a JSON request.
    ///
    /// With `requires_auth` set and a non-empty token in the session store,
    /// `Authorization: Bearer <token>` is attached. A missing token is not an
    /// error here; the server answers 401 instead.
    pub fn create_request<B>(
        &self,
        url: &str,
        method: Method,
        body: Option<&B>,
        requires_auth: bool,
    ) -> std::result::Result<Request, RequestError>
    where
        B: Serialize + ?Sized,
    {
        let url = Url::parse(url).map_err(|_| RequestError::BadUrl(url.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RequestError::BadUrl(url.to_string()));
        }

        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        if requires_auth {
            match self.session.load() {
                Some(token) if !token.is_empty() => builder = builder.bearer_auth(token),
                _ => tracing::debug!("No session token, sending request without Authorization"),
            }
        }

        Ok(builder.build()?)
    }

    /// Send `request` and read the whole body.
    ///
    /// Transport failures (connect, timeout, DNS, body read) become
    /// [`AppError::Network`].
    pub(crate) async fn execute(&self, request: Request) -> Result<(StatusCode, Vec<u8>)> {
        let response = self.client.execute(request).await.map_err(|e| {
            tracing::warn!(
                error = %e,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "Transport failure"
            );
            AppError::Network
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read response body");
            AppError::Network
        })?;

        Ok((status, body.to_vec()))
    }
}

/// Decode a JSON body, mapping decode failures to [`AppError::Unexpected`].
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        AppError::Unexpected
    })
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl LoginService for ApiClient {
    async fn login(&self, user: &str, password: &str) -> Result<String> {
        crate::services::api::auth::login(self, user, password).await
    }
}

#[async_trait::async_trait]
impl HeroService for ApiClient {
    async fn get_heroes(&self, filter: &str) -> Result<Vec<Hero>> {
        crate::services::api::heroes::get_heroes(self, filter).await
    }
}

#[async_trait::async_trait]
impl TransformationService for ApiClient {
    async fn get_transformations(&self, id: &str) -> Result<Vec<Transformation>> {
        crate::services::api::transformations::get_transformations(self, id).await
    }
}
