//! # API Service Tests
//!
//! Each test starts an in-process axum router on `127.0.0.1:0` standing in for
//! the heroes API, then drives the real `ApiClient` against it.

use super::*;
use crate::config::ClientConfig;
use crate::core::error::AppError;
use crate::core::service::{HeroService, LoginService, TransformationService};
use crate::store::SessionStore;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use lib_utils::b64::b64_decode_to_string;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

const HEROES_JSON: &str = r#"[
    {"id":"D13A40E5-4418-4223-9CE6-D2F9A28EBE94","name":"Goku","description":"Saiyan",
     "photo":"https://example.com/goku.jpg","favorite":false},
    {"id":"6E1B907C-EB3A-45BA-AE03-44FA251F64E9","name":"Vegeta","description":"Prince",
     "photo":"https://example.com/vegeta.jpg"}
]"#;

const TRANSFORMATIONS_JSON: &str = r#"[
    {"id":"17824501-1106-4815-BC7A-BFDCCEE43CC9","name":"1. Oozaru","description":"...",
     "photo":"https://example.com/oozaru.jpg","hero":{"id":"D13A40E5-4418-4223-9CE6-D2F9A28EBE94"}}
]"#;

/// What the stub saw for one request.
#[derive(Debug, Clone)]
struct Seen {
    authorization: Option<String>,
    content_type: Option<String>,
    body: String,
}

type SeenLog = Arc<Mutex<Vec<Seen>>>;

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Route `path` to a handler that records the request and answers with
/// `status` and `body`.
fn recording_route(path: &str, status: StatusCode, body: &'static str) -> (Router, SeenLog) {
    let seen: SeenLog = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let router = Router::new().route(
        path,
        post(move |headers: HeaderMap, request_body: String| {
            let log = log.clone();
            async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                log.lock().push(Seen {
                    authorization: header("authorization"),
                    content_type: header("content-type"),
                    body: request_body,
                });
                (status, body)
            }
        }),
    );
    (router, seen)
}

fn client_for(base_url: String, session: Arc<SessionStore>) -> ApiClient {
    let config = ClientConfig {
        base_url,
        request_timeout: Duration::from_secs(5),
        ..ClientConfig::default()
    };
    ApiClient::new(&config, session)
}

async fn login_with_status(status: StatusCode, body: &'static str) -> Result<String, AppError> {
    let (router, _) = recording_route(Endpoint::Login.path(), status, body);
    let base = spawn_stub(router).await;
    let client = client_for(base, Arc::new(SessionStore::in_memory()));
    client.login("goku@example.com", "kamehameha").await
}

// ========== Login ==========

#[tokio::test]
async fn test_login_returns_raw_body_as_token() {
    let (router, seen) = recording_route(Endpoint::Login.path(), StatusCode::OK, "jwt.token.value");
    let base = spawn_stub(router).await;
    let session = Arc::new(SessionStore::in_memory());
    session.save("stale-token").unwrap();
    let client = client_for(base, session);

    let token = client.login("goku@example.com", "kamehameha").await.unwrap();

    assert_eq!(token, "jwt.token.value");
    let seen = seen.lock().clone();
    assert_eq!(seen.len(), 1);
    // Basic credentials only, never the stored bearer token
    let authorization = seen[0].authorization.clone().unwrap();
    let encoded = authorization.strip_prefix("Basic ").unwrap();
    assert_eq!(
        b64_decode_to_string(encoded).unwrap(),
        "goku@example.com:kamehameha"
    );
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
    assert!(seen[0].body.is_empty());
}

#[tokio::test]
async fn test_login_status_classification() {
    assert_eq!(
        login_with_status(StatusCode::UNAUTHORIZED, "").await,
        Err(AppError::InvalidCredentials)
    );
    assert_eq!(
        login_with_status(StatusCode::FORBIDDEN, "").await,
        Err(AppError::AccessDenied)
    );
    assert_eq!(
        login_with_status(StatusCode::SERVICE_UNAVAILABLE, "").await,
        Err(AppError::Server(503))
    );
    assert_eq!(
        login_with_status(StatusCode::IM_A_TEAPOT, "").await,
        Err(AppError::Unexpected)
    );
}

#[tokio::test]
async fn test_login_empty_token_is_unexpected() {
    assert_eq!(
        login_with_status(StatusCode::OK, "").await,
        Err(AppError::Unexpected)
    );
}

#[tokio::test]
async fn test_login_logs_leave_out_credentials() {
    let (_guard, logs) = crate::debug::capture::capture_logs();
    let (router, _) = recording_route(Endpoint::Login.path(), StatusCode::OK, "jwt.token.value");
    let base = spawn_stub(router).await;
    let client = client_for(base, Arc::new(SessionStore::in_memory()));

    client.login("goku@example.com", "kamehameha").await.unwrap();

    let logs = logs.contents();
    assert!(logs.contains("Login successful"));
    assert!(!logs.contains("goku@example.com"));
    assert!(!logs.contains("kamehameha"));
}

#[tokio::test]
async fn test_login_unreachable_server_is_network_error() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{addr}"), Arc::new(SessionStore::in_memory()));

    assert_eq!(client.login("u", "p").await, Err(AppError::Network));
}

#[tokio::test]
async fn test_bad_base_url_is_unexpected() {
    let client = client_for("not a url".to_string(), Arc::new(SessionStore::in_memory()));

    assert_eq!(client.login("u", "p").await, Err(AppError::Unexpected));
    assert_eq!(client.get_heroes("").await, Err(AppError::Unexpected));
}

// ========== Heroes ==========

#[tokio::test]
async fn test_get_heroes_sends_filter_and_bearer() {
    let (router, seen) = recording_route(Endpoint::HeroesList.path(), StatusCode::OK, HEROES_JSON);
    let base = spawn_stub(router).await;
    let session = Arc::new(SessionStore::in_memory());
    session.save("bearer-123").unwrap();
    let client = client_for(base, session);

    let heroes = client.get_heroes("Go").await.unwrap();

    assert_eq!(heroes.len(), 2);
    assert_eq!(heroes[0].name, "Goku");
    assert_eq!(heroes[0].favorite, Some(false));
    assert_eq!(heroes[1].favorite, None);

    let seen = seen.lock().clone();
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer bearer-123"));
    assert_eq!(seen[0].body, r#"{"name":"Go"}"#);
}

#[tokio::test]
async fn test_get_heroes_without_token_sends_no_authorization() {
    let (router, seen) = recording_route(Endpoint::HeroesList.path(), StatusCode::UNAUTHORIZED, "");
    let base = spawn_stub(router).await;
    let client = client_for(base, Arc::new(SessionStore::in_memory()));

    assert_eq!(client.get_heroes("").await, Err(AppError::InvalidCredentials));
    assert_eq!(seen.lock()[0].authorization, None);
}

#[tokio::test]
async fn test_get_heroes_error_statuses() {
    for (status, expected) in [
        (StatusCode::FORBIDDEN, AppError::Unexpected),
        (StatusCode::INTERNAL_SERVER_ERROR, AppError::Server(500)),
        (StatusCode::NOT_FOUND, AppError::Unexpected),
    ] {
        let (router, _) = recording_route(Endpoint::HeroesList.path(), status, "");
        let base = spawn_stub(router).await;
        let client = client_for(base, Arc::new(SessionStore::in_memory()));

        assert_eq!(client.get_heroes("").await, Err(expected), "{status}");
    }
}

#[tokio::test]
async fn test_get_heroes_malformed_json_is_unexpected() {
    let (router, _) = recording_route(Endpoint::HeroesList.path(), StatusCode::OK, "{\"oops\":");
    let base = spawn_stub(router).await;
    let client = client_for(base, Arc::new(SessionStore::in_memory()));

    assert_eq!(client.get_heroes("").await, Err(AppError::Unexpected));
}

// ========== Transformations ==========

#[tokio::test]
async fn test_get_transformations_sends_hero_id() {
    let (router, seen) = recording_route(
        Endpoint::TransformationsList.path(),
        StatusCode::OK,
        TRANSFORMATIONS_JSON,
    );
    let base = spawn_stub(router).await;
    let session = Arc::new(SessionStore::in_memory());
    session.save("bearer-456").unwrap();
    let client = client_for(base, session);

    let transformations = client
        .get_transformations("D13A40E5-4418-4223-9CE6-D2F9A28EBE94")
        .await
        .unwrap();

    assert_eq!(transformations.len(), 1);
    assert_eq!(transformations[0].name, "1. Oozaru");

    let seen = seen.lock().clone();
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer bearer-456"));
    assert_eq!(seen[0].body, r#"{"id":"D13A40E5-4418-4223-9CE6-D2F9A28EBE94"}"#);
}

#[tokio::test]
async fn test_get_transformations_unauthorized() {
    let (router, _) = recording_route(
        Endpoint::TransformationsList.path(),
        StatusCode::UNAUTHORIZED,
        "",
    );
    let base = spawn_stub(router).await;
    let client = client_for(base, Arc::new(SessionStore::in_memory()));

    assert_eq!(
        client.get_transformations("any").await,
        Err(AppError::InvalidCredentials)
    );
}
