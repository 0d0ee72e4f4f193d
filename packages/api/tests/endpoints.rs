//! Exercises the HTTP collaborator against an in-process axum server.

use api::HttpAuthEndpoints;
use axum::extract::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{post, put};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use session::issuer::issue_login_token;
use session::{
    AuthEndpoints, EndpointError, MemoryStorage, ProfileUpdate, SessionConfig, SessionError,
    SessionState, SessionStore,
};

async fn google(Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    match body["token"].as_str() {
        Some("valid-google-credential") => {
            let token = issue_login_token("ann@example.com", Utc::now(), &SessionConfig::default())
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
            Ok(Json(json!({ "token": token })))
        }
        Some("odd-body") => Ok(Json(json!({ "unexpected": true }))),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn reset_password(Json(body): Json<Value>) -> StatusCode {
    match body["email"].as_str() {
        Some(email) if email.ends_with("@example.com") => StatusCode::NO_CONTENT,
        _ => StatusCode::NOT_FOUND,
    }
}

async fn profile(headers: HeaderMap, Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;
    if bearer.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let now = Utc::now().to_rfc3339();
    Ok(Json(json!({
        "id": "user-001",
        "name": body["name"].as_str().unwrap_or("John Doe"),
        "email": "ann@example.com",
        "role": "user",
        "userType": "admin",
        "achievements": ["Eco Warrior"],
        "classificationsCount": 12,
        "emailVerified": true,
        "createdAt": now,
        "lastLogin": now,
    })))
}

async fn spawn_api() -> String {
    let app = Router::new()
        .route("/api/auth/google", post(google))
        .route("/api/auth/reset-password", post(reset_password))
        .route("/api/auth/profile", put(profile));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn test_google_exchange() {
    let endpoints = HttpAuthEndpoints::new(spawn_api().await);
    assert!(!endpoints.base_url().ends_with('/'));

    let token = endpoints.google("valid-google-credential").await.unwrap();
    assert_eq!(token.split('.').count(), 3);

    assert_eq!(
        endpoints.google("stolen").await,
        Err(EndpointError::Status(401))
    );
    assert!(matches!(
        endpoints.google("odd-body").await,
        Err(EndpointError::Decode(_))
    ));
}

#[tokio::test]
async fn test_reset_password() {
    let endpoints = HttpAuthEndpoints::new(spawn_api().await);

    assert_eq!(endpoints.reset_password("ann@example.com").await, Ok(()));
    assert_eq!(
        endpoints.reset_password("nobody@elsewhere.org").await,
        Err(EndpointError::Status(404))
    );
}

#[tokio::test]
async fn test_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoints = HttpAuthEndpoints::new(format!("http://{addr}"));
    assert!(matches!(
        endpoints.reset_password("ann@example.com").await,
        Err(EndpointError::Transport(_))
    ));
}

#[tokio::test]
async fn test_session_store_over_http() {
    let config = SessionConfig::default().with_api_base_url(spawn_api().await);
    let storage = MemoryStorage::new();
    let store = SessionStore::new(
        storage.clone(),
        HttpAuthEndpoints::from_config(&config),
        config,
    );
    store.initialize().await;

    let err = store.login_with_google("stolen").await.unwrap_err();
    assert!(matches!(err, SessionError::Endpoint(EndpointError::Status(401))));
    assert_eq!(store.state(), SessionState::Anonymous);

    let user = store.login_with_google("valid-google-credential").await.unwrap();
    assert_eq!(user.name, "John Doe");
    assert!(!store.is_admin());
    assert!(storage.get("token").is_some());

    let update = ProfileUpdate {
        name: Some("Ann Lee".to_string()),
        ..Default::default()
    };
    let updated = store.update_profile(&update).await.unwrap();
    assert_eq!(updated.name, "Ann Lee");
    // the server answered with an admin account type
    assert!(store.is_admin());
}
