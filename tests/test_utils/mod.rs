//! Shared helpers for the integration test suite.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::Database;
use tower::ServiceExt;

use aquafeed::config::AppConfig;
use aquafeed::server::{create_app, create_test_app_state};

pub const ADMIN_PASSWORD: &str = "admin@123";

pub fn test_config() -> AppConfig {
    AppConfig {
        session_secret: "0123456789abcdef0123456789abcdef".to_string(),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        ..Default::default()
    }
}

/// Build an app over a fresh in-memory store; seeds only the admin account.
pub async fn spawn_app() -> Router {
    spawn_app_with_config(test_config()).await
}

/// Build an app with a caller-supplied configuration.
pub async fn spawn_app_with_config(config: AppConfig) -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    aquafeed::seeds::admin::seed_admin(&db, &config).await.unwrap();

    create_app(create_test_app_state(config, db))
}

/// Perform a JSON request and return status plus parsed body.
///
/// Responses without a body (or with a non-JSON one) yield `Value::Null`.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Log in as the seeded admin and return the session token.
pub async fn login(app: &Router) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/admin/login",
        None,
        Some(serde_json::json!({
            "username": "admin",
            "password": ADMIN_PASSWORD,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}
