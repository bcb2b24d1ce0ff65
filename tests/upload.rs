//! Integration tests for the admin image upload endpoint, with the
//! external image host stubbed out.

mod test_utils;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use test_utils::{login, spawn_app_with_config, test_config};

const BOUNDARY: &str = "aquafeed-test-boundary";

fn multipart_body(filename: &str, content_type: &str, payload: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn upload(
    app: &Router,
    token: Option<&str>,
    body: Vec<u8>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/admin/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

#[tokio::test]
async fn upload_delegates_to_the_image_host() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": "https://img.example.com/feed-abc123.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config();
    config.image_host_upload_url = Some(format!("{}/upload", server.uri()));
    let app = spawn_app_with_config(config).await;
    let token = login(&app).await;

    let body = multipart_body("feed.png", "image/png", b"not-really-a-png");
    let (status, result) = upload(&app, Some(&token), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["url"], "https://img.example.com/feed-abc123.png");
    assert_eq!(result["filename"], "feed.png");
}

#[tokio::test]
async fn upload_requires_a_session() {
    let app = spawn_app_with_config(test_config()).await;

    let body = multipart_body("feed.png", "image/png", b"x");
    let (status, result) = upload(&app, None, body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(result["error"], "Unauthorized");
}

#[tokio::test]
async fn upload_rejects_disallowed_types_without_calling_the_host() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = test_config();
    config.image_host_upload_url = Some(format!("{}/upload", server.uri()));
    let app = spawn_app_with_config(config).await;
    let token = login(&app).await;

    let body = multipart_body("notes.pdf", "application/pdf", b"%PDF-1.4");
    let (status, result) = upload(&app, Some(&token), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(result["error"].as_str().unwrap().contains("not allowed"));
}

#[tokio::test]
async fn upload_enforces_the_size_ceiling() {
    let mut config = test_config();
    config.upload_max_bytes = 64;
    config.image_host_upload_url = Some("http://127.0.0.1:9/upload".to_string());
    let app = spawn_app_with_config(config).await;
    let token = login(&app).await;

    let body = multipart_body("big.png", "image/png", &vec![0u8; 256]);
    let (status, result) = upload(&app, Some(&token), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(result["error"].as_str().unwrap().contains("maximum size"));
}

#[tokio::test]
async fn missing_file_field_is_a_validation_error() {
    let app = spawn_app_with_config(test_config()).await;
    let token = login(&app).await;

    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{BOUNDARY}--\r\n"
    )
    .into_bytes();
    let (status, result) = upload(&app, Some(&token), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["error"], "No file provided");
}
