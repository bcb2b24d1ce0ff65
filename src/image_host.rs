//! # Image Host Client
//!
//! This module wraps the external image-hosting service used for catalog
//! images. Uploads are a single blocking round trip with a hard size
//! ceiling and a MIME allow-list; the service is consumed, never
//! re-implemented.

use axum::http::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::AppConfig;
use crate::error::ApiError;

/// MIME types accepted for catalog images
const ALLOWED_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Successful upload result returned to the admin panel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedImage {
    /// Publicly reachable URL of the hosted image
    pub url: String,
    /// Original filename as submitted
    pub filename: String,
}

/// Response body of the external image host
#[derive(Debug, Deserialize)]
struct HostResponse {
    url: String,
}

/// Errors raised while uploading an image
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File exceeds the maximum size of {max_bytes} bytes")]
    TooLarge { max_bytes: usize },
    #[error("File type '{content_type}' is not allowed")]
    UnsupportedType { content_type: String },
    #[error("Image hosting is not configured")]
    NotConfigured,
    #[error("Image host request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Image host returned status {status}")]
    HostFailure { status: u16 },
}

impl From<UploadError> for ApiError {
    fn from(error: UploadError) -> Self {
        match error {
            UploadError::TooLarge { .. } | UploadError::UnsupportedType { .. } => {
                ApiError::new(
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_FAILED",
                    error.to_string(),
                )
            }
            UploadError::NotConfigured => ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Image hosting is not configured",
            ),
            UploadError::Request(err) => {
                tracing::error!("Image host request failed: {}", err);
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "Image upload failed",
                )
            }
            UploadError::HostFailure { status } => {
                tracing::error!(status, "Image host rejected the upload");
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "Image upload failed",
                )
            }
        }
    }
}

/// Client for the external image-hosting service
#[derive(Debug, Clone)]
pub struct ImageHostClient {
    http: reqwest::Client,
    upload_url: Option<String>,
    api_key: Option<String>,
    max_bytes: usize,
}

impl ImageHostClient {
    /// Build a client from the application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            upload_url: config.image_host_upload_url.clone(),
            api_key: config.image_host_api_key.clone(),
            max_bytes: config.upload_max_bytes,
        }
    }

    /// Upload one file, enforcing the size ceiling and MIME allow-list
    /// before any network traffic happens.
    pub async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, UploadError> {
        if bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                max_bytes: self.max_bytes,
            });
        }

        if !ALLOWED_TYPES.contains(&content_type) {
            return Err(UploadError::UnsupportedType {
                content_type: content_type.to_string(),
            });
        }

        let upload_url = self.upload_url.as_ref().ok_or(UploadError::NotConfigured)?;

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let mut request = self.http.post(upload_url).multipart(form);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(UploadError::HostFailure {
                status: response.status().as_u16(),
            });
        }

        let host: HostResponse = response.json().await?;
        Ok(UploadedImage {
            url: host.url,
            filename: filename.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server_url: Option<String>) -> ImageHostClient {
        let config = AppConfig {
            image_host_upload_url: server_url,
            image_host_api_key: Some("test-key".to_string()),
            upload_max_bytes: 1024,
            ..Default::default()
        };
        ImageHostClient::from_config(&config)
    }

    #[tokio::test]
    async fn rejects_oversized_files_before_any_request() {
        let client = client_for(None);

        let result = client
            .upload("big.png", "image/png", vec![0u8; 2048])
            .await;
        assert!(matches!(result, Err(UploadError::TooLarge { .. })));
    }

    #[tokio::test]
    async fn rejects_disallowed_content_types() {
        let client = client_for(None);

        let result = client
            .upload("doc.pdf", "application/pdf", vec![0u8; 16])
            .await;
        assert!(matches!(result, Err(UploadError::UnsupportedType { .. })));
    }

    #[tokio::test]
    async fn unconfigured_host_fails_cleanly() {
        let client = client_for(None);

        let result = client.upload("ok.png", "image/png", vec![0u8; 16]).await;
        assert!(matches!(result, Err(UploadError::NotConfigured)));
    }

    #[tokio::test]
    async fn successful_upload_returns_hosted_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "url": "https://img.example.com/abc123.png"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(Some(format!("{}/upload", server.uri())));

        let uploaded = client
            .upload("feed.png", "image/png", vec![0u8; 16])
            .await
            .unwrap();

        assert_eq!(uploaded.url, "https://img.example.com/abc123.png");
        assert_eq!(uploaded.filename, "feed.png");
    }

    #[tokio::test]
    async fn host_error_status_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(Some(format!("{}/upload", server.uri())));

        let result = client.upload("feed.png", "image/png", vec![0u8; 16]).await;
        assert!(matches!(
            result,
            Err(UploadError::HostFailure { status: 500 })
        ));
    }
}
