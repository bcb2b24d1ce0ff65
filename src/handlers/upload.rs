//! # Image Upload Handler
//!
//! This module contains the admin image upload endpoint. The file is
//! received as multipart form data and delegated to the external image
//! host; nothing is stored locally.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::image_host::UploadedImage;
use crate::server::AppState;

/// Admin endpoint uploading one catalog image
#[utoipa::path(
    post,
    path = "/admin/upload",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image hosted", body = UploadedImage),
        (status = 400, description = "Missing file, oversized, or disallowed type", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 503, description = "Image hosting not configured", body = ApiError)
    ),
    tag = "admin-upload"
)]
pub async fn upload_image(
    State(state): State<AppState>,
    session: AdminSession,
    mut multipart: Multipart,
) -> Result<Json<UploadedImage>, ApiError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            format!("Malformed multipart body: {}", err),
        )
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| {
                ApiError::new(
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_FAILED",
                    format!("Failed to read uploaded file: {}", err),
                )
            })?
            .to_vec();

        file = Some((filename, content_type, bytes));
        break;
    }

    let (filename, content_type, bytes) = file.ok_or_else(|| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            "No file provided",
        )
    })?;

    let uploaded = state
        .image_host
        .upload(&filename, &content_type, bytes)
        .await?;

    tracing::info!(
        admin = %session.username,
        filename = %uploaded.filename,
        "Image uploaded"
    );

    Ok(Json(uploaded))
}
