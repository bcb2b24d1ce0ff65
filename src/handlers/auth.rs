//! # Admin Login Handler
//!
//! This module contains the credential login endpoint. It is the only
//! admin route outside the session guard.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::issue_session_token;
use crate::error::{ApiError, unauthorized};
use crate::repositories::AdminUserRepository;
use crate::server::AppState;

/// Credentials submitted by the admin login form
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session token issued after successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for subsequent admin requests
    pub token: String,
    pub admin_id: i32,
    pub username: String,
}

/// Authenticate an admin and issue a session token
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ApiError)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let repo = AdminUserRepository::new(&state.db);

    let admin = repo
        .verify_credentials(&request.username, &request.password)
        .await?
        .ok_or_else(|| unauthorized(Some("Invalid credentials")))?;

    let token = issue_session_token(&state.config, &admin)?;

    tracing::info!(username = %admin.username, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        admin_id: admin.id,
        username: admin.username,
    }))
}
