//! # Authentication and Authorization
//!
//! This module provides credential-based admin authentication and the
//! session guard applied to every admin endpoint. Login verifies a bcrypt
//! password hash and issues a signed HS256 session token; the guard
//! resolves the bearer token back to an [`AdminSession`] before any store
//! access happens.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{ApiError, unauthorized};
use crate::models::admin_user;
use crate::server::AppState;

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin user id
    pub sub: String,
    /// Display name of the admin
    pub name: String,
    /// Issued-at timestamp (seconds)
    pub iat: u64,
    /// Expiry timestamp (seconds)
    pub exp: u64,
}

/// Authenticated admin identity resolved by the session guard.
///
/// Passed explicitly into repository calls so privileged mutations carry
/// their actor instead of reading ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub admin_id: i32,
    pub username: String,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.config)
    }
}

/// Issues a signed session token for a verified admin user.
pub fn issue_session_token(
    config: &AppConfig,
    admin: &admin_user::Model,
) -> Result<String, ApiError> {
    let now = Utc::now().timestamp().max(0) as u64;
    let claims = SessionClaims {
        sub: admin.id.to_string(),
        name: admin.username.clone(),
        iat: now,
        exp: now + config.session_ttl_seconds,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.session_secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign session token: {}", err);
        ApiError::from(crate::error::ErrorType::InternalServerError)
    })
}

/// Resolves a presented token to an [`AdminSession`].
///
/// Absent, expired, or malformed tokens all fail uniformly.
pub fn verify_session_token(config: &AppConfig, token: &str) -> Result<AdminSession, ApiError> {
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.session_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| unauthorized(None))?;

    let admin_id = data
        .claims
        .sub
        .parse::<i32>()
        .map_err(|_| unauthorized(None))?;

    Ok(AdminSession {
        admin_id,
        username: data.claims.name,
    })
}

/// Session guard middleware applied to every admin route.
///
/// Rejects the request with 401 before any handler or store access runs.
pub async fn session_guard(
    State(config): State<Arc<AppConfig>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;
    let session = verify_session_token(&config, token)?;

    tracing::debug!(admin = %session.username, "Authenticated admin request");
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized(None))
        .and_then(|value| value.to_str().map_err(|_| unauthorized(None)))
        .and_then(|header| header.strip_prefix("Bearer ").ok_or_else(|| unauthorized(None)))
}

impl<S> FromRequestParts<S> for AdminSession
where
    Arc<AppConfig>: FromRef<S>,
    S: Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminSession>()
            .cloned()
            .ok_or_else(|| unauthorized(None))
    }
}
