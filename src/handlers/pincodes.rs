//! # Pincode Handlers
//!
//! This module contains the public deliverability check and the admin
//! pincode CRUD endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::models::pincode::Model as PincodeModel;
use crate::order_flow::Deliverability;
use crate::repositories::PincodeRepository;
use crate::repositories::pincode::{CreatePincodeRequest, UpdatePincodeRequest};
use crate::server::AppState;

/// Query parameters for the public deliverability check
#[derive(Debug, Deserialize, IntoParams)]
pub struct CheckPincodeQuery {
    /// 6-digit postal code to check; absent or malformed codes report
    /// unavailable rather than an error
    #[serde(default)]
    pub code: String,
}

/// Request body for creating a pincode record
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePincodeBody {
    pub code: String,
    pub area: Option<String>,
    pub is_active: Option<bool>,
}

/// Request body for updating a pincode record; absent fields are unchanged
#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdatePincodeBody {
    pub code: Option<String>,
    pub area: Option<String>,
    pub is_active: Option<bool>,
}

/// Public endpoint checking whether delivery covers a pincode
#[utoipa::path(
    get,
    path = "/check-pincode",
    params(CheckPincodeQuery),
    responses(
        (status = 200, description = "Deliverability result", body = Deliverability)
    ),
    tag = "catalog"
)]
pub async fn check_pincode(
    State(state): State<AppState>,
    Query(query): Query<CheckPincodeQuery>,
) -> Result<Json<Deliverability>, ApiError> {
    let found = PincodeRepository::new(&state.db)
        .find_deliverable(&query.code)
        .await?;

    let result = match found {
        Some(record) => Deliverability::available(record.area),
        None => Deliverability::unavailable(),
    };

    Ok(Json(result))
}

/// Admin endpoint listing the pincode registry
#[utoipa::path(
    get,
    path = "/admin/pincodes",
    responses(
        (status = 200, description = "All pincode records", body = [PincodeModel]),
        (status = 401, description = "Unauthorized", body = ApiError)
    ),
    tag = "admin-pincodes"
)]
pub async fn list_pincodes(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<Vec<PincodeModel>>, ApiError> {
    let pincodes = PincodeRepository::new(&state.db).list().await?;
    Ok(Json(pincodes))
}

/// Admin endpoint adding a deliverable pincode
#[utoipa::path(
    post,
    path = "/admin/pincodes",
    request_body = CreatePincodeBody,
    responses(
        (status = 201, description = "Pincode created", body = PincodeModel),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 409, description = "Duplicate code", body = ApiError)
    ),
    tag = "admin-pincodes"
)]
pub async fn create_pincode(
    State(state): State<AppState>,
    session: AdminSession,
    Json(body): Json<CreatePincodeBody>,
) -> Result<(StatusCode, Json<PincodeModel>), ApiError> {
    let created = PincodeRepository::new(&state.db)
        .create(CreatePincodeRequest {
            code: body.code,
            area: body.area,
            is_active: body.is_active,
        })
        .await?;

    tracing::info!(admin = %session.username, code = %created.code, "Pincode created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Admin endpoint updating a pincode record
#[utoipa::path(
    put,
    path = "/admin/pincodes/{id}",
    params(("id" = i32, Path, description = "Pincode record id")),
    request_body = UpdatePincodeBody,
    responses(
        (status = 200, description = "Pincode updated", body = PincodeModel),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Pincode not found", body = ApiError)
    ),
    tag = "admin-pincodes"
)]
pub async fn update_pincode(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdatePincodeBody>,
) -> Result<Json<PincodeModel>, ApiError> {
    let updated = PincodeRepository::new(&state.db)
        .update(
            id,
            UpdatePincodeRequest {
                code: body.code,
                area: body.area,
                is_active: body.is_active,
            },
        )
        .await?;

    tracing::info!(admin = %session.username, pincode_id = id, "Pincode updated");

    Ok(Json(updated))
}

/// Admin endpoint removing a pincode record
#[utoipa::path(
    delete,
    path = "/admin/pincodes/{id}",
    params(("id" = i32, Path, description = "Pincode record id")),
    responses(
        (status = 200, description = "Pincode deleted"),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Pincode not found", body = ApiError)
    ),
    tag = "admin-pincodes"
)]
pub async fn delete_pincode(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    PincodeRepository::new(&state.db).delete(id).await?;

    tracing::info!(admin = %session.username, pincode_id = id, "Pincode deleted");

    Ok(Json(serde_json::json!({ "success": true })))
}
