//! # Dealer Application Handlers
//!
//! This module contains the public dealer application form and the admin
//! dealer management endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::AdminSession;
use crate::error::{ApiError, validation_error};
use crate::models::dealer_application::DealerStatus;
use crate::repositories::DealerApplicationRepository;
use crate::repositories::dealer_application::SubmitDealerRequest;
use crate::server::AppState;

/// Request body for the public dealer application form.
///
/// Every field is optional at the wire level so a missing required field
/// surfaces as a 400 validation error rather than a deserialization
/// failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DealerBody {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub business: Option<String>,
    pub city: Option<String>,
    pub details: Option<String>,
}

/// Correlation id returned for a stored application
#[derive(Debug, Serialize, ToSchema)]
pub struct DealerSubmitResponse {
    pub success: bool,
    pub id: i32,
}

/// Dealer application as shown in the admin panel
#[derive(Debug, Serialize, ToSchema)]
pub struct DealerView {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub business: String,
    pub city: String,
    pub details: String,
    pub status: DealerStatus,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<crate::models::dealer_application::Model> for DealerView {
    fn from(model: crate::models::dealer_application::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            phone: model.phone,
            business: model.business,
            city: model.city,
            details: model.details,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Request body for updating a dealer application's status
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDealerStatusBody {
    /// One of PENDING, REVIEWING, ACCEPTED, REJECTED
    pub status: String,
}

/// Public endpoint submitting a dealer application
#[utoipa::path(
    post,
    path = "/dealer",
    request_body = DealerBody,
    responses(
        (status = 201, description = "Application stored", body = DealerSubmitResponse),
        (status = 400, description = "Validation error", body = ApiError)
    ),
    tag = "leads"
)]
pub async fn submit_dealer(
    State(state): State<AppState>,
    Json(body): Json<DealerBody>,
) -> Result<(StatusCode, Json<DealerSubmitResponse>), ApiError> {
    let application = DealerApplicationRepository::new(&state.db)
        .submit(SubmitDealerRequest {
            name: body.name.unwrap_or_default(),
            phone: body.phone.unwrap_or_default(),
            business: body.business,
            city: body.city,
            details: body.details.unwrap_or_default(),
        })
        .await?;

    tracing::info!(application_id = application.id, "Dealer application received");

    Ok((
        StatusCode::CREATED,
        Json(DealerSubmitResponse {
            success: true,
            id: application.id,
        }),
    ))
}

/// Admin endpoint listing dealer applications, newest first
#[utoipa::path(
    get,
    path = "/admin/dealers",
    responses(
        (status = 200, description = "All dealer applications", body = [DealerView]),
        (status = 401, description = "Unauthorized", body = ApiError)
    ),
    tag = "admin-dealers"
)]
pub async fn list_dealers(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<Vec<DealerView>>, ApiError> {
    let applications = DealerApplicationRepository::new(&state.db).list().await?;
    Ok(Json(applications.into_iter().map(Into::into).collect()))
}

/// Admin endpoint updating a dealer application's status
#[utoipa::path(
    put,
    path = "/admin/dealers/{id}",
    params(("id" = i32, Path, description = "Dealer application id")),
    request_body = UpdateDealerStatusBody,
    responses(
        (status = 200, description = "Status updated", body = DealerView),
        (status = 400, description = "Status outside the enum", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Application not found", body = ApiError)
    ),
    tag = "admin-dealers"
)]
pub async fn update_dealer_status(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateDealerStatusBody>,
) -> Result<Json<DealerView>, ApiError> {
    let status = DealerStatus::parse(&body.status).ok_or_else(|| {
        validation_error(
            "Invalid dealer status",
            serde_json::json!({ "status": body.status.clone() }),
        )
    })?;

    let updated = DealerApplicationRepository::new(&state.db)
        .update_status(id, status)
        .await?;

    tracing::info!(
        admin = %session.username,
        dealer_id = id,
        status = %body.status,
        "Dealer status updated"
    );

    Ok(Json(updated.into()))
}
