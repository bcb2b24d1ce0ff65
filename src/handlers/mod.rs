//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Aquafeed API.

use crate::models::ServiceInfo;
use axum::response::Json;

pub mod auth;
pub mod categories;
pub mod dealers;
pub mod orders;
pub mod pincodes;
pub mod products;
pub mod stats;
pub mod upload;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}
