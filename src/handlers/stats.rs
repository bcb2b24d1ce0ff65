//! # Dashboard Stats Handler

use axum::{extract::State, response::Json};

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::repositories::StatsRepository;
use crate::repositories::stats::DashboardStats;
use crate::server::AppState;

/// Admin endpoint returning the dashboard counts
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses(
        (status = 200, description = "Aggregate counts", body = DashboardStats),
        (status = 401, description = "Unauthorized", body = ApiError)
    ),
    tag = "admin-stats"
)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<DashboardStats>, ApiError> {
    let stats = StatsRepository::new(&state.db).collect().await?;
    Ok(Json(stats))
}
