use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    monitoring::{BranchDetail, MonitoringFilter, MonitoringReport, filter::Region, fixtures},
    response::ApiResponse,
    routes::params::MonitoringQuery,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(monitoring_report))
        .route("/regions", get(list_regions))
        .route("/{key}", get(branch_detail))
}

#[utoipa::path(
    get,
    path = "/api/hq/monitoring",
    params(MonitoringQuery),
    responses(
        (status = 200, description = "Filtered branch rows with chart data", body = ApiResponse<MonitoringReport>),
        (status = 400, description = "Malformed month, region or status", body = ApiResponse<String>)
    ),
    tag = "Monitoring"
)]
pub async fn monitoring_report(
    State(state): State<AppState>,
    Query(query): Query<MonitoringQuery>,
) -> AppResult<Json<ApiResponse<MonitoringReport>>> {
    let filter = MonitoringFilter::try_from(query)?;
    let report = MonitoringReport::build(&state.snapshots, &filter);
    debug!(rows = report.rows.len(), ?filter, "monitoring report built");

    let total = report.rows.len() as i64;
    Ok(Json(ApiResponse::page("Stock monitoring", report, total)))
}

#[utoipa::path(
    get,
    path = "/api/hq/monitoring/regions",
    responses(
        (status = 200, description = "Region tree", body = ApiResponse<Vec<Region>>)
    ),
    tag = "Monitoring"
)]
pub async fn list_regions() -> Json<ApiResponse<Vec<Region>>> {
    Json(ApiResponse::success("Regions", fixtures::regions()))
}

#[utoipa::path(
    get,
    path = "/api/hq/monitoring/{key}",
    params(
        ("key" = String, Path, description = "Branch record key")
    ),
    responses(
        (status = 200, description = "Per-product stock of one branch", body = ApiResponse<BranchDetail>),
        (status = 404, description = "Unknown record", body = ApiResponse<String>)
    ),
    tag = "Monitoring"
)]
pub async fn branch_detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ApiResponse<BranchDetail>>> {
    let snapshot = state
        .snapshots
        .iter()
        .find(|s| s.key == key)
        .ok_or(AppError::NotFound)?;

    Ok(Json(ApiResponse::success("Branch stock detail", snapshot.detail())))
}
