use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    error::AppResult,
    forecast::{ForecastRow, SeriesPoint},
    response::ApiResponse,
    routes::params::{ForecastQuery, SeriesQuery},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_forecast))
        .route("/{product}/series", get(forecast_series))
}

#[utoipa::path(
    get,
    path = "/api/hq/forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast rows matching the keyword", body = ApiResponse<Vec<ForecastRow>>)
    ),
    tag = "Forecast"
)]
pub async fn list_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Json<ApiResponse<Vec<ForecastRow>>> {
    let rows = state.forecast.search(query.keyword.as_deref().unwrap_or_default());
    let total = rows.len() as i64;
    Json(ApiResponse::page("Demand forecast", rows, total))
}

#[utoipa::path(
    get,
    path = "/api/hq/forecast/{product}/series",
    params(
        ("product" = String, Path, description = "Product name"),
        SeriesQuery
    ),
    responses(
        (status = 200, description = "Monthly trend of one product", body = ApiResponse<Vec<SeriesPoint>>),
        (status = 400, description = "Malformed month range", body = ApiResponse<String>)
    ),
    tag = "Forecast"
)]
pub async fn forecast_series(
    State(state): State<AppState>,
    Path(product): Path<String>,
    Query(query): Query<SeriesQuery>,
) -> AppResult<Json<ApiResponse<Vec<SeriesPoint>>>> {
    let range = query.range()?;
    let points = state.forecast.series(&product, range.as_ref());
    Ok(Json(ApiResponse::success("Forecast series", points)))
}
