//! Landing dashboards. Each panel is fetched from the backend on its own and
//! reports its own failure, so one broken panel leaves the others intact.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::{
    client::{ClientError, Paged},
    dto::announcements::AnnouncementQuery,
    error::AppResult,
    middleware::auth::BearerToken,
    models::{Announcement, OrderListResponse},
    response::ApiResponse,
    routes::params::BranchDashboardQuery,
    state::AppState,
};

const LATEST: u32 = 5;

/// One dashboard panel: either its items or the message to show instead.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section<T> {
    pub items: Option<Vec<T>>,
    pub total_elements: Option<i64>,
    pub error: Option<String>,
}

impl<T> Section<T> {
    fn from_result(panel: &str, result: Result<Paged<T>, ClientError>) -> Self {
        match result {
            Ok(page) => Self {
                items: Some(page.items),
                total_elements: Some(page.total_elements),
                error: None,
            },
            Err(err) => {
                warn!(panel, error = %err, "dashboard panel unavailable");
                Self {
                    items: None,
                    total_elements: None,
                    error: Some(err.user_message()),
                }
            }
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub announcements: Section<Announcement>,
    pub orders: Section<OrderListResponse>,
}

pub fn hq_router() -> Router<AppState> {
    Router::new().route("/", get(hq_dashboard))
}

pub fn branch_router() -> Router<AppState> {
    Router::new().route("/", get(branch_dashboard))
}

pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(public_announcements))
}

fn latest_announcements() -> AnnouncementQuery {
    AnnouncementQuery {
        size: LATEST,
        ..Default::default()
    }
}

#[utoipa::path(
    get,
    path = "/api/hq/dashboard",
    responses(
        (status = 200, description = "Latest announcements and incoming orders", body = ApiResponse<Dashboard>)
    ),
    tag = "Dashboard"
)]
pub async fn hq_dashboard(
    State(state): State<AppState>,
    token: BearerToken,
) -> Json<ApiResponse<Dashboard>> {
    let client = token.apply(&state.client);
    let query = latest_announcements();
    let (announcements, orders) = tokio::join!(
        client.announcements(&query),
        client.admin_orders(0, LATEST, None, None),
    );

    let dashboard = Dashboard {
        announcements: Section::from_result("announcements", announcements),
        orders: Section::from_result("orders", orders),
    };
    Json(ApiResponse::success("HQ dashboard", dashboard))
}

#[utoipa::path(
    get,
    path = "/api/branch/dashboard",
    params(BranchDashboardQuery),
    responses(
        (status = 200, description = "Latest announcements and the branch's recent orders", body = ApiResponse<Dashboard>),
        (status = 400, description = "Missing or malformed pharmacyId", body = ApiResponse<String>)
    ),
    tag = "Dashboard"
)]
pub async fn branch_dashboard(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<BranchDashboardQuery>,
) -> AppResult<Json<ApiResponse<Dashboard>>> {
    let pharmacy_id = query.pharmacy_id()?;
    let client = token.apply(&state.client);
    let announcement_query = latest_announcements();
    let (announcements, orders) = tokio::join!(
        client.announcements(&announcement_query),
        client.branch_orders(pharmacy_id, 0, LATEST, None),
    );

    let dashboard = Dashboard {
        announcements: Section::from_result("announcements", announcements),
        orders: Section::from_result("orders", orders),
    };
    Ok(Json(ApiResponse::success("Branch dashboard", dashboard)))
}

#[utoipa::path(
    get,
    path = "/api/public/announcements",
    params(AnnouncementQuery),
    responses(
        (status = 200, description = "Announcement list", body = ApiResponse<Vec<Announcement>>),
        (status = 502, description = "Backend unreachable", body = ApiResponse<String>)
    ),
    tag = "Public"
)]
pub async fn public_announcements(
    State(state): State<AppState>,
    Query(query): Query<AnnouncementQuery>,
) -> AppResult<Json<ApiResponse<Vec<Announcement>>>> {
    let page = state.client.without_token().announcements(&query).await?;
    Ok(Json(ApiResponse::page(
        "Announcements",
        page.items,
        page.total_elements,
    )))
}
