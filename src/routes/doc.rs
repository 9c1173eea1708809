use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    forecast::{ForecastRow, SeriesKind, SeriesPoint},
    models::{Announcement, AnnouncementType, OrderListResponse, OrderStatus},
    monitoring::{
        BranchDetail, BranchOrders, MonitoringReport, ProductTotals, StatusCount, StockStatus,
        Totals, filter::Region,
    },
    response::ApiResponse,
    routes::{dashboard, forecast, health, monitoring, params},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        monitoring::monitoring_report,
        monitoring::list_regions,
        monitoring::branch_detail,
        forecast::list_forecast,
        forecast::forecast_series,
        dashboard::hq_dashboard,
        dashboard::branch_dashboard,
        dashboard::public_announcements
    ),
    components(
        schemas(
            StockStatus,
            MonitoringReport,
            BranchDetail,
            BranchOrders,
            StatusCount,
            ProductTotals,
            Totals,
            Region,
            ForecastRow,
            SeriesKind,
            SeriesPoint,
            Announcement,
            AnnouncementType,
            OrderListResponse,
            OrderStatus,
            dashboard::Dashboard,
            params::MonitoringQuery,
            params::ForecastQuery,
            params::SeriesQuery,
            ApiResponse<MonitoringReport>,
            ApiResponse<BranchDetail>,
            ApiResponse<dashboard::Dashboard>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Monitoring", description = "Branch stock monitoring"),
        (name = "Forecast", description = "Demand forecast"),
        (name = "Dashboard", description = "HQ and branch landing dashboards"),
        (name = "Public", description = "Endpoints open to signed-out visitors"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
