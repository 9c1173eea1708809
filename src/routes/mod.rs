use axum::Router;

use crate::state::AppState;

pub mod dashboard;
pub mod doc;
pub mod forecast;
pub mod health;
pub mod monitoring;
pub mod params;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    let hq = Router::new()
        .nest("/monitoring", monitoring::router())
        .nest("/forecast", forecast::router())
        .nest("/dashboard", dashboard::hq_router());

    let branch = Router::new().nest("/dashboard", dashboard::branch_router());

    let public = Router::new().nest("/announcements", dashboard::public_router());

    Router::new()
        .nest("/hq", hq)
        .nest("/branch", branch)
        .nest("/public", public)
}
