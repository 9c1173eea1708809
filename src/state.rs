use std::sync::Arc;

use crate::{
    client::ApiClient,
    forecast::{ForecastBook, fixtures::forecast_book},
    monitoring::{BranchSnapshot, fixtures::branch_snapshots},
};

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub snapshots: Arc<Vec<BranchSnapshot>>,
    pub forecast: Arc<ForecastBook>,
}

impl AppState {
    pub fn new(client: ApiClient, snapshots: Vec<BranchSnapshot>, forecast: ForecastBook) -> Self {
        Self {
            client,
            snapshots: Arc::new(snapshots),
            forecast: Arc::new(forecast),
        }
    }

    /// State backed by the bundled dashboard samples.
    pub fn with_samples(client: ApiClient) -> Self {
        Self::new(client, branch_snapshots(), forecast_book())
    }
}
