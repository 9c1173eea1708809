use chrono::NaiveDate;
use serde::Serialize;

use super::{ApiClient, ClientError, Paged};
use crate::models::{MainCategory, StockSummary, StockTransaction};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummaryQuery {
    pub pharmacy_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_category: Option<MainCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHistoryQuery {
    pub pharmacy_id: i64,
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub page: u32,
    pub size: u32,
}

impl ApiClient {
    pub async fn stock_summary(
        &self,
        query: &StockSummaryQuery,
    ) -> Result<Paged<StockSummary>, ClientError> {
        self.page(self.get("/stocks/summary").query(query)).await
    }

    pub async fn stock_history(
        &self,
        query: &StockHistoryQuery,
    ) -> Result<Paged<StockTransaction>, ClientError> {
        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if start > end {
                return Err(ClientError::Invalid(format!(
                    "start date {start} is after end date {end}"
                )));
            }
        }
        self.page(self.get("/stocks/history").query(query)).await
    }
}
