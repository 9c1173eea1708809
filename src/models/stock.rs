use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    In,
    Out,
    ReturnOut,
    ReturnIn,
}

impl TransactionType {
    /// Sign applied to the quantity when the transaction is posted to a stock level.
    pub fn sign(self) -> i32 {
        match self {
            TransactionType::In | TransactionType::ReturnIn => 1,
            TransactionType::Out | TransactionType::ReturnOut => -1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyStock {
    pub pharmacy_stock_id: i64,
    pub pharmacy_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    #[serde(default)]
    pub last_inbounded_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_outbound_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockTransaction {
    pub transaction_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    #[serde(rename = "transactionType", alias = "type")]
    pub kind: TransactionType,
    pub transaction_date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_id: Option<i64>,
}

/// Row of the branch stock screen.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub product_name: String,
    pub main_category: String,
    pub sub_category: String,
    pub quantity: i32,
    #[serde(default)]
    pub last_inbound_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_outbound_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Net quantity change of a transaction history.
pub fn net_change(transactions: &[StockTransaction]) -> i64 {
    transactions
        .iter()
        .map(|t| i64::from(t.kind.sign()) * i64::from(t.quantity))
        .sum()
}
