use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Requested,
    Approved,
    Processing,
    Shipping,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Requested => "요청",
            OrderStatus::Approved => "승인",
            OrderStatus::Processing => "처리중",
            OrderStatus::Shipping => "배송중",
            OrderStatus::Completed => "완료",
            OrderStatus::Canceled => "취소",
        }
    }
}

impl Lifecycle for OrderStatus {
    fn can_transition_to(self, next: Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Requested, Approved)
                | (Approved, Processing)
                | (Processing, Shipping)
                | (Shipping, Completed)
                | (Requested | Approved | Processing, Canceled)
        )
    }

    fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Canceled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub pharmacy_id: i64,
    pub created_at: NaiveDateTime,
    pub total_price: i64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: i64,
    pub subtotal_price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemListResponse {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub subtotal_price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub order_id: i64,
    pub pharmacy_id: i64,
    pub pharmacy_name: String,
    pub created_at: NaiveDateTime,
    pub total_price: i64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub items: Vec<OrderItemListResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetailResponse {
    pub product_id: i64,
    pub product_name: String,
    pub manufacturer: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub subtotal_price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub order_id: i64,
    pub pharmacy_id: i64,
    pub pharmacy_name: String,
    pub created_at: NaiveDateTime,
    pub total_price: i64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub items: Vec<OrderItemDetailResponse>,
}
