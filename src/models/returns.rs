use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnStatus {
    Requested,
    Approved,
    Rejected,
    Processing,
    Completed,
    Canceled,
}

impl ReturnStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReturnStatus::Requested => "요청",
            ReturnStatus::Approved => "승인",
            ReturnStatus::Rejected => "반려",
            ReturnStatus::Processing => "처리중",
            ReturnStatus::Completed => "완료",
            ReturnStatus::Canceled => "취소",
        }
    }
}

impl Lifecycle for ReturnStatus {
    fn can_transition_to(self, next: Self) -> bool {
        use ReturnStatus::*;
        matches!(
            (self, next),
            (Requested, Approved | Rejected | Canceled)
                | (Approved, Processing)
                | (Processing, Completed)
        )
    }

    fn is_terminal(self) -> bool {
        matches!(
            self,
            ReturnStatus::Rejected | ReturnStatus::Completed | ReturnStatus::Canceled
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Return {
    pub return_id: i64,
    pub pharmacy_id: i64,
    pub created_at: NaiveDateTime,
    pub total_price: i64,
    pub status: ReturnStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItem {
    pub return_item_id: i64,
    pub return_id: i64,
    pub product_id: i64,
    pub reason: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub subtotal_price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItemResponse {
    pub product_name: String,
    pub reason: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub subtotal_price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnResponse {
    pub return_id: i64,
    pub pharmacy_id: i64,
    pub pharmacy_name: String,
    pub created_at: NaiveDateTime,
    pub total_price: i64,
    pub status: ReturnStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub items: Vec<ReturnItemResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_return_is_approved_or_rejected() {
        assert!(ReturnStatus::Requested.can_transition_to(ReturnStatus::Approved));
        assert!(ReturnStatus::Requested.can_transition_to(ReturnStatus::Rejected));
        assert!(!ReturnStatus::Requested.can_transition_to(ReturnStatus::Processing));
    }

    #[test]
    fn rejected_return_is_final() {
        assert!(ReturnStatus::Rejected.is_terminal());
        assert!(!ReturnStatus::Rejected.can_transition_to(ReturnStatus::Processing));
        assert!(ReturnStatus::Approved.can_transition_to(ReturnStatus::Processing));
        assert!(ReturnStatus::Processing.can_transition_to(ReturnStatus::Completed));
    }
}
