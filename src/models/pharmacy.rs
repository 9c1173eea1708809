use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PharmacyStatus {
    Pending,
    #[serde(alias = "APPROVED")]
    Active,
    Rejected,
}

impl Lifecycle for PharmacyStatus {
    fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (PharmacyStatus::Pending, PharmacyStatus::Active | PharmacyStatus::Rejected)
        )
    }

    fn is_terminal(self) -> bool {
        !matches!(self, PharmacyStatus::Pending)
    }
}

/// A branch pharmacy as registered with HQ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    pub pharmacy_id: i64,
    pub user_id: i64,
    pub pharmacy_name: String,
    pub biz_reg_no: String,
    pub representative_name: String,
    #[serde(default)]
    pub postcode: String,
    pub address: String,
    #[serde(default)]
    pub detail_address: String,
    #[serde(default)]
    pub contact: String,
    pub status: PharmacyStatus,
}
