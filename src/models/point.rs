use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointStatus {
    Requested,
    Approved,
    Rejected,
}

impl Lifecycle for PointStatus {
    fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (PointStatus::Requested, PointStatus::Approved | PointStatus::Rejected)
        )
    }

    fn is_terminal(self) -> bool {
        !matches!(self, PointStatus::Requested)
    }
}

/// A branch balance top-up request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub point_id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub status: PointStatus,
    pub requested_at: NaiveDateTime,
}
