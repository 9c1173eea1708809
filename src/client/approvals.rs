use super::{ApiClient, ClientError};
use crate::{
    dto::points::PointRequest,
    models::{Lifecycle, Pharmacy, PharmacyStatus, PointStatus},
};

/// HQ decision on a branch registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PharmacyAction {
    Approve,
    Reject,
}

impl PharmacyAction {
    pub fn target(self) -> PharmacyStatus {
        match self {
            PharmacyAction::Approve => PharmacyStatus::Active,
            PharmacyAction::Reject => PharmacyStatus::Rejected,
        }
    }

    fn segment(self) -> &'static str {
        match self {
            PharmacyAction::Approve => "approve",
            PharmacyAction::Reject => "reject",
        }
    }
}

/// HQ decision on a balance top-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointAction {
    Approve,
    Reject,
}

impl PointAction {
    pub fn target(self) -> PointStatus {
        match self {
            PointAction::Approve => PointStatus::Approved,
            PointAction::Reject => PointStatus::Rejected,
        }
    }

    fn segment(self) -> &'static str {
        match self {
            PointAction::Approve => "approve",
            PointAction::Reject => "reject",
        }
    }
}

fn check<S: Lifecycle>(current: S, next: S) -> Result<S, ClientError> {
    if current.can_transition_to(next) {
        Ok(next)
    } else {
        Err(ClientError::InvalidTransition {
            from: format!("{current:?}"),
            to: format!("{next:?}"),
        })
    }
}

impl ApiClient {
    /// Branch registrations waiting for an HQ decision.
    pub async fn pending_pharmacies(&self) -> Result<Vec<Pharmacy>, ClientError> {
        self.bare_list(self.get("/admin/pharmacies/pending")).await
    }

    /// Approves or rejects a branch registration. Only pending branches can be decided.
    pub async fn advance_pharmacy(
        &self,
        pharmacy_id: i64,
        current: PharmacyStatus,
        action: PharmacyAction,
    ) -> Result<PharmacyStatus, ClientError> {
        let next = check(current, action.target())?;
        let path = format!("/admin/pharmacies/{pharmacy_id}/{}", action.segment());
        self.ack(self.post(&path, &serde_json::json!({}))).await?;
        Ok(next)
    }

    pub async fn request_points(&self, request: &PointRequest) -> Result<(), ClientError> {
        if request.amount <= 0 {
            return Err(ClientError::Invalid("충전 금액은 0보다 커야 합니다.".into()));
        }
        self.confirm(self.post("/points/request", request)).await
    }

    /// Approves or rejects a top-up request still awaiting a decision.
    pub async fn advance_points(
        &self,
        point_id: i64,
        current: PointStatus,
        action: PointAction,
    ) -> Result<PointStatus, ClientError> {
        let next = check(current, action.target())?;
        let path = format!("/points/{}/{point_id}", action.segment());
        self.confirm(self.post(&path, &serde_json::json!({}))).await?;
        Ok(next)
    }
}
