use serde::Serialize;

use super::{ApiClient, ClientError, Paged};
use crate::{
    dto::returns::ReturnRequest,
    models::{Lifecycle, ReturnResponse, ReturnStatus},
};

/// HQ action on a return request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnAction {
    Approve,
    Reject,
    Process,
    Complete,
}

impl ReturnAction {
    pub fn target(self) -> ReturnStatus {
        match self {
            ReturnAction::Approve => ReturnStatus::Approved,
            ReturnAction::Reject => ReturnStatus::Rejected,
            ReturnAction::Process => ReturnStatus::Processing,
            ReturnAction::Complete => ReturnStatus::Completed,
        }
    }

    fn segment(self) -> &'static str {
        match self {
            ReturnAction::Approve => "approve",
            ReturnAction::Reject => "reject",
            ReturnAction::Process => "process",
            ReturnAction::Complete => "complete",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReturnListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pharmacy_id: Option<i64>,
    page: u32,
    size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ReturnStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pharmacy_name: Option<&'a str>,
}

impl ApiClient {
    pub async fn create_return(&self, request: &ReturnRequest) -> Result<(), ClientError> {
        request.validate()?;
        self.ack(self.post("/branch/returns", request)).await
    }

    pub async fn branch_returns(
        &self,
        pharmacy_id: i64,
        page: u32,
        size: u32,
        status: Option<ReturnStatus>,
    ) -> Result<Paged<ReturnResponse>, ClientError> {
        let query = ReturnListQuery {
            pharmacy_id: Some(pharmacy_id),
            page,
            size,
            status,
            pharmacy_name: None,
        };
        self.page(self.get("/branch/returns").query(&query)).await
    }

    pub async fn admin_returns(
        &self,
        page: u32,
        size: u32,
        status: Option<ReturnStatus>,
        pharmacy_name: Option<&str>,
    ) -> Result<Paged<ReturnResponse>, ClientError> {
        let query = ReturnListQuery {
            pharmacy_id: None,
            page,
            size,
            status,
            pharmacy_name,
        };
        self.page(self.get("/admin/returns").query(&query)).await
    }

    pub async fn return_detail(&self, return_id: i64) -> Result<ReturnResponse, ClientError> {
        self.data(self.get(&format!("/admin/returns/{return_id}")))
            .await
    }

    pub async fn advance_return(
        &self,
        return_id: i64,
        current: ReturnStatus,
        action: ReturnAction,
    ) -> Result<ReturnStatus, ClientError> {
        let next = action.target();
        if !current.can_transition_to(next) {
            return Err(ClientError::InvalidTransition {
                from: format!("{current:?}"),
                to: format!("{next:?}"),
            });
        }
        self.ack(self.patch(&format!("/admin/returns/{return_id}/{}", action.segment())))
            .await?;
        Ok(next)
    }
}
