use serde::Serialize;

use super::{ApiClient, ClientError, Paged};
use crate::{
    dto::orders::{OrderRequest, UpdateOrderStatusRequest},
    models::{Lifecycle, OrderDetailResponse, OrderListResponse, OrderStatus},
};

/// HQ action on an order and the status it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Approve,
    Reject,
    Process,
    Ship,
    Complete,
}

impl OrderAction {
    pub fn target(self) -> OrderStatus {
        match self {
            OrderAction::Approve => OrderStatus::Approved,
            OrderAction::Reject => OrderStatus::Canceled,
            OrderAction::Process => OrderStatus::Processing,
            OrderAction::Ship => OrderStatus::Shipping,
            OrderAction::Complete => OrderStatus::Completed,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BranchOrderQuery {
    pharmacy_id: i64,
    page: u32,
    size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<OrderStatus>,
}

impl ApiClient {
    pub async fn create_order(&self, request: &OrderRequest) -> Result<(), ClientError> {
        if request.items.is_empty() {
            return Err(ClientError::Invalid("주문할 상품을 선택해 주세요.".into()));
        }
        self.ack(self.post("/orders", request)).await
    }

    pub async fn branch_orders(
        &self,
        pharmacy_id: i64,
        page: u32,
        size: u32,
        status: Option<OrderStatus>,
    ) -> Result<Paged<OrderListResponse>, ClientError> {
        let query = BranchOrderQuery {
            pharmacy_id,
            page,
            size,
            status,
        };
        self.page(self.get("/orders/branch/orders").query(&query))
            .await
    }

    pub async fn admin_orders(
        &self,
        page: u32,
        size: u32,
        status: Option<OrderStatus>,
        pharmacy_name: Option<&str>,
    ) -> Result<Paged<OrderListResponse>, ClientError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AdminOrderQuery<'a> {
            page: u32,
            size: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<OrderStatus>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pharmacy_name: Option<&'a str>,
        }
        let query = AdminOrderQuery {
            page,
            size,
            status,
            pharmacy_name,
        };
        self.page(self.get("/orders/admin/orders").query(&query))
            .await
    }

    pub async fn order(&self, order_id: i64) -> Result<OrderDetailResponse, ClientError> {
        self.data(self.get(&format!("/orders/{order_id}"))).await
    }

    /// Applies an HQ action after checking it is legal from `current`.
    /// Illegal moves are refused without contacting the backend.
    pub async fn advance_order(
        &self,
        order_id: i64,
        current: OrderStatus,
        action: OrderAction,
    ) -> Result<OrderStatus, ClientError> {
        let next = action.target();
        if !current.can_transition_to(next) {
            return Err(ClientError::InvalidTransition {
                from: format!("{current:?}"),
                to: format!("{next:?}"),
            });
        }
        let empty = serde_json::json!({});
        let builder = match action {
            OrderAction::Approve => self.post(&format!("/orders/{order_id}/approve"), &empty),
            OrderAction::Reject => self.post(&format!("/orders/{order_id}/reject"), &empty),
            _ => self
                .patch(&format!("/orders/{order_id}"))
                .json(&UpdateOrderStatusRequest { status: next }),
        };
        self.ack(builder).await?;
        Ok(next)
    }

    /// Withdraws an order the branch placed; allowed until it ships.
    pub async fn cancel_order(&self, order_id: i64, current: OrderStatus) -> Result<(), ClientError> {
        if !current.can_transition_to(OrderStatus::Canceled) {
            return Err(ClientError::InvalidTransition {
                from: format!("{current:?}"),
                to: format!("{:?}", OrderStatus::Canceled),
            });
        }
        self.ack(self.delete(&format!("/orders/{order_id}"))).await
    }
}
