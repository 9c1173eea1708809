use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ValidationError;
use crate::models::OrderStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: i64,
    pub subtotal_price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub pharmacy_id: i64,
    pub total_price: i64,
    pub items: Vec<OrderItemRequest>,
}

/// A cart line picked on the order screen: product, quantity, unit price.
#[derive(Debug, Clone, Copy)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: i64,
}

impl OrderRequest {
    /// Builds a request with per-line subtotals and the order total filled in.
    pub fn from_lines(pharmacy_id: i64, lines: &[OrderLine]) -> Result<Self, ValidationError> {
        if lines.is_empty() {
            return Err(ValidationError::EmptyOrder);
        }
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            if line.quantity <= 0 {
                return Err(ValidationError::NonPositiveQuantity {
                    product_id: line.product_id,
                });
            }
            items.push(OrderItemRequest {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal_price: i64::from(line.quantity) * line.unit_price,
            });
        }
        let total_price = items.iter().map(|i| i.subtotal_price).sum();
        Ok(Self {
            pharmacy_id,
            total_price,
            items,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_are_computed_from_lines() {
        let request = OrderRequest::from_lines(
            3,
            &[
                OrderLine {
                    product_id: 1,
                    quantity: 2,
                    unit_price: 4500,
                },
                OrderLine {
                    product_id: 2,
                    quantity: 1,
                    unit_price: 12000,
                },
            ],
        )
        .unwrap();
        assert_eq!(request.items[0].subtotal_price, 9000);
        assert_eq!(request.total_price, 21000);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = OrderRequest::from_lines(
            3,
            &[OrderLine {
                product_id: 1,
                quantity: 0,
                unit_price: 4500,
            }],
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveQuantity { product_id: 1 });
        assert_eq!(
            OrderRequest::from_lines(3, &[]).unwrap_err(),
            ValidationError::EmptyOrder
        );
    }
}
