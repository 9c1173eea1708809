use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItemRequest {
    pub product_id: i64,
    pub reason: String,
    pub quantity: i32,
    pub unit_price: i64,
}

impl ReturnItemRequest {
    pub fn subtotal(&self) -> i64 {
        i64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub pharmacy_id: i64,
    pub items: Vec<ReturnItemRequest>,
}

impl ReturnRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.items.is_empty() {
            return Err(ValidationError::EmptyReturn);
        }
        for item in &self.items {
            let product_id = item.product_id;
            if item.quantity <= 0 {
                return Err(ValidationError::NonPositiveQuantity { product_id });
            }
            if item.reason.trim().is_empty() {
                return Err(ValidationError::MissingReason { product_id });
            }
        }
        Ok(())
    }

    /// Credit the branch expects back once HQ completes the return.
    pub fn total_price(&self) -> i64 {
        self.items.iter().map(ReturnItemRequest::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_is_mandatory() {
        let request = ReturnRequest {
            pharmacy_id: 1,
            items: vec![ReturnItemRequest {
                product_id: 5,
                reason: "  ".into(),
                quantity: 2,
                unit_price: 3000,
            }],
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingReason { product_id: 5 })
        );
        assert_eq!(request.total_price(), 6000);
    }
}
