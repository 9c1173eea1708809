use thiserror::Error;

use crate::models::MainCategory;

/// A request refused before it is sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("an order needs at least one item")]
    EmptyOrder,

    #[error("a return needs at least one item")]
    EmptyReturn,

    #[error("quantity for product {product_id} must be positive")]
    NonPositiveQuantity { product_id: i64 },

    #[error("a reason is required for product {product_id}")]
    MissingReason { product_id: i64 },

    #[error("product name is required")]
    MissingProductName,

    #[error("unit price must not be negative")]
    NegativePrice,

    #[error("'{sub_category}' is not a subcategory of {}", .main_category.label())]
    UnknownSubCategory {
        main_category: MainCategory,
        sub_category: String,
    },
}
