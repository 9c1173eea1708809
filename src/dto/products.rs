use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::ValidationError;
use crate::models::MainCategory;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub product_name: String,
    pub product_code: String,
    pub manufacturer: String,
    pub main_category: MainCategory,
    pub sub_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub unit: String,
    pub unit_price: i64,
    pub is_narcotic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_img_url: Option<String>,
}

impl ProductRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::MissingProductName);
        }
        if self.unit_price < 0 {
            return Err(ValidationError::NegativePrice);
        }
        if !self.main_category.accepts(&self.sub_category) {
            return Err(ValidationError::UnknownSubCategory {
                main_category: self.main_category,
                sub_category: self.sub_category.clone(),
            });
        }
        Ok(())
    }
}

/// Query of the product filter endpoint; pages are zero-based like the backend's.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_category: Option<MainCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            main_category: None,
            sub_category: None,
            keyword: None,
            page: 0,
            size: 10,
        }
    }
}
