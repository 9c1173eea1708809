use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope used both by the backend and by the portal's own endpoints:
/// `{ success, data, message, totalElements }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, alias = "error", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<i64>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            total_elements: None,
        }
    }

    pub fn page(message: impl Into<String>, data: T, total_elements: i64) -> Self {
        Self {
            total_elements: Some(total_elements),
            ..Self::success(message, data)
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            total_elements: None,
        }
    }
}
