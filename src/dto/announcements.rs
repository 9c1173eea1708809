use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::AnnouncementType;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementRequest {
    #[serde(rename = "type")]
    pub kind: AnnouncementType,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct AnnouncementQuery {
    pub page: u32,
    pub size: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnnouncementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Default for AnnouncementQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            kind: None,
            keyword: None,
        }
    }
}
