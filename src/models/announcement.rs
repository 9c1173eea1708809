use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnouncementType {
    Notice,
    Law,
    Epidemic,
    NewProduct,
}

impl AnnouncementType {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnouncementType::Notice => "NOTICE",
            AnnouncementType::Law => "LAW",
            AnnouncementType::Epidemic => "EPIDEMIC",
            AnnouncementType::NewProduct => "NEW_PRODUCT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnnouncementType::Notice => "공지사항",
            AnnouncementType::Law => "법령",
            AnnouncementType::Epidemic => "감염병",
            AnnouncementType::NewProduct => "신제품",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub announcement_id: i64,
    #[serde(rename = "type")]
    pub kind: AnnouncementType,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}
