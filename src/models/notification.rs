use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub is_read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_flag_defaults_to_false() {
        let parsed: Notification = serde_json::from_value(serde_json::json!({
            "id": 4,
            "userId": 2,
            "type": "ORDER",
            "title": "발주 승인",
            "content": "주문 #11 이 승인되었습니다.",
            "createdAt": "2025-06-02T10:30:00"
        }))
        .unwrap();
        assert_eq!(parsed.kind, "ORDER");
        assert!(!parsed.is_read);
    }
}
