use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ChatMessage, ChatType};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotRequest {
    pub user_id: i64,
    pub chat_type: ChatType,
    pub query: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}
