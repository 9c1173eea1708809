use super::{ApiClient, ClientError};
use crate::{
    dto::chat::ChatbotRequest,
    models::{ChatType, Chatbot, ChatbotResponse},
};

impl ApiClient {
    /// Forwards a chatbot question to the FAQ or QnA assistant.
    pub async fn ask_chatbot(&self, request: &ChatbotRequest) -> Result<ChatbotResponse, ClientError> {
        if request.query.trim().is_empty() {
            return Err(ClientError::Invalid("질문을 입력해 주세요.".into()));
        }
        let path = match request.chat_type {
            ChatType::Faq => "/chat/faq",
            ChatType::Qna => "/chat/qna",
        };
        self.data(self.post(path, request)).await
    }

    pub async fn chat_history(&self, user_id: i64) -> Result<Vec<Chatbot>, ClientError> {
        self.data(self.get(&format!("/chat/history/{user_id}"))).await
    }
}
