use thiserror::Error;

use crate::dto::ValidationError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend answered {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("response carried no data")]
    MissingData,

    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("invalid request: {0}")]
    Invalid(String),
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Invalid(err.to_string())
    }
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message fit to show on screen: the backend's own wording when it sent
    /// one, otherwise a fixed sentence for the kind of failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Api { status: 401, .. } => "로그인이 필요합니다.".to_string(),
            ClientError::Api { status: 403, .. } => "권한이 없습니다.".to_string(),
            ClientError::Api { status: 404, .. } => "요청한 정보를 찾을 수 없습니다.".to_string(),
            ClientError::Api { .. } => "요청을 처리하지 못했습니다. 잠시 후 다시 시도해 주세요.".to_string(),
            ClientError::Transport(_) => "서버에 연결할 수 없습니다.".to_string(),
            ClientError::Decode(_) | ClientError::MissingData => {
                "서버 응답을 처리하지 못했습니다.".to_string()
            }
            ClientError::InvalidTransition { .. } => "현재 상태에서는 처리할 수 없습니다.".to_string(),
            ClientError::Invalid(reason) => reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = ClientError::Api {
            status: 401,
            message: Some("비밀번호가 일치하지 않습니다.".into()),
        };
        assert_eq!(err.user_message(), "비밀번호가 일치하지 않습니다.");

        let err = ClientError::Api {
            status: 401,
            message: None,
        };
        assert_eq!(err.user_message(), "로그인이 필요합니다.");
        assert_eq!(err.status(), Some(401));
    }
}
