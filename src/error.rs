use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    client::ClientError,
    monitoring::{UnknownStatus, filter::EmptyRegion},
    period::RangeError,
    response::ApiResponse,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Backend request failed")]
    Upstream(#[from] ClientError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<RangeError> for AppError {
    fn from(err: RangeError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<UnknownStatus> for AppError {
    fn from(err: UnknownStatus) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<EmptyRegion> for AppError {
    fn from(err: EmptyRegion) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Upstream(err) => {
                tracing::warn!(error = %err, "backend request failed");
                let status = match err {
                    ClientError::Invalid(_) => StatusCode::BAD_REQUEST,
                    ClientError::InvalidTransition { .. } => StatusCode::CONFLICT,
                    _ => err
                        .status()
                        .and_then(|s| StatusCode::from_u16(s).ok())
                        .filter(|s| s.is_client_error())
                        .unwrap_or(StatusCode::BAD_GATEWAY),
                };
                (status, err.user_message())
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = ApiResponse::<()>::failure(message);
        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
