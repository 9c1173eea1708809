use axum::{extract::FromRequestParts, http::header};

use crate::{client::ApiClient, error::AppError};

/// Bearer token the caller sent, forwarded as-is to the backend. The portal
/// never validates it; the backend decides what the token may see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn apply(&self, client: &ApiClient) -> ApiClient {
        match &self.0 {
            Some(token) => client.with_token(token.clone()),
            None => client.without_token(),
        }
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(BearerToken(None));
        };

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Authorization header".into()))?;

        bearer(auth_str)
            .map(BearerToken)
            .ok_or_else(|| AppError::BadRequest("Invalid Authorization scheme".into()))
    }
}

// Auth schemes are case-insensitive. `Some(None)` is a bearer header with no token.
fn bearer(value: &str) -> Option<Option<String>> {
    let value = value.trim_start();
    let (scheme, token) = value.split_once(char::is_whitespace).unwrap_or((value, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    Some((!token.is_empty()).then(|| token.to_string()))
}
