//! Configured HTTP client for the head-office REST backend.
//!
//! Every request goes under the configured base URL (a leading `/` on a path
//! does not escape it), carries the bearer token when one is set, and has its
//! `{ success, data, message, totalElements }` envelope unwrapped.

use axum::body::Bytes;
use reqwest::{Method, RequestBuilder, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{config::ClientConfig, response::ApiResponse};

mod announcements;
mod approvals;
mod auth;
mod chat;
pub mod error;
mod orders;
mod products;
mod returns;
mod stocks;

pub use approvals::{PharmacyAction, PointAction};
pub use error::ClientError;
pub use orders::OrderAction;
pub use returns::ReturnAction;
pub use stocks::{StockHistoryQuery, StockSummaryQuery};

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Copy of this client that sends `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn without_token(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path`, which is always taken relative to the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!(%method, %url, authorized = self.token.is_some(), "backend request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Sends the request and returns the body of a 2xx answer. Other statuses
    /// become `ClientError::Api` with the envelope message when there is one.
    async fn body(&self, builder: RequestBuilder) -> Result<(u16, Bytes), ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .filter(|m| !m.is_empty());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok((status.as_u16(), body))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let (status, body) = self.body(builder).await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        if !envelope.success {
            return Err(ClientError::Api {
                status,
                message: envelope.message.filter(|m| !m.is_empty()),
            });
        }
        Ok(envelope)
    }

    async fn data<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        self.send::<T>(builder)
            .await?
            .data
            .ok_or(ClientError::MissingData)
    }

    async fn page<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Paged<T>, ClientError> {
        let envelope = self.send::<Vec<T>>(builder).await?;
        let items = envelope.data.unwrap_or_default();
        let total_elements = envelope
            .total_elements
            .unwrap_or_else(|| items.len() as i64);
        Ok(Paged {
            items,
            total_elements,
        })
    }

    /// List endpoint that answers with a bare JSON array instead of the envelope.
    async fn bare_list<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Vec<T>, ClientError> {
        let (_, body) = self.body(builder).await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Endpoint that answers a plain-text confirmation; only the status counts.
    async fn confirm(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        self.body(builder).await.map(|_| ())
    }

    /// Sends a request whose envelope carries no data the caller needs.
    async fn ack(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        self.send::<serde_json::Value>(builder).await.map(|_| ())
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        self.request(Method::POST, path).json(body)
    }

    pub(crate) fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        self.request(Method::PUT, path).json(body)
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }
}
