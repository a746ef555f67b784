//! Gateway client for the booking backend's REST API.
//!
//! ARCHITECTURE
//! ============
//! One HTTP call per operation against a fixed base URL. Every call carries
//! the session's headers (login carries only the content type), reads the
//! body as text whatever the status, and then either normalizes a failure
//! envelope or decodes the success body into a typed record.
//!
//! Reads and writes share that contract, so a failing `GET` is reported the
//! same way as a failing `POST`.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError::Rejected` displays exactly the normalized backend message.
//! There are no retries and no caching; a timeout applies only when one is
//! configured.

pub mod auth;
pub mod bookings;
pub mod envelope;
pub mod tours;
pub mod types;
pub mod users;

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::session::{SessionError, SessionStore, json_headers};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response to {operation}: {source}")]
    Decode { operation: &'static str, source: serde_json::Error },
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status of a rejected call.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend refused the session's credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Name and fallback failure message of one backend operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    pub name: &'static str,
    pub fallback: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Credentials {
    Session,
    Anonymous,
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_url.clone(), session })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn headers(&self, credentials: Credentials) -> Result<HeaderMap, ApiError> {
        match credentials {
            Credentials::Session => Ok(self.session.auth_headers()?),
            Credentials::Anonymous => Ok(json_headers()),
        }
    }

    /// Issue one call and decode the success body into `T`.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        credentials: Credentials,
        endpoint: Endpoint,
    ) -> Result<T, ApiError> {
        tracing::debug!(%method, path, operation = endpoint.name, "api request");

        let mut request = self.http.request(method, self.url(path)).headers(self.headers(credentials)?);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = envelope::failure_message(&text, endpoint.fallback);
            tracing::warn!(status = status.as_u16(), path, operation = endpoint.name, %message, "api call rejected");
            return Err(ApiError::Rejected { status: status.as_u16(), message });
        }

        decode(endpoint.name, &text)
    }
}

pub(crate) fn encode(body: &impl Serialize) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(ApiError::Encode)
}

/// Decode a success body. An empty body decodes as JSON `null`.
pub(crate) fn decode<T: DeserializeOwned>(operation: &'static str, text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|source| ApiError::Decode { operation, source })
}
