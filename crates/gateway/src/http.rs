//! REST client for the hospital backend API.
//!
//! [`HttpGateway`] implements [`Gateway`] over HTTP. The bearer credential
//! is injected here on every request; callers upstream never see it.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use caredesk_core::error::FetchError;
use caredesk_core::gateway::Gateway;
use caredesk_core::models::{AdminIdentity, Appointment, FeedbackRecord, StatsRecord};

/// Default per-request timeout. Expiry is a transient failure, handled by
/// the caller's keep-last-value policy.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`HttpGateway`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base HTTP URL of the backend, e.g. `https://api.hospital.example`.
    pub base_url: String,
    /// Bearer token sent in the `Authorization` header of every request.
    pub api_token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Create a config with the default timeout.
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Authenticated HTTP client for one backend instance.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

/// Response body of `GET /messages/unread-count`.
#[derive(Debug, Deserialize)]
struct UnreadCount {
    count: i64,
}

impl HttpGateway {
    /// Build a gateway from connection settings.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed
    /// (e.g. no TLS backend available on the host).
    pub fn new(config: GatewayConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {path}`, decoding a 2xx JSON body into `T`.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(map_request_error)?;

        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or [`FetchError::Api`] carrying the status and
    /// body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<body not readable>".to_string());
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode the JSON body of a 2xx response into `T`.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let response = Self::ensure_success(response).await?;
        response.json::<T>().await.map_err(map_request_error)
    }

    /// Require a success status code, ignoring the body.
    async fn check_status(response: reqwest::Response) -> Result<(), FetchError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_identity(&self) -> Result<AdminIdentity, FetchError> {
        self.get_json("/users/me").await
    }

    async fn fetch_stats(&self) -> Result<StatsRecord, FetchError> {
        self.get_json("/stats").await
    }

    async fn fetch_unread_messages(&self) -> Result<i64, FetchError> {
        let body: UnreadCount = self.get_json("/messages/unread-count").await?;
        Ok(body.count)
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, FetchError> {
        self.get_json("/feedback").await
    }

    async fn mark_all_feedback_read(&self) -> Result<(), FetchError> {
        let response = self
            .client
            .patch(self.url("/feedback/mark-as-read"))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(map_request_error)?;

        Self::check_status(response).await
    }

    async fn delete_feedback(&self, id: &str) -> Result<(), FetchError> {
        let response = self
            .client
            .delete(self.url(&format!("/feedback/{id}")))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(map_request_error)?;

        Self::check_status(response).await
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, FetchError> {
        self.get_json("/appointments").await
    }
}

/// Classify a [`reqwest::Error`] into the gateway failure taxonomy.
fn map_request_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_decode() {
        FetchError::decode(error)
    } else {
        FetchError::transport(error)
    }
}
