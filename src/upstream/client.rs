//! Outbound data fetch.
//!
//! # Responsibilities
//! - One-shot GET of the configured JSON endpoint
//! - Enforce the whole-request timeout
//! - Classify failures (timeout / transport / bad status / bad body)
//!
//! # Design Decisions
//! - No retry policy anywhere; a failed fetch is reported as-is so the
//!   caller can surface it in a failure envelope
//! - The error Display string is what clients see in the `error` field

use std::time::Duration;

use crate::config::UpstreamConfig;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build http client: {0}")]
    Client(reqwest::Error),

    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),

    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("request failed with status code {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),
}

pub struct UpstreamClient {
    client: reqwest::Client,
    url: url::Url,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Client)?;
        let url = url::Url::parse(&config.url)?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    /// Fetch the endpoint once and return its JSON body. Any non-2xx status
    /// is a failure; nothing is retried.
    pub async fn fetch_json(&self) -> Result<serde_json::Value, UpstreamError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| match e {
                e if e.is_timeout() => UpstreamError::Timeout(self.timeout.as_millis() as u64),
                e => UpstreamError::Decode(e),
            })
    }

    fn classify(&self, e: reqwest::Error) -> UpstreamError {
        if e.is_timeout() {
            UpstreamError::Timeout(self.timeout.as_millis() as u64)
        } else {
            UpstreamError::Transport(e)
        }
    }
}
