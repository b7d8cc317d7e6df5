//! HTTP client for talking to the reference services

use crate::sources::{SourceRequest, SourceResponse};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT: u64 = 5;

/// Upper bound on any configured timeout.
pub const MAX_TIMEOUT: u64 = 30;

/// HTTP client wrapper shared by all source adapters.
///
/// One client instance lives for the life of the host view; adapters keep no
/// connection state of their own.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a client with a custom timeout, capped at [`MAX_TIMEOUT`].
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let timeout = timeout.min(Duration::from_secs(MAX_TIMEOUT));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("citemark/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Configured per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a source request: exactly one outbound GET, no retries.
    pub async fn execute(&self, request: SourceRequest) -> Result<SourceResponse> {
        debug!("GET {}", request.full_url());

        let response = self
            .client
            .get(&request.url)
            .query(&request.params)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(SourceResponse { status, text })
    }
}
