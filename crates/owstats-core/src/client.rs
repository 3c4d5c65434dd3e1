//! HTTP transport for career pages and the search endpoint
//!
//! The scraper only needs "GET this URL and tell me the status and body";
//! [`Fetch`] is that seam, and [`OverwatchClient`] is its `reqwest`
//! implementation. Retries and rate limiting are left to the caller.

use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::error::{OwStatsError, Result};
use crate::url::BASE_URL;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Site root every path is resolved against (default: https://playoverwatch.com)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// A received HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
    pub headers: HeaderMap,
}

impl Response {
    /// Response without headers
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Returns the body of a successful response
    ///
    /// # Errors
    /// Maps any non-2xx status through [`OwStatsError::from_status`]
    pub fn into_body(self, url: &str) -> Result<String> {
        if (200..300).contains(&self.status) {
            Ok(self.body)
        } else {
            Err(OwStatsError::from_status(self.status, url))
        }
    }
}

/// Capability to GET a URL
///
/// Implementations return `Ok` for every received response, whatever its
/// status, and `UnknownTransport` with no status when nothing was received.
pub trait Fetch {
    fn get(&self, url: &str) -> impl Future<Output = Result<Response>> + Send;

    /// Site root that request paths are resolved against
    fn base_url(&self) -> &str;
}

/// `reqwest` backed [`Fetch`] implementation
pub struct OverwatchClient {
    client: reqwest::Client,
    base_url: String,
}

impl OverwatchClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Fetch for OverwatchClient {
    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!(%url, "fetching");

        let response = self.client.get(url).send().await.map_err(|e| {
            OwStatsError::UnknownTransport {
                status: None,
                message: e.to_string(),
            }
        })?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        tracing::debug!(%url, status, bytes = body.len(), "fetched");
        Ok(Response {
            status,
            body,
            headers,
        })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
