use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;

/// Transport used to reach a gas oracle
///
/// Performs a single GET and hands back the raw body. Implementations map
/// their own failures onto `FetchError::Transport`, `FetchError::Timeout` or
/// `FetchError::Provider` (non-success HTTP status).
#[mockall::automock]
#[async_trait]
pub trait OracleTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<String, FetchError>;
}

/// reqwest-backed oracle transport
///
/// The underlying client is shared, so connections to the oracle are pooled
/// across requests.
#[derive(Clone)]
pub struct HttpOracleTransport {
    client: Client,
}

impl HttpOracleTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl OracleTransport for HttpOracleTransport {
    async fn get(&self, url: &Url) -> Result<String, FetchError> {
        debug!("GET {}", url.host_str().unwrap_or("unknown"));

        let response = self.client.get(url.clone()).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Provider(format!("Oracle responded with HTTP {}", status)));
        }

        response.text().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    // Strip the URL so the API key never ends up in logs or responses
    let e = e.without_url();
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else {
        FetchError::Transport(e.to_string())
    }
}
