use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{info, warn};

use crate::clients::LocationProvider;
use crate::domain::IssLocation;
use crate::errors::ClientError;

/// Well-known endpoint reporting the station's current position.
pub const DEFAULT_ISS_URL: &str = "http://api.open-notify.org/iss-now.json";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the ISS current-location service.
///
/// Holds no per-request state, so a single instance can serve any number of
/// concurrent fetches.
pub struct IssClient {
    client: Client,
    url: Url,
}

impl IssClient {
    /// Client pointed at the default endpoint.
    pub fn new() -> Self {
        let url = Url::parse(DEFAULT_ISS_URL).expect("default ISS URL must parse");
        Self::with_url(url)
    }

    /// Client pointed at an explicit endpoint, e.g. a mock server in tests.
    pub fn with_url(url: Url) -> Self {
        Self::with_url_and_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_url_and_timeout(url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("iss-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the station's current position.
    ///
    /// Issues exactly one GET against the configured endpoint, no retries.
    pub async fn fetch_location(&self) -> Result<IssLocation, ClientError> {
        info!("Fetching ISS position from: {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("ISS service returned HTTP {}", status);
            return Err(ClientError::Server { status });
        }

        let body = response.text().await.map_err(ClientError::Transport)?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| ClientError::decode(format!("response body is not JSON: {}", e)))?;

        IssLocation::from_payload(&payload)
    }
}

impl Default for IssClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationProvider for IssClient {
    async fn fetch_location(&self) -> Result<IssLocation, ClientError> {
        IssClient::fetch_location(self).await
    }
}
