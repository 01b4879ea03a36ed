//! Shared HTTP client using wreq for browser emulation.

use crate::config::Config;
use crate::error::FetchError;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;
use wreq::Client;
use wreq_util::Emulation;

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const ACCEPT_JSON: &str = "application/json";

/// Thin wrapper around a [`wreq::Client`] shared by every fetcher.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Builds the client with the configured timeout and optional proxy.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetches an HTML page, emulating a desktop browser.
    pub async fn get_html(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", ACCEPT_HTML)
            .header("Accept-Language", "cs-CZ,cs;q=0.9,sk;q=0.8,en;q=0.7")
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        Self::read_body(url, response).await
    }

    /// Fetches a JSON document as text.
    pub async fn get_json(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", ACCEPT_JSON)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        Self::read_body(url, response).await
    }

    async fn read_body(url: &str, response: wreq::Response) -> Result<String, FetchError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        response.text().await.map_err(|source| FetchError::Request { url: url.to_string(), source })
    }
}
