//! HTTP client for mbenzin.cz station pages.

use super::parser::{self, StationQuote};
use crate::error::FetchError;
use crate::http::HttpClient;
use async_trait::async_trait;
use tracing::info;

/// Trait for station price lookups - enables mocking for tests.
#[async_trait]
pub trait StationSource: Send + Sync {
    /// Fetches the current price and last update for the station at `url`.
    async fn station_quote(&self, url: &str) -> Result<StationQuote, FetchError>;
}

/// mbenzin.cz scraper.
pub struct MbenzinClient {
    http: HttpClient,
}

impl MbenzinClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl StationSource for MbenzinClient {
    async fn station_quote(&self, url: &str) -> Result<StationQuote, FetchError> {
        info!("Fetching station page: {}", url);
        let html = self.http.get_html(url).await?;
        parser::parse_station_page(&html)
    }
}
