//! HTTP client for the home station page.

use super::parser;
use crate::error::FetchError;
use crate::http::HttpClient;
use async_trait::async_trait;
use tracing::info;

/// Trait for the home reference price - enables mocking for tests.
#[async_trait]
pub trait HomePriceSource: Send + Sync {
    /// Returns the home price in the base currency per liter.
    async fn home_price(&self) -> Result<f64, FetchError>;
}

/// dalioil.sk scraper.
pub struct DalioilClient {
    http: HttpClient,
    url: String,
}

impl DalioilClient {
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }
}

#[async_trait]
impl HomePriceSource for DalioilClient {
    async fn home_price(&self) -> Result<f64, FetchError> {
        info!("Fetching home price: {}", self.url);
        let html = self.http.get_html(&self.url).await?;
        parser::parse_home_price(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(url: String) -> DalioilClient {
        DalioilClient::new(HttpClient::new(&Config::default()).unwrap(), url)
    }

    #[tokio::test]
    async fn test_home_price_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dubnica-nad-vahom/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<figcaption class="elementor-image-carousel-caption">1,459 €</figcaption>"#,
            ))
            .mount(&mock_server)
            .await;

        let client = make_client(format!("{}/dubnica-nad-vahom/", mock_server.uri()));
        let price = client.home_price().await;

        assert_eq!(tokio_test::assert_ok!(price), 1.459);
    }

    #[tokio::test]
    async fn test_home_price_missing_caption() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let client = make_client(format!("{}/dubnica-nad-vahom/", mock_server.uri()));
        let err = client.home_price().await.unwrap_err();

        assert!(matches!(err, FetchError::MissingElement { .. }));
    }

    #[tokio::test]
    async fn test_home_price_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = make_client(format!("{}/dubnica-nad-vahom/", mock_server.uri()));
        let err = client.home_price().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }
}
