//! HTTP client for the Frankfurter API.

use super::models::{ExchangeRate, LatestRates};
use crate::config::Config;
use crate::error::FetchError;
use crate::http::HttpClient;
use async_trait::async_trait;
use tracing::info;

/// Trait for exchange rate lookups - enables mocking for tests.
#[async_trait]
pub trait ExchangeRateSource: Send + Sync {
    /// Returns the fee-adjusted rate from the base to the target currency.
    async fn exchange_rate(&self) -> Result<ExchangeRate, FetchError>;
}

/// Frankfurter API client.
pub struct FrankfurterClient {
    http: HttpClient,
    base_url: String,
    from: String,
    to: String,
    fee_coefficient: f64,
}

impl FrankfurterClient {
    /// Creates a client for the currency pair and fee in `config`.
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self {
            http,
            base_url: config.exchange_api_url.trim_end_matches('/').to_string(),
            from: config.base_currency.clone(),
            to: config.target_currency.clone(),
            fee_coefficient: config.fee_coefficient,
        }
    }

    fn latest_url(&self) -> String {
        format!(
            "{}/latest?from={}&to={}",
            self.base_url,
            urlencoding::encode(&self.from),
            urlencoding::encode(&self.to)
        )
    }
}

#[async_trait]
impl ExchangeRateSource for FrankfurterClient {
    async fn exchange_rate(&self) -> Result<ExchangeRate, FetchError> {
        info!("Fetching {} -> {} exchange rate", self.from, self.to);

        let body = self.http.get_json(&self.latest_url()).await?;
        let latest: LatestRates = serde_json::from_str(&body)?;
        let market = latest.rate(&self.to)?;

        let mut rate = ExchangeRate::with_fee(&self.from, &self.to, market, self.fee_coefficient);
        if !rate.adjusted.is_finite() || rate.adjusted <= 0.0 {
            return Err(FetchError::InvalidRate { currency: self.to.clone(), rate: rate.adjusted });
        }
        rate.date = latest.date;

        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(uri: String) -> FrankfurterClient {
        let config = Config { exchange_api_url: uri, ..Config::default() };
        FrankfurterClient::new(HttpClient::new(&config).unwrap(), &config)
    }

    #[tokio::test]
    async fn test_exchange_rate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .and(query_param("from", "EUR"))
            .and(query_param("to", "CZK"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"amount":1.0,"base":"EUR","date":"2024-05-17","rates":{"CZK":25.0}}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = make_client(mock_server.uri());
        let rate = client.exchange_rate().await.unwrap();

        assert_eq!(rate.base, "EUR");
        assert_eq!(rate.target, "CZK");
        assert_eq!(rate.market, 25.0);
        assert!((rate.adjusted - 25.0 * 0.9952).abs() < 1e-9);
        assert_eq!(rate.date.as_deref(), Some("2024-05-17"));
    }

    #[tokio::test]
    async fn test_exchange_rate_missing_currency() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"amount":1.0,"base":"EUR","rates":{"USD":1.08}}"#),
            )
            .mount(&mock_server)
            .await;

        let client = make_client(mock_server.uri());
        let err = client.exchange_rate().await.unwrap_err();

        assert!(matches!(err, FetchError::MissingRate { .. }));
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[tokio::test]
    async fn test_exchange_rate_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = make_client(mock_server.uri());
        let err = client.exchange_rate().await.unwrap_err();

        assert!(matches!(err, FetchError::Json(_)));
    }

    #[tokio::test]
    async fn test_exchange_rate_zero_rate() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"rates":{"CZK":0.0}}"#))
            .mount(&mock_server)
            .await;

        let client = make_client(mock_server.uri());
        let err = client.exchange_rate().await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidRate { .. }));
    }

    #[tokio::test]
    async fn test_exchange_rate_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = make_client(mock_server.uri());
        let result = client.exchange_rate().await;

        tokio_test::assert_err!(&result);
        assert!(result.unwrap_err().to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_latest_url_trims_trailing_slash() {
        let config = Config {
            exchange_api_url: "https://api.frankfurter.app/".to_string(),
            ..Config::default()
        };
        let client = FrankfurterClient::new(HttpClient::new(&config).unwrap(), &config);
        assert_eq!(client.latest_url(), "https://api.frankfurter.app/latest?from=EUR&to=CZK");
    }
}
