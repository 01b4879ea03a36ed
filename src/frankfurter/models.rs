//! Data models for Frankfurter responses.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of `GET /latest`.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestRates {
    #[serde(default)]
    pub date: Option<String>,
    /// Currency code to rate; absent on unexpected payloads
    #[serde(default)]
    pub rates: Option<HashMap<String, f64>>,
}

impl LatestRates {
    /// Looks up the rate for `currency`.
    pub fn rate(&self, currency: &str) -> Result<f64, FetchError> {
        self.rates
            .as_ref()
            .and_then(|rates| rates.get(currency))
            .copied()
            .ok_or_else(|| FetchError::MissingRate { currency: currency.to_string() })
    }
}

/// Exchange rate with the fee adjustment applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency (EUR)
    pub base: String,
    /// Target currency (CZK)
    pub target: String,
    /// Rate as published
    pub market: f64,
    /// Rate after the fee coefficient, used for conversions
    pub adjusted: f64,
    /// Publication date reported by the API
    pub date: Option<String>,
}

impl ExchangeRate {
    /// Applies `fee_coefficient` to a market rate.
    pub fn with_fee(
        base: impl Into<String>,
        target: impl Into<String>,
        market: f64,
        fee_coefficient: f64,
    ) -> Self {
        Self {
            base: base.into(),
            target: target.into(),
            market,
            adjusted: market * fee_coefficient,
            date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_lookup() {
        let body: LatestRates = serde_json::from_str(
            r#"{"amount":1.0,"base":"EUR","date":"2024-05-17","rates":{"CZK":24.71}}"#,
        )
        .unwrap();

        assert_eq!(body.date.as_deref(), Some("2024-05-17"));
        assert_eq!(body.rate("CZK").unwrap(), 24.71);
    }

    #[test]
    fn test_missing_currency() {
        let body: LatestRates = serde_json::from_str(r#"{"rates":{"PLN":4.3}}"#).unwrap();
        let err = body.rate("CZK").unwrap_err();
        assert!(matches!(err, FetchError::MissingRate { ref currency } if currency == "CZK"));
    }

    #[test]
    fn test_missing_rates_key() {
        let body: LatestRates = serde_json::from_str(r#"{"message":"not found"}"#).unwrap();
        assert!(body.rate("CZK").is_err());
    }

    #[test]
    fn test_adjusted_rate() {
        let rate = ExchangeRate::with_fee("EUR", "CZK", 25.0, 0.9952);
        assert!((rate.adjusted - 24.88).abs() < 1e-9);
        assert_eq!(rate.market, 25.0);
    }
}
