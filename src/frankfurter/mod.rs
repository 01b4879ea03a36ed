//! Frankfurter exchange rate API integration.
//!
//! Provides the EUR -> CZK rate, reduced by the configured fee coefficient.

mod client;
mod models;

pub use client::{ExchangeRateSource, FrankfurterClient};
pub use models::{ExchangeRate, LatestRates};
