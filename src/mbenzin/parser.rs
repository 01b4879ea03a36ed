//! HTML parser for mbenzin.cz station pages.

use super::selectors;
use crate::error::FetchError;
use crate::price::parse_price;
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder used when a page does not say when the price was reported.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Price reported for a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationQuote {
    /// Price per liter in the station's currency
    pub price: f64,
    /// Last update as shown on the page
    pub last_update: String,
}

/// Extracts the price and last update date from a station page.
pub fn parse_station_page(html: &str) -> Result<StationQuote, FetchError> {
    let document = Html::parse_document(html);

    let meta = document
        .select(&selectors::PRICE)
        .next()
        .ok_or(FetchError::MissingElement { selector: selectors::PRICE_CSS })?;

    let content = meta.value().attr(selectors::PRICE_ATTR).ok_or(FetchError::MissingAttribute {
        selector: selectors::PRICE_CSS,
        attribute: selectors::PRICE_ATTR,
    })?;

    let price = parse_price(content)?;

    let last_update = document
        .select(&selectors::LAST_UPDATE)
        .next()
        .map(|e| e.text().map(str::trim).collect::<String>())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    debug!("Parsed station price {} (updated {})", price, last_update);
    Ok(StationQuote { price, last_update })
}
