//! HTML parser for the dalioil.sk station page.

use crate::error::FetchError;
use crate::price::parse_price;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

const CAPTION_CSS: &str = "figcaption.elementor-image-carousel-caption";

static CAPTION: LazyLock<Selector> = LazyLock::new(|| Selector::parse(CAPTION_CSS).unwrap());

/// Extracts the home price (EUR/l) from the carousel caption.
pub fn parse_home_price(html: &str) -> Result<f64, FetchError> {
    let document = Html::parse_document(html);

    let caption = document
        .select(&CAPTION)
        .next()
        .ok_or(FetchError::MissingElement { selector: CAPTION_CSS })?;

    let text = caption.text().map(str::trim).collect::<String>();
    let price = parse_price(&text)?;

    debug!("Parsed home price {} from {:?}", price, text);
    Ok(price)
}
