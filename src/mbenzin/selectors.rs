//! CSS selectors for mbenzin.cz station pages.
//!
//! Update this file when mbenzin changes the ASP.NET control ids.

use scraper::Selector;
use std::sync::LazyLock;

/// Natural 95 price, carried in the `content` attribute.
pub const PRICE_CSS: &str = "meta#ContentPlaceHolder1_mPriceN95";

/// Attribute on [`PRICE_CSS`] holding the number.
pub const PRICE_ATTR: &str = "content";

/// Date of the last price report.
pub const LAST_UPDATE_CSS: &str = "span#ContentPlaceHolder1_lN95LastUpdate";

pub static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(PRICE_CSS).unwrap());

pub static LAST_UPDATE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(LAST_UPDATE_CSS).unwrap());
