//! mbenzin.cz station pages.
//!
//! Each station detail page carries the current Natural 95 price in a `meta`
//! tag and the time of the last report in a `span`.

mod client;
pub mod parser;
pub mod selectors;

pub use client::{MbenzinClient, StationSource};
pub use parser::{StationQuote, UNKNOWN_DATE};
