//! fuel-saver - Is it worth driving across the border to refuel?
//!
//! Scrapes the home and foreign station prices, converts them with a
//! fee-adjusted exchange rate and works out how much fuel has to be bought
//! abroad to pay for the round trip.

pub mod commands;
pub mod config;
pub mod dalioil;
pub mod error;
pub mod format;
pub mod frankfurter;
pub mod http;
pub mod mbenzin;
pub mod price;
pub mod savings;

pub use config::{Config, StationConfig};
pub use error::{ErrorKind, FetchError};
pub use savings::{ComparisonRun, SavingsCalculator, SavingsOutcome, SavingsReport};
