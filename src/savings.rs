//! Break-even model for refuelling at a foreign station.
//!
//! A trip abroad costs the fuel burned on the round trip, valued at the home
//! price. It pays off once the per-liter saving on the fill-up covers that.

use crate::config::StationConfig;
use crate::error::FetchError;
use crate::frankfurter::ExchangeRate;
use crate::mbenzin::StationQuote;
use serde::{Deserialize, Serialize};

/// Figures for a station that is cheaper than home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsReport {
    pub label: String,
    pub last_update: String,
    /// Station price in the home currency
    pub converted_price: f64,
    pub home_price: f64,
    pub savings_per_liter: f64,
    /// Round trip
    pub extra_distance_km: f64,
    pub extra_liters: f64,
    pub extra_cost: f64,
    /// Minimum fill-up for the trip to break even
    pub required_liters: f64,
}

/// Result of evaluating one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SavingsOutcome {
    /// The station price could not be fetched.
    Unavailable { label: String, reason: String },
    /// The station is not cheaper than home.
    NoSavings { label: String },
    Worthwhile(SavingsReport),
}

impl SavingsOutcome {
    pub fn report(&self) -> Option<&SavingsReport> {
        match self {
            SavingsOutcome::Worthwhile(report) => Some(report),
            _ => None,
        }
    }
}

/// Everything produced by one run, ready for formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRun {
    pub exchange_rate: ExchangeRate,
    /// Home price in the base currency per liter
    pub home_price: f64,
    /// One entry per configured station, in configuration order
    pub outcomes: Vec<SavingsOutcome>,
}

impl ComparisonRun {
    /// Returns the worthwhile station needing the smallest fill-up.
    pub fn best(&self) -> Option<&SavingsReport> {
        self.outcomes
            .iter()
            .filter_map(SavingsOutcome::report)
            .min_by(|a, b| a.required_liters.total_cmp(&b.required_liters))
    }
}

/// Evaluates stations against a fixed rate and home price.
#[derive(Debug, Clone, Copy)]
pub struct SavingsCalculator {
    exchange_rate: f64,
    home_price: f64,
    consumption_per_100km: f64,
}

impl SavingsCalculator {
    /// `exchange_rate` must be the fee-adjusted rate, target units per base unit.
    pub fn new(exchange_rate: f64, home_price: f64, consumption_per_100km: f64) -> Self {
        Self { exchange_rate, home_price, consumption_per_100km }
    }

    pub fn from_rate(rate: &ExchangeRate, home_price: f64, consumption_per_100km: f64) -> Self {
        Self::new(rate.adjusted, home_price, consumption_per_100km)
    }

    /// Evaluates a station given the outcome of fetching its price.
    pub fn evaluate(
        &self,
        station: &StationConfig,
        quote: Result<&StationQuote, &FetchError>,
    ) -> SavingsOutcome {
        match quote {
            Ok(quote) => self.calculate(
                &station.label,
                Some(quote.price),
                &quote.last_update,
                station.distance_km,
            ),
            Err(err) => SavingsOutcome::Unavailable {
                label: station.label.clone(),
                reason: err.to_string(),
            },
        }
    }

    /// Applies the break-even model to a single station price.
    pub fn calculate(
        &self,
        label: &str,
        station_price: Option<f64>,
        last_update: &str,
        distance_km: f64,
    ) -> SavingsOutcome {
        let Some(station_price) = station_price else {
            return SavingsOutcome::Unavailable {
                label: label.to_string(),
                reason: "price not available".to_string(),
            };
        };

        let converted_price = station_price / self.exchange_rate;
        let extra_distance_km = distance_km * 2.0;
        let extra_liters = extra_distance_km * self.consumption_per_100km / 100.0;
        let savings_per_liter = self.home_price - converted_price;

        // Zero savings would divide by zero below.
        if savings_per_liter <= 0.0 || savings_per_liter.is_nan() {
            return SavingsOutcome::NoSavings { label: label.to_string() };
        }

        let extra_cost = self.home_price * extra_liters;
        let required_liters = extra_cost / savings_per_liter;

        SavingsOutcome::Worthwhile(SavingsReport {
            label: label.to_string(),
            last_update: last_update.to_string(),
            converted_price,
            home_price: self.home_price,
            savings_per_liter,
            extra_distance_km,
            extra_liters,
            extra_cost,
            required_liters,
        })
    }
}
