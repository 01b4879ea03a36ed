//! Compare command: fetch rate and prices, evaluate every station.

use crate::config::Config;
use crate::dalioil::{DalioilClient, HomePriceSource};
use crate::format::Formatter;
use crate::frankfurter::{ExchangeRateSource, FrankfurterClient};
use crate::http::HttpClient;
use crate::mbenzin::{MbenzinClient, StationSource};
use crate::savings::{ComparisonRun, SavingsCalculator};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Runs the fuel price comparison.
pub struct CompareCommand {
    config: Config,
}

impl CompareCommand {
    /// Creates a new compare command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the comparison against the live sites and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let http = HttpClient::new(&self.config).context("Failed to create HTTP client")?;

        let rates = FrankfurterClient::new(http.clone(), &self.config);
        let home = DalioilClient::new(http.clone(), self.config.home_price_url.clone());
        let stations = MbenzinClient::new(http);

        let run = self.run(&rates, &home, &stations).await?;
        Ok(Formatter::new(self.config.format).format_run(&run))
    }

    /// Fetches everything through the given sources and evaluates each station.
    ///
    /// Fails only when the exchange rate or the home price is unavailable;
    /// a station that cannot be fetched becomes an `Unavailable` outcome.
    pub async fn run(
        &self,
        rates: &impl ExchangeRateSource,
        home: &impl HomePriceSource,
        stations: &impl StationSource,
    ) -> Result<ComparisonRun> {
        let exchange_rate = rates
            .exchange_rate()
            .await
            .inspect_err(|err| warn!("Exchange rate unavailable: {}", err))
            .context("Could not fetch exchange rate")?;
        info!(
            "Adjusted rate: 1 {} = {:.4} {}",
            exchange_rate.base, exchange_rate.adjusted, exchange_rate.target
        );

        let home_price = home
            .home_price()
            .await
            .inspect_err(|err| {
                warn!("Home price unavailable from {}: {}", self.config.home_price_url, err)
            })
            .context("Could not fetch home price")?;
        info!("Home price: {:.4} {}/l", home_price, exchange_rate.base);

        let calculator = SavingsCalculator::from_rate(
            &exchange_rate,
            home_price,
            self.config.consumption_per_100km,
        );

        let mut outcomes = Vec::with_capacity(self.config.stations.len());
        for station in &self.config.stations {
            let quote = stations.station_quote(&station.url).await;
            if let Err(err) = &quote {
                warn!("Could not fetch price for {} from {}: {}", station.label, station.url, err);
            }
            outcomes.push(calculator.evaluate(station, quote.as_ref()));
        }

        Ok(ComparisonRun { exchange_rate, home_price, outcomes })
    }
}
