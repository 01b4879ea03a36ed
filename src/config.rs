//! Configuration management with TOML, environment variables, and CLI overrides.
//!
//! The compiled-in defaults describe the original setup: four Czech stations
//! compared against a Slovak home station, EUR -> CZK.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Multiplier applied to the market rate to account for bank/transaction fees.
pub const DEFAULT_FEE_COEFFICIENT: f64 = 0.9952;

/// Average consumption of the car making the trip, in liters per 100 km.
pub const DEFAULT_CONSUMPTION_PER_100KM: f64 = 6.3;

const DEFAULT_EXCHANGE_API_URL: &str = "https://api.frankfurter.app";
const DEFAULT_HOME_PRICE_URL: &str = "https://dalioil.sk/dubnica-nad-vahom/";

/// A foreign station to compare against the home price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    /// Human-readable name
    pub label: String,
    /// Station detail page
    pub url: String,
    /// One-way distance from home, in km
    pub distance_km: f64,
}

impl StationConfig {
    pub fn new(label: impl Into<String>, url: impl Into<String>, distance_km: f64) -> Self {
        Self { label: label.into(), url: url.into(), distance_km }
    }
}

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Frankfurter exchange rate API
    #[serde(default = "default_exchange_api_url")]
    pub exchange_api_url: String,

    /// Currency the home price is quoted in
    #[serde(default = "default_base_currency")]
    pub base_currency: String,

    /// Currency the foreign stations quote in
    #[serde(default = "default_target_currency")]
    pub target_currency: String,

    /// Fee adjustment applied to the market rate
    #[serde(default = "default_fee_coefficient")]
    pub fee_coefficient: f64,

    /// Page carrying the home reference price
    #[serde(default = "default_home_price_url")]
    pub home_price_url: String,

    /// Fuel consumption in l/100 km
    #[serde(default = "default_consumption_per_100km")]
    pub consumption_per_100km: f64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Stations to evaluate, in order
    #[serde(default = "default_stations")]
    pub stations: Vec<StationConfig>,
}

fn default_exchange_api_url() -> String {
    DEFAULT_EXCHANGE_API_URL.to_string()
}

fn default_base_currency() -> String {
    "EUR".to_string()
}

fn default_target_currency() -> String {
    "CZK".to_string()
}

fn default_fee_coefficient() -> f64 {
    DEFAULT_FEE_COEFFICIENT
}

fn default_home_price_url() -> String {
    DEFAULT_HOME_PRICE_URL.to_string()
}

fn default_consumption_per_100km() -> f64 {
    DEFAULT_CONSUMPTION_PER_100KM
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_stations() -> Vec<StationConfig> {
    vec![
        StationConfig::new(
            "Trako Brumov",
            "https://www.mbenzin.cz/Ceny-benzinu-a-nafty/Brumov/Trako-Kloboucka-1397/18019",
            25.0,
        ),
        StationConfig::new(
            "EuroOil Valašské Klobouky",
            "https://www.mbenzin.cz/Ceny-benzinu-a-nafty/Valasske-Klobouky/EuroOil- Cyrilometodejska-666/17010",
            30.6,
        ),
        StationConfig::new(
            "EuroOil Horní Lideč",
            "https://www.mbenzin.cz/Ceny-benzinu-a-nafty/Horni-Lidec/EuroOil-Horni-Lidec-295-silnice-49/16886",
            49.5,
        ),
        StationConfig::new(
            "Silmet Lidečko",
            "https://www.mbenzin.cz/Ceny-benzinu-a-nafty/Lidecko/Silmet-/17956",
            38.5,
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exchange_api_url: default_exchange_api_url(),
            base_currency: default_base_currency(),
            target_currency: default_target_currency(),
            fee_coefficient: default_fee_coefficient(),
            home_price_url: default_home_price_url(),
            consumption_per_100km: default_consumption_per_100km(),
            timeout_secs: default_timeout_secs(),
            proxy: None,
            format: OutputFormat::Text,
            stations: default_stations(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Rejects values the break-even model cannot work with.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.timeout_secs > 0, "timeout_secs must be greater than 0");

        ensure!(
            self.consumption_per_100km.is_finite() && self.consumption_per_100km > 0.0,
            "consumption_per_100km must be a positive number, got {}",
            self.consumption_per_100km
        );

        ensure!(
            self.fee_coefficient.is_finite() && self.fee_coefficient > 0.0,
            "fee_coefficient must be a positive number, got {}",
            self.fee_coefficient
        );

        for station in &self.stations {
            ensure!(
                station.distance_km.is_finite() && station.distance_km >= 0.0,
                "distance_km of station {:?} must be a non-negative number, got {}",
                station.label,
                station.distance_km
            );
        }

        Ok(())
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("fuel-saver").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(proxy) = std::env::var("FUEL_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("FUEL_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        if let Ok(url) = std::env::var("FUEL_HOME_PRICE_URL") {
            self.home_price_url = url;
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
