//! fuel-saver - Is it worth driving across the border to refuel?

use anyhow::Result;
use clap::Parser;
use fuel_saver::commands::CompareCommand;
use fuel_saver::config::{Config, OutputFormat};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fuel-saver",
    version,
    about = "Checks whether refuelling abroad pays for the trip",
    long_about = "Scrapes the home and foreign fuel prices, converts them with a fee-adjusted \
                  exchange rate and prints how many liters you need to buy abroad to break even."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long)]
    proxy: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    config.validate()?;

    let output = CompareCommand::new(config).execute().await?;
    println!("{}", output);

    if cli.pause {
        println!("\nPress Enter to exit...");
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_ignores_fuel_env_vars() {
        let orig_timeout = std::env::var("FUEL_TIMEOUT").ok();
        std::env::set_var("FUEL_TIMEOUT", "abc");

        let cli = Cli::try_parse_from(["fuel-saver"]).unwrap();
        assert!(cli.timeout.is_none());
        assert!(cli.proxy.is_none());
        assert_eq!(Config::new().with_env().timeout_secs, 10);

        match orig_timeout {
            Some(v) => std::env::set_var("FUEL_TIMEOUT", v),
            None => std::env::remove_var("FUEL_TIMEOUT"),
        }
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from(["fuel-saver", "--timeout", "3", "-f", "json", "--pause"])
            .unwrap();
        assert_eq!(cli.timeout, Some(3));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.pause);
    }
}
