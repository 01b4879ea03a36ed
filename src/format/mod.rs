//! Output formatting for comparison runs (text, JSON).

use crate::config::OutputFormat;
use crate::savings::{ComparisonRun, SavingsOutcome, SavingsReport};

/// Formats comparison runs for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a complete run.
    pub fn format_run(&self, run: &ComparisonRun) -> String {
        match self.format {
            OutputFormat::Json => self.json_run(run),
            OutputFormat::Text => self.text_run(run),
        }
    }

    fn json_run(&self, run: &ComparisonRun) -> String {
        serde_json::to_string_pretty(run).unwrap_or_else(|_| "{}".to_string())
    }

    fn text_run(&self, run: &ComparisonRun) -> String {
        let rate = &run.exchange_rate;
        let mut lines = Vec::new();

        lines.push(format!(
            "Exchange rate: 1 {} = {:.4} {} (market {:.4})",
            rate.base, rate.adjusted, rate.target, rate.market
        ));
        lines.push(format!("Home price: {:.4} {}/l", run.home_price, rate.base));

        for outcome in &run.outcomes {
            match outcome {
                SavingsOutcome::Unavailable { label, reason } => {
                    lines.push(String::new());
                    lines.push(format!("Could not fetch price from {}: {}", label, reason));
                }
                SavingsOutcome::NoSavings { label } => {
                    lines.push(String::new());
                    lines.push(format!(
                        "{}: No savings, price abroad is not better than home price.",
                        label
                    ));
                }
                SavingsOutcome::Worthwhile(report) => {
                    lines.push(String::new());
                    lines.extend(self.text_report(report, &rate.base));
                }
            }
        }

        if let Some(best) = run.best() {
            lines.push(String::new());
            lines.push(format!(
                "Best option: {} (break even at {:.2} l)",
                best.label, best.required_liters
            ));
        }

        lines.join("\n")
    }

    fn text_report(&self, report: &SavingsReport, currency: &str) -> Vec<String> {
        vec![
            format!("{}:", report.label),
            format!("Last update: {}", report.last_update),
            format!("Price abroad (converted): {:.4} {}/l", report.converted_price, currency),
            format!("Home price: {:.4} {}/l", report.home_price, currency),
            format!("Savings per liter: {:.4} {}/l", report.savings_per_liter, currency),
            format!(
                "Extra fuel needed for {:.1} km: {:.2} l",
                report.extra_distance_km, report.extra_liters
            ),
            format!("Extra travel cost: {:.2} {}", report.extra_cost, currency),
            format!(
                "To break even you need to refuel at least {:.2} liters.",
                report.required_liters
            ),
        ]
    }
}
