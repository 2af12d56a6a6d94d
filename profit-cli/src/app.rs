//! Dispatches a parsed command to the calculation engines and renders the
//! result.

use anyhow::{Context, Result};
use profit_core::{Currency, compute_comparison, compute_percentage, compute_profit};
use tracing::{debug, info};

use crate::cli::Command;
use crate::csv_loader;
use crate::form;
use crate::report::{ComparisonReport, CurrencyList, PercentageReport, ProfitReport};

/// Runs `command` and returns the text to print.
pub fn execute(
    command: &Command,
    currency: &Currency,
) -> Result<String> {
    match command {
        Command::Percent { number, percentage } => {
            let result = compute_percentage(number, percentage);
            debug!(?result, "percentage calculated");
            Ok(PercentageReport {
                number,
                percentage,
                result,
            }
            .to_string())
        }
        Command::Compare { a, b } => {
            let result = compute_comparison(a, b);
            debug!(?result, "comparison calculated");
            Ok(ComparisonReport { a, b, result }.to_string())
        }
        Command::Profit(args) => {
            let inputs = form::profit_inputs(args).context("invalid profit arguments")?;
            let result = compute_profit(&inputs);
            Ok(ProfitReport {
                inputs: &inputs,
                result: &result,
                currency,
            }
            .to_string())
        }
        Command::Batch { file } => {
            let scenarios = csv_loader::load_from_file(file)
                .with_context(|| format!("failed to load batch file: {}", file.display()))?;
            info!(count = scenarios.len(), "calculating batch");

            let mut out = String::new();
            for scenario in &scenarios {
                let result = compute_profit(&scenario.inputs);
                let report = ProfitReport {
                    inputs: &scenario.inputs,
                    result: &result,
                    currency,
                };
                out.push_str(&format!("== {} ==\n{report}\n", scenario.label));
            }
            Ok(out)
        }
        Command::Currencies => Ok(CurrencyList { selected: currency }.to_string()),
    }
}
