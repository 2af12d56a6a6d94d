use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Profitability and percentage calculator.
///
/// Every numeric argument is taken as typed: the profit calculation reads
/// anything that is not a number as zero, while the percentage calculations
/// report no result.
#[derive(Debug, Parser)]
#[command(name = "profit-calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (defaults to ./profit-calc.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Currency code used to label amounts (USD, CAD, GBP, AUD, SGD, TRY, AED).
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Log filter, e.g. `debug` or `info,profit_core=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Take a percentage of a number, and add it to or subtract it from that number.
    Percent {
        /// The base number.
        #[arg(allow_hyphen_values = true)]
        number: String,

        /// The percentage to apply.
        #[arg(allow_hyphen_values = true)]
        percentage: String,
    },

    /// Express A as a percentage of B, and the change from B to A.
    Compare {
        #[arg(allow_hyphen_values = true)]
        a: String,

        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Calculate profit, margin, ROI and volume projections for one product.
    Profit(ProfitArgs),

    /// Calculate profitability for every row of a CSV file.
    Batch {
        /// Path to the CSV file containing one product per row.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the supported currencies.
    Currencies,
}

/// Fields of the profitability form.
#[derive(Debug, Clone, Default, Args)]
pub struct ProfitArgs {
    /// Sale price per unit.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub sale_price: String,

    /// Production cost per unit.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub production_cost: String,

    /// Shipping cost per unit.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub shipping_cost: String,

    /// Marketplace commission as a percentage of the sale price.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub marketplace_fee: String,

    /// Advertising cost (fixed, not scaled by volume).
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub advertising_cost: String,

    /// Fixed expense as `AMOUNT[:NOTE]`. Repeat up to five times.
    #[arg(long = "expense", value_name = "AMOUNT[:NOTE]", allow_hyphen_values = true)]
    pub expenses: Vec<String>,

    /// Expense as a percentage of the sale price, `PERCENT[:NOTE]`. Repeat up to three times.
    #[arg(
        long = "percent-expense",
        value_name = "PERCENT[:NOTE]",
        allow_hyphen_values = true
    )]
    pub percent_expenses: Vec<String>,
}
