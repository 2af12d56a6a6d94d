//! Profitability calculations.
//!
//! This module turns the raw text of the profitability form into a
//! [`ProfitResult`]. Every numeric field that cannot be read counts as zero,
//! so the calculation always completes.
//!
//! # Calculation Steps
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Marketplace fee: sale price × fee % |
//! | 2    | Percentage expenses: sale price × line % (one per percentage line) |
//! | 3    | Fixed costs: advertising + every flat expense line |
//! | 4    | Variable costs per unit: production + shipping |
//! | 5    | Total percentage rate: fee % + every percentage line % |
//! | 6    | Total costs: Step 3 + Step 4 + Step 1 + Σ Step 2 |
//! | 7    | Profit, margin (profit / sale price) and ROI (profit / total costs) |
//! | 8    | Volume projection at 10, 100, 1,000 and 10,000 units |
//!
//! Fixed costs are incurred once per projection; they are not multiplied by
//! the volume.
//!
//! # Example
//!
//! ```
//! use profit_core::{ExpenseKind, ProfitInputs, compute_profit};
//!
//! let mut inputs = ProfitInputs::new();
//! inputs.sale_price = "200".into();
//! inputs.production_cost = "80".into();
//! inputs.shipping_cost = "20".into();
//! inputs.marketplace_fee_percentage = "10".into();
//! inputs
//!     .expense_lines
//!     .set(ExpenseKind::Percentage, 1, "5", "Payment fees")
//!     .unwrap();
//!
//! let result = compute_profit(&inputs);
//!
//! assert_eq!(result.marketplace_fee_amount, 20.0);
//! assert_eq!(result.percentage_expense_amounts, [10.0, 0.0, 0.0]);
//! assert_eq!(result.total_costs, 130.0);
//! assert_eq!(result.profit, 70.0);
//! assert_eq!(result.profit_margin, 35.0);
//! ```

use tracing::debug;

use crate::calculations::common::{finite_or_zero, parse_or_zero};
use crate::models::{
    ExpenseLine, PERCENTAGE_EXPENSE_SLOTS, ProfitInputs, ProfitResult, VOLUME_SCENARIOS,
    VolumeScenario,
};

/// Computes profit, margin, ROI and the volume projection for `inputs`.
///
/// Each call is independent; the result replaces any earlier one in full.
pub fn compute_profit(inputs: &ProfitInputs) -> ProfitResult {
    let sale_price = parse_or_zero(&inputs.sale_price);
    let fee_percentage = parse_or_zero(&inputs.marketplace_fee_percentage);
    let percentage_lines = inputs.expense_lines.percentage();

    let marketplace_fee_amount = percent_of(sale_price, fee_percentage);
    let percentage_expense_amounts = percentage_expense_amounts(sale_price, percentage_lines);
    let fixed_costs = fixed_costs(&inputs.advertising_cost, inputs.expense_lines.flat());
    let variable_costs_per_unit =
        variable_costs_per_unit(&inputs.production_cost, &inputs.shipping_cost);
    let total_percentage_rate = total_percentage_rate(fee_percentage, percentage_lines);

    let percentage_expenses_total: f64 = percentage_expense_amounts.iter().sum();
    let total_costs = fixed_costs
        + variable_costs_per_unit
        + marketplace_fee_amount
        + percentage_expenses_total;

    let profit = sale_price - total_costs;
    let profit_margin = finite_or_zero((profit / sale_price) * 100.0);
    let roi = finite_or_zero((profit / total_costs) * 100.0);

    let volume_analysis = volume_analysis(
        sale_price,
        fixed_costs,
        variable_costs_per_unit,
        total_percentage_rate,
    );

    debug!(
        sale_price,
        total_costs, profit, profit_margin, roi, "profitability calculated"
    );

    ProfitResult {
        total_costs,
        profit,
        profit_margin,
        roi,
        marketplace_fee_amount,
        percentage_expense_amounts,
        fixed_costs,
        variable_costs_per_unit,
        total_percentage_rate,
        volume_analysis,
    }
}

/// `rate` percent of `amount`.
fn percent_of(
    amount: f64,
    rate: f64,
) -> f64 {
    (amount * rate) / 100.0
}

/// Money amount of each percentage line. An empty line contributes zero.
fn percentage_expense_amounts(
    sale_price: f64,
    lines: &[ExpenseLine],
) -> [f64; PERCENTAGE_EXPENSE_SLOTS] {
    std::array::from_fn(|i| {
        lines
            .get(i)
            .filter(|line| !line.amount.is_empty())
            .map_or(0.0, |line| percent_of(sale_price, parse_or_zero(&line.amount)))
    })
}

/// Advertising plus every flat expense line.
fn fixed_costs(
    advertising_cost: &str,
    flat_lines: &[ExpenseLine],
) -> f64 {
    std::iter::once(advertising_cost)
        .chain(flat_lines.iter().map(|line| line.amount.as_str()))
        .map(parse_or_zero)
        .fold(0.0, |sum, cost| sum + cost)
}

/// Costs incurred for every unit sold.
fn variable_costs_per_unit(
    production_cost: &str,
    shipping_cost: &str,
) -> f64 {
    parse_or_zero(production_cost) + parse_or_zero(shipping_cost)
}

/// Marketplace fee plus every percentage line, in percent.
fn total_percentage_rate(
    fee_percentage: f64,
    lines: &[ExpenseLine],
) -> f64 {
    fee_percentage
        + lines
            .iter()
            .map(|line| parse_or_zero(&line.amount))
            .fold(0.0, |sum, rate| sum + rate)
}

/// Projects the per-unit economics onto each volume in [`VOLUME_SCENARIOS`].
fn volume_analysis(
    sale_price: f64,
    fixed_costs: f64,
    variable_costs_per_unit: f64,
    total_percentage_rate: f64,
) -> [VolumeScenario; VOLUME_SCENARIOS.len()] {
    VOLUME_SCENARIOS.map(|volume| {
        let units = f64::from(volume);
        let total_revenue = sale_price * units;
        let total_variable_costs = variable_costs_per_unit * units;
        let total_percentage_costs = percent_of(total_revenue, total_percentage_rate);
        let total_costs = fixed_costs + total_variable_costs + total_percentage_costs;
        let profit = total_revenue - total_costs;

        VolumeScenario {
            volume,
            total_revenue,
            total_variable_costs,
            total_percentage_costs,
            total_costs,
            profit,
            roi: finite_or_zero((profit / total_costs) * 100.0),
        }
    })
}
