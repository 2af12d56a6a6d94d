use serde::Serialize;

use super::PERCENTAGE_EXPENSE_SLOTS;

/// Unit volumes used for the volume projection, in ascending order.
pub const VOLUME_SCENARIOS: [u32; 4] = [10, 100, 1_000, 10_000];

/// Outcome of applying a percentage to a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentageResult {
    /// `base * percentage / 100`
    pub basic_result: f64,
    /// The base increased by `basic_result`.
    pub add_result: f64,
    /// The base decreased by `basic_result`.
    pub subtract_result: f64,
}

/// How one number relates to another in percentage terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// `a` as a percentage of `b`.
    pub percentage_of: f64,
    /// Relative change going from `b` to `a`, in percent.
    pub change_rate: f64,
}

/// Projected outcome at a given number of units sold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeScenario {
    pub volume: u32,
    pub total_revenue: f64,
    pub total_variable_costs: f64,
    pub total_percentage_costs: f64,
    /// Fixed costs (unscaled) plus the variable and percentage costs.
    pub total_costs: f64,
    pub profit: f64,
    pub roi: f64,
}

/// Full result of a profitability calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitResult {
    pub total_costs: f64,
    pub profit: f64,
    /// Profit over sale price, in percent. Zero when undefined.
    pub profit_margin: f64,
    /// Profit over total costs, in percent. Zero when undefined.
    pub roi: f64,
    pub marketplace_fee_amount: f64,
    /// One amount per percentage expense line, in slot order.
    pub percentage_expense_amounts: [f64; PERCENTAGE_EXPENSE_SLOTS],
    pub fixed_costs: f64,
    pub variable_costs_per_unit: f64,
    /// Marketplace fee plus every percentage expense line, in percent.
    pub total_percentage_rate: f64,
    pub volume_analysis: [VolumeScenario; VOLUME_SCENARIOS.len()],
}

impl ProfitResult {
    pub fn is_profitable(&self) -> bool {
        self.profit >= 0.0
    }

    /// Sum of the per-line percentage expense amounts.
    pub fn percentage_expenses_total(&self) -> f64 {
        self.percentage_expense_amounts.iter().sum()
    }
}
