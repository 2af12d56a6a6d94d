use serde::Serialize;

use super::ExpenseLines;

/// Raw text of every field on the profitability form.
///
/// Values stay as typed until [`crate::compute_profit`] interprets them, so
/// a half-filled form is always a valid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfitInputs {
    pub sale_price: String,
    pub production_cost: String,
    pub shipping_cost: String,
    /// Marketplace commission as a percentage of the sale price.
    pub marketplace_fee_percentage: String,
    pub advertising_cost: String,
    pub expense_lines: ExpenseLines,
}

impl ProfitInputs {
    pub fn new() -> Self {
        Self::default()
    }
}
