mod currency;
mod expense_line;
mod profit_inputs;
mod results;

pub use currency::{CURRENCIES, Currency, DEFAULT_CURRENCY_CODE, currency_symbol};
pub use expense_line::{
    ExpenseKind, ExpenseLine, ExpenseLines, FLAT_EXPENSE_SLOTS, PERCENTAGE_EXPENSE_SLOTS,
};
pub use profit_inputs::ProfitInputs;
pub use results::{
    ComparisonResult, PercentageResult, ProfitResult, VOLUME_SCENARIOS, VolumeScenario,
};
