//! CSV loader for batches of profitability scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name and column order does not matter. Every
//! column is optional; a missing column or an empty cell is empty text, which
//! the calculation treats as zero. Cells are passed to the calculation as
//! typed, so a non-numeric cell is not an error either.
//!
//! | Column                        | Notes |
//! |-------------------------------|-------|
//! | `label`                       | Shown above the report; defaults to `Row N` |
//! | `sale_price`                  | |
//! | `production_cost`             | |
//! | `shipping_cost`               | |
//! | `marketplace_fee_percentage`  | Percent of the sale price |
//! | `advertising_cost`            | |
//! | `expense_1` … `expense_5`     | Flat amounts |
//! | `expense_1_note` …            | Notes for the flat amounts |
//! | `percent_expense_1` … `_3`    | Percent of the sale price |
//! | `percent_expense_1_note` …    | Notes for the percentage lines |
//!
//! ### Minimal example
//!
//! ```csv
//! label,sale_price,production_cost
//! Mug,120,45
//! ```
use std::path::Path;

use profit_core::{ExpenseKind, ModelError, ProfitInputs};
use serde::Deserialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    label: String,
    sale_price: String,
    production_cost: String,
    shipping_cost: String,
    marketplace_fee_percentage: String,
    advertising_cost: String,
    expense_1: String,
    expense_1_note: String,
    expense_2: String,
    expense_2_note: String,
    expense_3: String,
    expense_3_note: String,
    expense_4: String,
    expense_4_note: String,
    expense_5: String,
    expense_5_note: String,
    percent_expense_1: String,
    percent_expense_1_note: String,
    percent_expense_2: String,
    percent_expense_2_note: String,
    percent_expense_3: String,
    percent_expense_3_note: String,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One row of a batch file, ready to calculate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub inputs: ProfitInputs,
}

/// Errors that can occur while loading a batch file.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV structure is invalid (ragged rows, bad quoting, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a [`Scenario`].
///
/// row_number is 1-based (for the default label).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Scenario, CsvLoadError> {
    let label = if row.label.is_empty() {
        format!("Row {row_number}")
    } else {
        row.label
    };

    let mut inputs = ProfitInputs {
        sale_price: row.sale_price,
        production_cost: row.production_cost,
        shipping_cost: row.shipping_cost,
        marketplace_fee_percentage: row.marketplace_fee_percentage,
        advertising_cost: row.advertising_cost,
        ..ProfitInputs::default()
    };

    let flat = [
        (row.expense_1, row.expense_1_note),
        (row.expense_2, row.expense_2_note),
        (row.expense_3, row.expense_3_note),
        (row.expense_4, row.expense_4_note),
        (row.expense_5, row.expense_5_note),
    ];
    for (slot, (amount, note)) in flat.into_iter().enumerate() {
        inputs
            .expense_lines
            .set(ExpenseKind::Flat, slot + 1, amount, note)?;
    }

    let percentage = [
        (row.percent_expense_1, row.percent_expense_1_note),
        (row.percent_expense_2, row.percent_expense_2_note),
        (row.percent_expense_3, row.percent_expense_3_note),
    ];
    for (slot, (amount, note)) in percentage.into_iter().enumerate() {
        inputs
            .expense_lines
            .set(ExpenseKind::Percentage, slot + 1, amount, note)?;
    }

    Ok(Scenario { label, inputs })
}

/// Parse CSV text and return one [`Scenario`] per row, in file order.
///
/// # Errors
///
/// [`CsvLoadError::Parse`] if the CSV is structurally invalid.
pub fn load_from_str(input: &str) -> Result<Vec<Scenario>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let scenarios = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = scenarios.len(), "loaded scenarios");
    Ok(scenarios)
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
