use thiserror::Error;

use crate::models::ExpenseKind;

/// Errors raised while building calculator inputs.
///
/// The calculation engines themselves never fail; these only surface when a
/// caller addresses something that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),

    #[error("{kind} expense slot {slot} is out of range (1..={max})")]
    ExpenseSlotOutOfRange {
        kind: ExpenseKind,
        slot: usize,
        max: usize,
    },
}
