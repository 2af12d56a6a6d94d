use std::fmt;

use serde::Serialize;

use crate::error::ModelError;

/// Number of flat-amount expense lines.
pub const FLAT_EXPENSE_SLOTS: usize = 5;

/// Number of percentage-of-sale-price expense lines.
pub const PERCENTAGE_EXPENSE_SLOTS: usize = 3;

const TOTAL_SLOTS: usize = FLAT_EXPENSE_SLOTS + PERCENTAGE_EXPENSE_SLOTS;

/// How an expense line's amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseKind {
    /// A fixed amount in the selected currency.
    Flat,
    /// A percentage of the sale price.
    Percentage,
}

impl fmt::Display for ExpenseKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Percentage => f.write_str("percentage"),
        }
    }
}

/// A single "other expense" entry as typed by the user.
///
/// `amount` is kept as raw text; it is only interpreted when a calculation
/// runs. The kind is fixed when the line is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseLine {
    pub amount: String,
    pub note: String,
    kind: ExpenseKind,
}

impl ExpenseLine {
    /// An empty flat-amount line.
    pub fn flat() -> Self {
        Self::empty(ExpenseKind::Flat)
    }

    /// An empty percentage line.
    pub fn percentage() -> Self {
        Self::empty(ExpenseKind::Percentage)
    }

    fn empty(kind: ExpenseKind) -> Self {
        Self {
            amount: String::new(),
            note: String::new(),
            kind,
        }
    }

    pub fn with_amount(
        mut self,
        amount: impl Into<String>,
    ) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_note(
        mut self,
        note: impl Into<String>,
    ) -> Self {
        self.note = note.into();
        self
    }

    pub fn kind(&self) -> ExpenseKind {
        self.kind
    }

    pub fn is_percentage(&self) -> bool {
        self.kind == ExpenseKind::Percentage
    }

    /// True when both the amount and the note have been filled in.
    /// Only such lines are itemised in reports.
    pub fn is_annotated(&self) -> bool {
        !self.amount.is_empty() && !self.note.is_empty()
    }
}

/// The fixed set of eight expense lines: five flat lines followed by three
/// percentage lines. Slots are addressed 1-based within their kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseLines {
    lines: [ExpenseLine; TOTAL_SLOTS],
}

impl Default for ExpenseLines {
    fn default() -> Self {
        Self {
            lines: std::array::from_fn(|i| {
                if i < FLAT_EXPENSE_SLOTS {
                    ExpenseLine::flat()
                } else {
                    ExpenseLine::percentage()
                }
            }),
        }
    }
}

impl ExpenseLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// All eight lines in slot order.
    pub fn all(&self) -> &[ExpenseLine] {
        &self.lines
    }

    /// The flat-amount lines.
    pub fn flat(&self) -> &[ExpenseLine] {
        &self.lines[..FLAT_EXPENSE_SLOTS]
    }

    /// The percentage lines.
    pub fn percentage(&self) -> &[ExpenseLine] {
        &self.lines[FLAT_EXPENSE_SLOTS..]
    }

    /// Mutable access to flat slot `slot` (1-based).
    pub fn flat_mut(
        &mut self,
        slot: usize,
    ) -> Result<&mut ExpenseLine, ModelError> {
        if slot == 0 || slot > FLAT_EXPENSE_SLOTS {
            return Err(ModelError::ExpenseSlotOutOfRange {
                kind: ExpenseKind::Flat,
                slot,
                max: FLAT_EXPENSE_SLOTS,
            });
        }
        Ok(&mut self.lines[slot - 1])
    }

    /// Mutable access to percentage slot `slot` (1-based).
    pub fn percentage_mut(
        &mut self,
        slot: usize,
    ) -> Result<&mut ExpenseLine, ModelError> {
        if slot == 0 || slot > PERCENTAGE_EXPENSE_SLOTS {
            return Err(ModelError::ExpenseSlotOutOfRange {
                kind: ExpenseKind::Percentage,
                slot,
                max: PERCENTAGE_EXPENSE_SLOTS,
            });
        }
        Ok(&mut self.lines[FLAT_EXPENSE_SLOTS + slot - 1])
    }

    /// Fills in the amount and note of a slot of the given kind.
    pub fn set(
        &mut self,
        kind: ExpenseKind,
        slot: usize,
        amount: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<(), ModelError> {
        let line = match kind {
            ExpenseKind::Flat => self.flat_mut(slot)?,
            ExpenseKind::Percentage => self.percentage_mut(slot)?,
        };
        line.amount = amount.into();
        line.note = note.into();
        Ok(())
    }
}
