//! Builds calculator inputs from command-line arguments.

use profit_core::{
    ExpenseKind, FLAT_EXPENSE_SLOTS, ModelError, PERCENTAGE_EXPENSE_SLOTS, ProfitInputs,
};
use thiserror::Error;

use crate::cli::ProfitArgs;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("too many {kind} expenses: got {given}, at most {max} allowed")]
    TooManyExpenses {
        kind: ExpenseKind,
        given: usize,
        max: usize,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Splits an `AMOUNT[:NOTE]` argument at the first colon.
///
/// Both parts are trimmed; a missing note is empty.
pub fn split_expense_arg(arg: &str) -> (String, String) {
    match arg.split_once(':') {
        Some((amount, note)) => (amount.trim().to_string(), note.trim().to_string()),
        None => (arg.trim().to_string(), String::new()),
    }
}

/// Copies the form arguments into [`ProfitInputs`], filling expense slots in
/// the order given.
pub fn profit_inputs(args: &ProfitArgs) -> Result<ProfitInputs, FormError> {
    let mut inputs = ProfitInputs {
        sale_price: args.sale_price.clone(),
        production_cost: args.production_cost.clone(),
        shipping_cost: args.shipping_cost.clone(),
        marketplace_fee_percentage: args.marketplace_fee.clone(),
        advertising_cost: args.advertising_cost.clone(),
        ..ProfitInputs::default()
    };

    fill_expenses(&mut inputs, ExpenseKind::Flat, &args.expenses, FLAT_EXPENSE_SLOTS)?;
    fill_expenses(
        &mut inputs,
        ExpenseKind::Percentage,
        &args.percent_expenses,
        PERCENTAGE_EXPENSE_SLOTS,
    )?;

    Ok(inputs)
}

fn fill_expenses(
    inputs: &mut ProfitInputs,
    kind: ExpenseKind,
    args: &[String],
    max: usize,
) -> Result<(), FormError> {
    if args.len() > max {
        return Err(FormError::TooManyExpenses {
            kind,
            given: args.len(),
            max,
        });
    }

    for (index, arg) in args.iter().enumerate() {
        let (amount, note) = split_expense_arg(arg);
        inputs.expense_lines.set(kind, index + 1, amount, note)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> ProfitArgs {
        ProfitArgs {
            sale_price: "150".to_string(),
            production_cost: "40".to_string(),
            marketplace_fee: "12".to_string(),
            ..ProfitArgs::default()
        }
    }

    #[test]
    fn split_expense_with_note() {
        assert_eq!(
            split_expense_arg("25: Packaging "),
            ("25".to_string(), "Packaging".to_string())
        );
    }

    #[test]
    fn split_expense_keeps_colons_in_note() {
        assert_eq!(
            split_expense_arg("3:Fees: card"),
            ("3".to_string(), "Fees: card".to_string())
        );
    }

    #[test]
    fn split_expense_without_note() {
        assert_eq!(split_expense_arg("12.5"), ("12.5".to_string(), String::new()));
    }

    #[test]
    fn scalar_fields_are_copied_verbatim() {
        let inputs = profit_inputs(&args()).unwrap();

        assert_eq!(inputs.sale_price, "150");
        assert_eq!(inputs.production_cost, "40");
        assert_eq!(inputs.shipping_cost, "");
        assert_eq!(inputs.marketplace_fee_percentage, "12");
    }

    #[test]
    fn expenses_fill_slots_in_order() {
        let mut args = args();
        args.expenses = vec!["10:Photos".to_string(), "5".to_string()];
        args.percent_expenses = vec!["2:Card fees".to_string()];

        let inputs = profit_inputs(&args).unwrap();
        let flat = inputs.expense_lines.flat();
        let percentage = inputs.expense_lines.percentage();

        assert_eq!(flat[0].amount, "10");
        assert_eq!(flat[0].note, "Photos");
        assert_eq!(flat[1].amount, "5");
        assert!(flat[2].amount.is_empty());
        assert_eq!(percentage[0].amount, "2");
        assert_eq!(percentage[0].note, "Card fees");
    }

    #[test]
    fn too_many_percentage_expenses_are_rejected() {
        let mut args = args();
        args.percent_expenses = vec!["1".to_string(); 4];

        assert_eq!(
            profit_inputs(&args).unwrap_err(),
            FormError::TooManyExpenses {
                kind: ExpenseKind::Percentage,
                given: 4,
                max: 3,
            }
        );
    }

    #[test]
    fn five_flat_expenses_are_accepted() {
        let mut args = args();
        args.expenses = vec!["1".to_string(); 5];

        let inputs = profit_inputs(&args).unwrap();

        assert!(inputs.expense_lines.flat().iter().all(|l| l.amount == "1"));
    }
}
