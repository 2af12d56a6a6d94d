use serde::Serialize;

use crate::error::ModelError;

/// Currency code used when nothing else has been selected.
pub const DEFAULT_CURRENCY_CODE: &str = "TRY";

/// A currency the calculator can label amounts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Every supported currency, in display order.
pub static CURRENCIES: [Currency; 7] = [
    Currency {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
    },
    Currency {
        code: "CAD",
        symbol: "C$",
        name: "Canadian Dollar",
    },
    Currency {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
    },
    Currency {
        code: "AUD",
        symbol: "A$",
        name: "Australian Dollar",
    },
    Currency {
        code: "SGD",
        symbol: "S$",
        name: "Singapore Dollar",
    },
    Currency {
        code: "TRY",
        symbol: "₺",
        name: "Turkish Lira",
    },
    Currency {
        code: "AED",
        symbol: "د.إ",
        name: "UAE Dirham",
    },
];

impl Currency {
    /// Looks up a currency by its code, ignoring ASCII case.
    pub fn find(code: &str) -> Option<&'static Currency> {
        let code = code.trim();
        CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Like [`Currency::find`], but an unknown code is an error.
    pub fn parse(code: &str) -> Result<&'static Currency, ModelError> {
        Self::find(code).ok_or_else(|| ModelError::UnknownCurrency(code.to_string()))
    }

    /// The currency used when no selection has been made.
    pub fn default_currency() -> &'static Currency {
        // TRY is always present in the table.
        &CURRENCIES[5]
    }
}

/// Returns the display symbol for `code`, falling back to the default
/// currency's symbol when the code is unknown.
pub fn currency_symbol(code: &str) -> &'static str {
    Currency::find(code)
        .unwrap_or_else(Currency::default_currency)
        .symbol
}
