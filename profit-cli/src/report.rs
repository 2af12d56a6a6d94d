//! Text rendering of calculation results.
//!
//! Each report is a small wrapper that implements [`fmt::Display`], so the
//! binary can print it directly. Values are rounded to two decimals for
//! display only.

use std::fmt;

use profit_core::calculations::common::{parse_leading_number, parse_or_zero, round_half_up};
use profit_core::{
    CURRENCIES, ComparisonResult, Currency, PercentageResult, ProfitInputs, ProfitResult,
};

/// Formats a value with two decimals, e.g. `1234.5` as `1234.50`.
pub fn format_amount(value: f64) -> String {
    match round_half_up(value) {
        Some(rounded) => format!("{rounded:.2}"),
        None => value.to_string(),
    }
}

/// Formats a value with two decimals and comma thousands separators,
/// e.g. `1234567.891` as `1,234,567.89`.
pub fn format_grouped(value: f64) -> String {
    let plain = format_amount(value);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return plain;
    }

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats a unit count with thousands separators.
pub fn format_count(count: u32) -> String {
    group_digits(&count.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn profit_label(value: f64) -> &'static str {
    if value >= 0.0 { "profit" } else { "loss" }
}

// ─── percentage ──────────────────────────────────────────────────────────────

/// Report for the percentage calculator.
pub struct PercentageReport<'a> {
    pub number: &'a str,
    pub percentage: &'a str,
    pub result: Option<PercentageResult>,
}

impl fmt::Display for PercentageReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let Some(result) = self.result else {
            return writeln!(f, "No result: both the number and the percentage must be numeric.");
        };
        let basic = format_amount(result.basic_result);

        writeln!(f, "{}% of {} = {}", self.percentage, self.number, basic)?;
        writeln!(
            f,
            "Added:       {} ({} + {})",
            format_amount(result.add_result),
            self.number,
            basic
        )?;
        writeln!(
            f,
            "Subtracted:  {} ({} - {})",
            format_amount(result.subtract_result),
            self.number,
            basic
        )
    }
}

// ─── comparison ──────────────────────────────────────────────────────────────

/// Report for the two-number comparison.
pub struct ComparisonReport<'a> {
    pub a: &'a str,
    pub b: &'a str,
    pub result: Option<ComparisonResult>,
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let Some(result) = self.result else {
            return writeln!(f, "No result: both values must be numeric and B must not be zero.");
        };

        writeln!(
            f,
            "{} is %{} of {}",
            self.a,
            format_amount(result.percentage_of),
            self.b
        )?;
        writeln!(
            f,
            "Change from {} to {}: %{}",
            self.b,
            self.a,
            format_amount(result.change_rate)
        )
    }
}

// ─── profitability ───────────────────────────────────────────────────────────

/// Report for one profitability calculation.
///
/// The inputs are needed alongside the result to echo the typed percentages
/// and expense notes.
pub struct ProfitReport<'a> {
    pub inputs: &'a ProfitInputs,
    pub result: &'a ProfitResult,
    pub currency: &'a Currency,
}

impl ProfitReport<'_> {
    fn money(
        &self,
        value: f64,
    ) -> String {
        format!("{}{}", self.currency.symbol, format_amount(value))
    }

    fn grouped_money(
        &self,
        value: f64,
    ) -> String {
        format!("{}{}", self.currency.symbol, format_grouped(value))
    }

    fn write_cost_breakdown(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let inputs = self.inputs;
        let result = self.result;

        writeln!(f, "Total costs:       {}", self.money(result.total_costs))?;

        if parse_leading_number(&inputs.marketplace_fee_percentage).is_some_and(|fee| fee > 0.0) {
            writeln!(
                f,
                "  Marketplace fee: {} ({}%)",
                self.money(result.marketplace_fee_amount),
                inputs.marketplace_fee_percentage
            )?;
        }

        for (line, amount) in inputs
            .expense_lines
            .percentage()
            .iter()
            .zip(result.percentage_expense_amounts)
        {
            if line.is_annotated() {
                writeln!(
                    f,
                    "  {}: {} ({}%)",
                    line.note,
                    self.money(amount),
                    line.amount
                )?;
            }
        }

        let noted: Vec<_> = inputs
            .expense_lines
            .flat()
            .iter()
            .filter(|line| line.is_annotated())
            .collect();
        if !noted.is_empty() {
            writeln!(f, "  Other expense notes:")?;
            for line in noted {
                writeln!(
                    f,
                    "    • {}: {}",
                    line.note,
                    self.money(parse_or_zero(&line.amount))
                )?;
            }
        }
        Ok(())
    }

    fn write_volume_table(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Volume-based ROI analysis")?;
        writeln!(
            f,
            "{:<14} {:>18} {:>18} {:>18} {:>10}",
            "Units sold", "Total revenue", "Total costs", "Net profit", "ROI"
        )?;
        for scenario in &self.result.volume_analysis {
            writeln!(
                f,
                "{:<14} {:>18} {:>18} {:>18} {:>10}",
                format!("{} units", format_count(scenario.volume)),
                self.grouped_money(scenario.total_revenue),
                self.grouped_money(scenario.total_costs),
                self.grouped_money(scenario.profit),
                format!("%{}", format_amount(scenario.roi)),
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ProfitReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.result;

        self.write_cost_breakdown(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "Net profit/loss:   {} ({})",
            self.money(result.profit),
            profit_label(result.profit)
        )?;
        writeln!(
            f,
            "Profit margin:     %{} (net profit / sale price)",
            format_amount(result.profit_margin)
        )?;
        writeln!(
            f,
            "ROI:               %{} (net profit / total costs)",
            format_amount(result.roi)
        )?;
        writeln!(f)?;
        self.write_volume_table(f)
    }
}

// ─── currencies ──────────────────────────────────────────────────────────────

/// Table of every supported currency, marking the selected one.
pub struct CurrencyList<'a> {
    pub selected: &'a Currency,
}

impl fmt::Display for CurrencyList<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for currency in &CURRENCIES {
            let marker = if currency.code == self.selected.code { "*" } else { " " };
            writeln!(
                f,
                "{marker} {:<4} {:<4} {}",
                currency.code, currency.symbol, currency.name
            )?;
        }
        Ok(())
    }
}
