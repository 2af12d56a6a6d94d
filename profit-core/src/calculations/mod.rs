//! Calculation engines for the profit calculator.
//!
//! Both engines are pure functions of the raw text a user typed. They never
//! fail: the percentage engine reports "no result" for unusable input, while
//! the profitability engine treats unusable input as zero.

pub mod common;
pub mod percentage;
pub mod profit;

pub use percentage::{compute_comparison, compute_percentage};
pub use profit::compute_profit;
