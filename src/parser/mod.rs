//! Amount parsing module
//!
//! This module turns messy, locale-ambiguous amount strings into numbers.
//! The main entry points are `parse_currency_string` and `parse_amount`.

mod amount;
pub mod separators;
mod tokens;

pub use amount::{parse_amount, parse_currency_string};
