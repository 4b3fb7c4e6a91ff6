//! Currency formatting module
//!
//! This module renders numbers, or amount strings run through the parser,
//! as grouped currency text. The main entry point is `format_currency`.

mod grouping;
mod negative;
mod rounding;

use tracing::debug;

use crate::error::{CurrencyError, Result};
use crate::parser::parse_amount;
use crate::types::{Amount, FormatCurrencyOptions};

use grouping::insert_separators;
use negative::apply_negative;
use rounding::split_rounded;

/// Format a value as currency text
///
/// Options are validated before anything else. A text value is parsed with
/// the same heuristics as `parse_currency_string`, but text without a number
/// in it is rejected instead of being read as zero.
///
/// # Arguments
/// * `value` - A number or an amount string
/// * `options` - Grouping, decimals, rounding and sign rendering
///
/// # Returns
/// * `Result<String, CurrencyError>` - The formatted amount, or why it could not be produced
///
/// # Examples
/// ```
/// use currency_format::{format_currency, FormatCurrencyOptions, RoundingMode};
///
/// let options = FormatCurrencyOptions::default()
///     .with_currency("Rp ")
///     .with_decimal(true)
///     .with_rounding(RoundingMode::Floor);
/// assert_eq!(format_currency(15300000.759, &options).unwrap(), "Rp 15.300.000,75");
/// ```
pub fn format_currency(value: impl Into<Amount>, options: &FormatCurrencyOptions) -> Result<String> {
    options.validate()?;

    let number = resolve_amount(value.into())?;
    let is_negative = number < 0.0;

    let (integer, fraction) =
        split_rounded(number.abs(), options.total_decimal, options.rounded_decimal);

    let (separator, separator_decimals) = options.effective_separators();
    if options.indian_format
        && (options.separator != separator || options.separator_decimals != separator_decimals)
    {
        debug!(
            separator = %options.separator,
            separator_decimals = %options.separator_decimals,
            "indian format overrides separators"
        );
    }

    let mut result = String::new();
    if !options.suffix_currency.trim().is_empty() {
        result.push_str(&options.suffix_currency);
    }
    result.push_str(&insert_separators(&integer, separator, options.indian_format));

    if options.decimal && options.total_decimal > 0 {
        result.push_str(separator_decimals);
        result.push_str(&fraction);
        if options.end_decimal {
            result.push_str(&options.suffix_decimal);
        }
    }

    if is_negative {
        apply_negative(result, &options.negative_format)
    } else {
        Ok(result)
    }
}

/// Format a value with the default options: `.` grouping, no decimals
pub fn format_currency_default(value: impl Into<Amount>) -> Result<String> {
    format_currency(value, &FormatCurrencyOptions::default())
}

fn resolve_amount(amount: Amount) -> Result<f64> {
    match amount {
        Amount::Number(n) if n.is_finite() => Ok(n),
        Amount::Number(n) => Err(CurrencyError::InvalidValue(format!("{n} is not a finite number"))),
        Amount::Text(text) => parse_amount(&text)
            .filter(|n| n.is_finite())
            .ok_or_else(|| CurrencyError::InvalidValue(format!("'{text}' does not contain a finite number"))),
    }
}
