//! Type definitions for the currency formatter
//!
//! This module defines the option set accepted by `format_currency` and the
//! small enums it is built from. Every option has a default constant, and a
//! whole option set can be deserialized from a partial TOML table.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{CurrencyError, Result};

/// Default grouping mark for the integer part
pub const DEFAULT_SEPARATOR: &str = ".";
/// Default decimal mark
pub const DEFAULT_SEPARATOR_DECIMALS: &str = ",";
/// Default number of decimal digits
pub const DEFAULT_TOTAL_DECIMAL: u32 = 2;
/// Largest accepted `total_decimal`; an f64 carries no digits past this
pub const MAX_TOTAL_DECIMAL: u32 = 15;
/// Grouping mark forced by Indian formatting
pub const INDIAN_SEPARATOR: &str = ",";
/// Decimal mark forced by Indian formatting
pub const INDIAN_SEPARATOR_DECIMALS: &str = ".";

/// How a value is brought to `total_decimal` digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RoundingRepr")]
pub enum RoundingMode {
    /// Round half up on the decimal digits
    #[default]
    Round,
    /// Round towards positive infinity
    Ceil,
    /// Round towards negative infinity
    Floor,
    /// Cut extra digits without rounding
    Truncate,
}

impl FromStr for RoundingMode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round" => Ok(RoundingMode::Round),
            "ceil" => Ok(RoundingMode::Ceil),
            "floor" => Ok(RoundingMode::Floor),
            "truncate" | "false" => Ok(RoundingMode::Truncate),
            other => Err(CurrencyError::InvalidOption {
                option: "rounded_decimal",
                reason: format!("expected round, ceil, floor or false, got '{other}'"),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoundingRepr {
    Flag(bool),
    Name(String),
}

impl TryFrom<RoundingRepr> for RoundingMode {
    type Error = CurrencyError;

    fn try_from(repr: RoundingRepr) -> Result<Self> {
        match repr {
            RoundingRepr::Flag(false) => Ok(RoundingMode::Truncate),
            RoundingRepr::Flag(true) => Err(CurrencyError::InvalidOption {
                option: "rounded_decimal",
                reason: "only `false` is accepted as a boolean".to_string(),
            }),
            RoundingRepr::Name(name) => name.parse(),
        }
    }
}

/// Built-in ways of marking a negative amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    /// Leading minus sign, e.g. `-1.500`
    #[default]
    Dash,
    /// Accounting brackets, e.g. `(1.500)`
    Brackets,
    /// No marker at all
    Abs,
}

impl FromStr for NegativeStyle {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dash" => Ok(NegativeStyle::Dash),
            "brackets" => Ok(NegativeStyle::Brackets),
            "abs" => Ok(NegativeStyle::Abs),
            other => Err(CurrencyError::InvalidOption {
                option: "negative_format",
                reason: format!("expected dash, brackets or abs, got '{other}'"),
            }),
        }
    }
}

/// Caller supplied renderer for negative amounts
///
/// Receives the fully formatted positive string and returns the text that
/// replaces it. Returning `None` fails the format call.
#[derive(Clone)]
pub struct CustomNegative(Arc<dyn Fn(&str) -> Option<String> + Send + Sync>);

impl CustomNegative {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        CustomNegative(Arc::new(f))
    }

    pub(crate) fn call(&self, formatted: &str) -> Option<String> {
        (self.0)(formatted)
    }
}

impl fmt::Debug for CustomNegative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomNegative(..)")
    }
}

impl PartialEq for CustomNegative {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// How negative values are rendered
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "NegativeFormatRepr")]
pub enum NegativeFormat {
    /// One of the built-in styles, optionally with a space between the
    /// marker and the digits
    Style { style: NegativeStyle, space: bool },
    /// Output replaced by a callback
    Custom(CustomNegative),
}

impl NegativeFormat {
    /// Built-in style without spacing
    pub fn style(style: NegativeStyle) -> Self {
        NegativeFormat::Style {
            style,
            space: false,
        }
    }

    /// Built-in style with a space after the marker
    pub fn spaced(style: NegativeStyle) -> Self {
        NegativeFormat::Style { style, space: true }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        NegativeFormat::Custom(CustomNegative::new(f))
    }
}

impl Default for NegativeFormat {
    fn default() -> Self {
        NegativeFormat::style(NegativeStyle::Dash)
    }
}

impl From<NegativeStyle> for NegativeFormat {
    fn from(style: NegativeStyle) -> Self {
        NegativeFormat::style(style)
    }
}

impl FromStr for NegativeFormat {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<NegativeStyle>().map(NegativeFormat::style)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NegativeFormatRepr {
    Name(String),
    Table {
        #[serde(default)]
        style: Option<String>,
        #[serde(default)]
        space: bool,
    },
}

impl TryFrom<NegativeFormatRepr> for NegativeFormat {
    type Error = CurrencyError;

    fn try_from(repr: NegativeFormatRepr) -> Result<Self> {
        match repr {
            NegativeFormatRepr::Name(name) => name.parse(),
            NegativeFormatRepr::Table { style, space } => {
                let style = match style {
                    Some(name) => name.parse()?,
                    None => NegativeStyle::default(),
                };
                Ok(NegativeFormat::Style { style, space })
            }
        }
    }
}

/// Options accepted by `format_currency`
///
/// Field names follow the option names of the formatter's public contract.
/// `suffix_currency` is, despite its name, written in front of the digits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatCurrencyOptions {
    /// Grouping mark for the integer part
    pub separator: String,
    /// Decimal mark
    pub separator_decimals: String,
    /// Whether a decimal part is emitted at all
    pub decimal: bool,
    /// Number of decimal digits
    pub total_decimal: u32,
    /// Text appended after the decimal digits, e.g. `.-`
    pub suffix_decimal: String,
    /// Whether `suffix_decimal` is appended
    pub end_decimal: bool,
    /// Rounding applied at `total_decimal` digits
    pub rounded_decimal: RoundingMode,
    /// Rendering of negative values
    pub negative_format: NegativeFormat,
    /// Group as 12,34,567 and force `,`/`.` separators
    pub indian_format: bool,
    /// Text written before the amount, e.g. `Rp `
    pub suffix_currency: String,
}

impl Default for FormatCurrencyOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            separator_decimals: DEFAULT_SEPARATOR_DECIMALS.to_string(),
            decimal: false,
            total_decimal: DEFAULT_TOTAL_DECIMAL,
            suffix_decimal: String::new(),
            end_decimal: true,
            rounded_decimal: RoundingMode::default(),
            negative_format: NegativeFormat::default(),
            indian_format: false,
            suffix_currency: String::new(),
        }
    }
}

impl FormatCurrencyOptions {
    /// Check every option before any formatting work is done
    ///
    /// `total_decimal` may not exceed [`MAX_TOTAL_DECIMAL`], and neither
    /// separator may contain an ASCII digit or `-`, since either would make
    /// the output unreadable by the amount parser.
    pub fn validate(&self) -> Result<()> {
        if self.total_decimal > MAX_TOTAL_DECIMAL {
            return Err(CurrencyError::InvalidOption {
                option: "total_decimal",
                reason: format!(
                    "{} exceeds the maximum of {MAX_TOTAL_DECIMAL}",
                    self.total_decimal
                ),
            });
        }
        check_mark("separator", &self.separator)?;
        check_mark("separator_decimals", &self.separator_decimals)?;
        Ok(())
    }

    /// Grouping and decimal marks actually used, after the Indian override
    pub fn effective_separators(&self) -> (&str, &str) {
        if self.indian_format {
            (INDIAN_SEPARATOR, INDIAN_SEPARATOR_DECIMALS)
        } else {
            (self.separator.as_str(), self.separator_decimals.as_str())
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_separator_decimals(mut self, separator: impl Into<String>) -> Self {
        self.separator_decimals = separator.into();
        self
    }

    pub fn with_decimal(mut self, decimal: bool) -> Self {
        self.decimal = decimal;
        self
    }

    pub fn with_total_decimal(mut self, total_decimal: u32) -> Self {
        self.total_decimal = total_decimal;
        self
    }

    pub fn with_suffix_decimal(mut self, suffix: impl Into<String>) -> Self {
        self.suffix_decimal = suffix.into();
        self
    }

    pub fn with_end_decimal(mut self, end_decimal: bool) -> Self {
        self.end_decimal = end_decimal;
        self
    }

    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounded_decimal = mode;
        self
    }

    pub fn with_negative_format(mut self, format: impl Into<NegativeFormat>) -> Self {
        self.negative_format = format.into();
        self
    }

    pub fn with_indian_format(mut self, indian: bool) -> Self {
        self.indian_format = indian;
        self
    }

    /// Set the text written in front of the amount
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.suffix_currency = currency.into();
        self
    }
}

fn check_mark(option: &'static str, mark: &str) -> Result<()> {
    if mark.chars().any(|c| c.is_ascii_digit() || c == '-') {
        return Err(CurrencyError::InvalidOption {
            option,
            reason: format!("'{mark}' must not contain digits or '-'"),
        });
    }
    Ok(())
}

/// A value handed to the formatter, either already numeric or still text
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Number(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::Number(f64::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount::Number(f64::from(value))
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}
