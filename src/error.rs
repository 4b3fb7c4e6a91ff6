//! Error type for currency formatting
//!
//! Parsing never fails, so every variant here comes from formatting or
//! from loading option sets.

use thiserror::Error;

/// Errors raised while validating options or formatting a value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurrencyError {
    /// An option has a value outside of what the formatter accepts
    #[error("invalid option `{option}`: {reason}")]
    InvalidOption {
        /// Name of the offending option
        option: &'static str,
        /// What was wrong with it
        reason: String,
    },
    /// The value to format is not a usable number
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// A custom negative formatter declined to produce output
    #[error("custom negative formatter did not return a string")]
    CustomFormat,
    /// The requested preset does not exist
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    /// An option table could not be read
    #[error("error reading options: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CurrencyError>;
