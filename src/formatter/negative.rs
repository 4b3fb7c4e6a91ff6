use crate::error::{CurrencyError, Result};
use crate::types::{NegativeFormat, NegativeStyle};

/// Mark an already formatted positive amount as negative
pub(super) fn apply_negative(formatted: String, format: &NegativeFormat) -> Result<String> {
    match format {
        NegativeFormat::Custom(custom) => custom.call(&formatted).ok_or(CurrencyError::CustomFormat),
        NegativeFormat::Style { style, space } => {
            let gap = if *space { " " } else { "" };
            Ok(match style {
                NegativeStyle::Dash => format!("-{gap}{formatted}"),
                NegativeStyle::Brackets => format!("({gap}{formatted}{gap})"),
                NegativeStyle::Abs => formatted,
            })
        }
    }
}
