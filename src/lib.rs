pub mod error;
pub mod formatter;
pub mod parser;
pub mod presets;
pub mod types;

// 导出主要 API
pub use error::CurrencyError;
pub use formatter::{format_currency, format_currency_default};
pub use parser::{parse_amount, parse_currency_string};
pub use presets::{get_preset, list_presets};
pub use types::*;
