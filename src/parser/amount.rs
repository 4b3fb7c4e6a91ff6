use tracing::{debug, trace};
use winnow::ascii::float;
use winnow::{ModalResult, Parser};

use crate::parser::separators;
use crate::parser::tokens::{Piece, scan};

/// Spaces used as grouping marks in European formatting that `trim` keeps
/// inside the text: no-break, narrow no-break and thin space
const GROUPING_SPACES: [char; 3] = ['\u{00A0}', '\u{202F}', '\u{2009}'];

/// Parse a human-written amount, falling back to `0.0`
///
/// Accepts currency symbols, any mix of `.`, `,`, `'` and space grouping,
/// accounting brackets and Indian grouping. Input with no digits yields
/// `0.0` instead of an error.
///
/// # Examples
/// ```
/// use currency_format::parse_currency_string;
///
/// assert_eq!(parse_currency_string("Rp 1.234.567,89"), 1234567.89);
/// assert_eq!(parse_currency_string("(1.234,56)"), -1234.56);
/// assert_eq!(parse_currency_string("abc"), 0.0);
/// ```
pub fn parse_currency_string(input: &str) -> f64 {
    parse_amount(input).unwrap_or(0.0)
}

/// Parse a human-written amount, returning `None` when no number is present
/// or the digits overflow a finite `f64`
///
/// Same heuristics as [`parse_currency_string`]; this is the variant the
/// formatter uses so that it can reject garbage instead of printing zero.
pub fn parse_amount(input: &str) -> Option<f64> {
    let normalized: String = input
        .trim()
        .chars()
        .filter(|c| !GROUPING_SPACES.contains(c))
        .collect();
    let (body, bracketed) = strip_brackets(&normalized);

    let pieces = scan(body);
    let Some(first_digit) = pieces.iter().position(|p| matches!(p, Piece::Digits(_))) else {
        debug!(input, "no digits in amount");
        return None;
    };
    let last_digit = pieces
        .iter()
        .rposition(|p| matches!(p, Piece::Digits(_)))
        .unwrap_or(first_digit);

    let dashed = pieces[..first_digit]
        .iter()
        .any(|p| matches!(p, Piece::Minus));
    let negative = bracketed || dashed;

    let core = core_of(&pieces, first_digit, last_digit);
    let plan = separators::plan(&core);
    let cleaned = plan.apply(&core);
    trace!(input, core = %core, ?plan, cleaned = %cleaned, "amount separators resolved");

    let Some(magnitude) = parse_plain_number
        .parse(cleaned.as_str())
        .ok()
        .filter(|v: &f64| v.is_finite())
    else {
        debug!(input, "amount does not fit in a finite number");
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Remove accounting brackets wrapping the whole text
fn strip_brackets(text: &str) -> (&str, bool) {
    let trimmed = text.trim();
    match trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => (inner.trim(), true),
        None => (trimmed, false),
    }
}

/// Digits and `.`/`,` marks between the first and last digit run. A mark
/// right before the first digit survives so that `.50` keeps its meaning;
/// other leading and all trailing punctuation is noise. Apostrophes and
/// spaces are grouping and are dropped here.
fn core_of(pieces: &[Piece<'_>], first_digit: usize, last_digit: usize) -> String {
    let mut core = String::new();
    if let Some(Piece::Mark(mark @ ('.' | ','))) = first_digit
        .checked_sub(1)
        .and_then(|i| pieces.get(i))
    {
        core.push(*mark);
    }
    for piece in &pieces[first_digit..=last_digit] {
        match piece {
            Piece::Digits(digits) => core.push_str(digits),
            Piece::Mark(mark @ ('.' | ',')) => core.push(*mark),
            _ => {}
        }
    }
    core
}

fn parse_plain_number(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}
