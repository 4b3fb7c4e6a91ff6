use winnow::ascii::digit1;
use winnow::combinator::{alt, repeat};
use winnow::token::{any, one_of, take_while};
use winnow::{ModalResult, Parser};

/// A run of input characters as seen by the amount parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'s> {
    /// One or more ASCII digits
    Digits(&'s str),
    /// A possible grouping or decimal mark: `.`, `,` or `'`
    Mark(char),
    /// A minus sign
    Minus,
    /// One or more whitespace characters
    Space,
    /// Anything else: currency symbols, letters, stray punctuation
    Other(char),
}

pub fn parse_digits<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    digit1.map(Piece::Digits).parse_next(input)
}

pub fn parse_mark<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    one_of(['.', ',', '\'']).map(Piece::Mark).parse_next(input)
}

pub fn parse_minus<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    // U+2212 is the typographic minus
    one_of(['-', '\u{2212}']).value(Piece::Minus).parse_next(input)
}

pub fn parse_space<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    take_while(1.., char::is_whitespace)
        .value(Piece::Space)
        .parse_next(input)
}

pub fn parse_other<'s>(input: &mut &'s str) -> ModalResult<Piece<'s>> {
    any.map(Piece::Other).parse_next(input)
}

/// Parse the whole input into pieces
pub fn parse_pieces<'s>(input: &mut &'s str) -> ModalResult<Vec<Piece<'s>>> {
    repeat(
        0..,
        alt((parse_digits, parse_mark, parse_minus, parse_space, parse_other)),
    )
    .parse_next(input)
}

/// Split `text` into pieces. `parse_other` accepts any character, so this
/// only comes back empty for empty input.
pub fn scan(text: &str) -> Vec<Piece<'_>> {
    parse_pieces.parse(text).unwrap_or_default()
}
