//! Decide which punctuation in a cleaned amount is the decimal mark
//!
//! The input to every predicate here is the "core" of an amount: ASCII
//! digits plus `.` and `,` only. Each predicate answers one question so the
//! decision chain in [`plan`] reads top to bottom.

/// What to do with the `.` and `,` marks of a core string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorPlan {
    /// No marks at all
    Plain,
    /// Every mark groups digits and is dropped
    Grouping,
    /// The last occurrence of this mark is the decimal point, every other
    /// mark is grouping
    Decimal(char),
}

fn count(core: &str, mark: char) -> usize {
    core.chars().filter(|&c| c == mark).count()
}

/// Two or more commas immediately followed by two digits, as in `1,23,456`
pub fn is_indian_style(core: &str) -> bool {
    let bytes = core.as_bytes();
    let pairs = bytes
        .windows(3)
        .filter(|w| w[0] == b',' && w[1].is_ascii_digit() && w[2].is_ascii_digit())
        .count();
    pairs >= 2
}

/// `mark` appears at least twice and `other` never appears
pub fn has_repeated_mark(core: &str, mark: char, other: char) -> bool {
    count(core, mark) >= 2 && count(core, other) == 0
}

/// With both marks present, the one that occurs last
pub fn last_separator_is_decimal(core: &str) -> Option<char> {
    let dot = core.rfind('.')?;
    let comma = core.rfind(',')?;
    Some(if dot > comma { '.' } else { ',' })
}

/// A single mark in the whole core, followed by exactly two digits
pub fn lone_separator_is_decimal(core: &str) -> Option<char> {
    if count(core, '.') + count(core, ',') != 1 {
        return None;
    }
    let pos = core.find(['.', ','])?;
    let mark = core[pos..].chars().next()?;
    let trailing = core[pos + 1..].chars().filter(char::is_ascii_digit).count();
    (trailing == 2).then_some(mark)
}

/// Run the decision chain. The Indian check must come before the generic
/// count and position checks.
pub fn plan(core: &str) -> SeparatorPlan {
    if !core.contains(['.', ',']) {
        return SeparatorPlan::Plain;
    }
    if is_indian_style(core) {
        return SeparatorPlan::Decimal('.');
    }
    if has_repeated_mark(core, '.', ',') || has_repeated_mark(core, ',', '.') {
        return SeparatorPlan::Grouping;
    }
    if let Some(mark) = last_separator_is_decimal(core) {
        return SeparatorPlan::Decimal(mark);
    }
    if let Some(mark) = lone_separator_is_decimal(core) {
        return SeparatorPlan::Decimal(mark);
    }
    SeparatorPlan::Grouping
}

fn digits_of(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

impl SeparatorPlan {
    /// Rewrite `core` into plain `digits[.digits]` text
    pub fn apply(self, core: &str) -> String {
        let split = match self {
            SeparatorPlan::Plain | SeparatorPlan::Grouping => None,
            SeparatorPlan::Decimal(mark) => core.rfind(mark),
        };
        let Some(pos) = split else {
            return digits_of(core);
        };

        let mut integer = digits_of(&core[..pos]);
        let fraction = digits_of(&core[pos + 1..]);
        if integer.is_empty() {
            integer.push('0');
        }
        if !fraction.is_empty() {
            integer.push('.');
            integer.push_str(&fraction);
        }
        integer
    }
}
