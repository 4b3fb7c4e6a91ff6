use crate::types::RoundingMode;

/// Bring a finite, non-negative `magnitude` to `total_decimal` digits and
/// split it into integer and fractional digit strings. The fraction is always
/// exactly `total_decimal` digits long.
///
/// Rounding works on the shortest decimal representation of the value, not
/// on `magnitude * 10^total_decimal`: scaling loses the last digits at large
/// magnitudes and can overflow to infinity.
pub(super) fn split_rounded(magnitude: f64, total_decimal: u32, mode: RoundingMode) -> (String, String) {
    let places = total_decimal as usize;
    let text = magnitude.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut kept: String = fraction.chars().take(places).collect();
    while kept.len() < places {
        kept.push('0');
    }
    let rest = fraction.get(places..).unwrap_or("");

    let round_up = match mode {
        RoundingMode::Round => rest.starts_with(['5', '6', '7', '8', '9']),
        RoundingMode::Ceil => rest.bytes().any(|b| b != b'0'),
        RoundingMode::Floor | RoundingMode::Truncate => false,
    };

    if round_up {
        increment(integer, &kept)
    } else {
        (integer.to_string(), kept)
    }
}

/// Add one unit in the last kept place, carrying into the integer part
fn increment(integer: &str, fraction: &str) -> (String, String) {
    let mut digits: Vec<u8> = integer.bytes().chain(fraction.bytes()).collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let split = digits.len() - fraction.len();
    let text = String::from_utf8_lossy(&digits);
    (text[..split].to_string(), text[split..].to_string())
}
