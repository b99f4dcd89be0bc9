//! Reading human-entered sizes such as `"1.5GB"` back into byte counts.

use tracing::trace;

use crate::model::{Input, Unit};

/// Parse a size string into a byte count.
///
/// Accepts `[+-]digits[.digits][spaces]unit` with a case-insensitive unit of
/// `kb`, `mb`, `gb`, `tb` or `pb`. Anything else is read as a plain base-10 integer
/// prefix in bytes, so `"3.7"` yields `3`. Returns `None` when no digits lead the
/// string or the result does not fit in an `i64`.
pub fn parse(text: &str) -> Option<i64> {
    match split_number_and_unit(text) {
        Some((number, unit)) => {
            let amount: f64 = number.parse().ok()?;
            to_bytes(amount, unit)
        }
        None => {
            trace!(text, "no unit suffix, reading as an integer byte count");
            parse_integer_prefix(text)
        }
    }
}

/// Parse a number or text. Numbers are already byte counts and pass through
/// unchanged, except NaN which yields `None`.
pub fn parse_input<'a>(input: impl Into<Input<'a>>) -> Option<f64> {
    match input.into() {
        Input::Number(value) if value.is_nan() => None,
        Input::Number(value) => Some(value),
        Input::Text(text) => parse(text).map(|bytes| bytes as f64),
    }
}

/// Split `text` into its numeric literal and unit when it matches the strict grammar.
fn split_number_and_unit(text: &str) -> Option<(&str, Unit)> {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer_start = end;
    end += count_digits(&bytes[end..]);
    if end == integer_start {
        return None;
    }

    if bytes.get(end) == Some(&b'.') {
        let fraction = count_digits(&bytes[end + 1..]);
        if fraction == 0 {
            return None;
        }
        end += 1 + fraction;
    }

    let suffix = text[end..].trim_start_matches(' ');
    let unit = Unit::from_name(suffix).filter(|unit| *unit != Unit::B)?;
    Some((&text[..end], unit))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading whitespace, an optional sign, then as many digits as are present.
fn parse_integer_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = count_digits(unsigned.as_bytes());
    if digits == 0 {
        return None;
    }

    let sign = trimmed.len() - unsigned.len();
    trimmed[..sign + digits].parse().ok()
}

/// Floors toward negative infinity, so `-0.1` bytes becomes `-1`.
fn to_bytes(amount: f64, unit: Unit) -> Option<i64> {
    let bytes = (amount * unit.multiplier() as f64).floor();
    if bytes.is_finite() && bytes >= i64::MIN as f64 && bytes < i64::MAX as f64 {
        Some(bytes as i64)
    } else {
        None
    }
}
