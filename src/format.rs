//! Rendering byte counts as human-readable strings.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::model::{FormatOptions, Unit};

/// Most decimal places a byte count can be rendered with.
pub const MAX_DECIMAL_PLACES: usize = 100;

/// Format a byte count into a human-readable string such as `"1.5KB"`.
///
/// Returns `None` when `value` is infinite or NaN, or when more than
/// [`MAX_DECIMAL_PLACES`] decimals are requested. The sign of `value` is kept,
/// and the unit is chosen from the magnitude unless `options.unit` names a known one.
pub fn format(value: f64, options: &FormatOptions) -> Option<String> {
    if !value.is_finite() {
        debug!(value, "cannot format a non-finite byte count");
        return None;
    }
    if options.decimal_places > MAX_DECIMAL_PLACES {
        debug!(decimal_places = options.decimal_places, "too many decimal places requested");
        return None;
    }

    let (unit, label) = resolve_unit(value.abs(), options.unit.as_deref());
    let scaled = value / unit.multiplier() as f64;
    // Negative zero prints as "-0" otherwise.
    let scaled = if scaled == 0.0 { 0.0 } else { scaled };

    let fixed = format!("{:.*}", options.decimal_places, scaled);
    let number = if options.fixed_decimals { fixed.as_str() } else { strip_trailing_zeros(&fixed) };
    let number = if options.thousands_separator.is_empty() {
        Cow::Borrowed(number)
    } else {
        Cow::Owned(group_thousands(number, &options.thousands_separator))
    };

    Some(format!("{number}{}{label}", options.unit_separator))
}

/// A recognised forced unit keeps the caller's spelling; otherwise the unit is
/// picked by magnitude and labelled upper-case.
fn resolve_unit<'a>(magnitude: f64, forced: Option<&'a str>) -> (Unit, Cow<'a, str>) {
    if let Some(name) = forced.filter(|name| !name.is_empty()) {
        if let Some(unit) = Unit::from_name(name) {
            return (unit, Cow::Borrowed(name));
        }
        debug!(unit = name, "unknown unit requested, selecting by magnitude");
    }

    let unit = Unit::for_magnitude(magnitude);
    trace!(magnitude, %unit, "selected unit");
    (unit, Cow::Borrowed(unit.as_str()))
}

/// Drop trailing zero decimals: `"2.00"` becomes `"2"` and `"1.50"` becomes `"1.5"`.
///
/// A fraction with an interior zero, such as `"1.050"`, is returned unchanged.
fn strip_trailing_zeros(number: &str) -> &str {
    let Some(point) = number.find('.') else {
        return number;
    };

    let fraction = &number[point + 1..];
    let significant = fraction.trim_end_matches('0');
    if significant.is_empty() {
        &number[..point]
    } else if significant.len() < fraction.len() && !significant.contains('0') {
        &number[..point + 1 + significant.len()]
    } else {
        number
    }
}

/// Insert `separator` between every three digits of the integer part.
fn group_thousands(number: &str, separator: &str) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (number, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(number.len() + digits.len() / 3 * separator.len());
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
