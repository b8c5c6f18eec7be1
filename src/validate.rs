// src/validate.rs

// Pure predicates over names, numeric literals and loop ranges.

use crate::tokens::is_space;

pub const NAME_MIN_LEN: usize = 1;
pub const NAME_MAX_LEN: usize = 20;

/// A name is 1 to 20 ASCII letters.
pub fn valid_variable_name(name: &str) -> bool {
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name.len())
        && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parses a floating-point literal the way C `strtod` reads one: leading
/// whitespace is skipped, `0x` hexadecimal forms are accepted, and every
/// remaining character must belong to the literal.
pub fn parse_double(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(is_space);
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        return parse_hex(hex).map(|v| if negative { -v } else { v });
    }
    text.parse::<f64>().ok()
}

// Hex digits with an optional point, then an optional binary exponent.
fn parse_hex(text: &str) -> Option<f64> {
    let (mantissa, exponent) = match text.find(['p', 'P']) {
        Some(i) => (&text[..i], Some(&text[i + 1..])),
        None => (text, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut value = 0.0f64;
    for c in whole.chars().chain(fraction.chars()) {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    let mut scale = -4 * i32::try_from(fraction.len()).ok()?;
    if let Some(exponent) = exponent {
        let unsigned = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        scale = scale.saturating_add(exponent.parse::<i32>().ok()?);
    }
    Some(value * 2f64.powi(scale))
}

/// The whole string must be a floating-point literal. Leading whitespace is
/// skipped; trailing whitespace is not.
pub fn valid_double(text: &str) -> bool {
    parse_double(text).is_some()
}

/// Increment must be nonzero and must move `start` towards `end`.
pub fn valid_loop_range(start: f64, increment: f64, end: f64) -> bool {
    if increment == 0.0 {
        return false;
    }
    if start < end && increment < 0.0 {
        return false;
    }
    if start > end && increment > 0.0 {
        return false;
    }
    true
}

/// Validates `[name, start, increment, end]`.
pub fn validate_loop_tokens(tokens: &[&str]) -> bool {
    let [name, start, increment, end] = tokens else {
        return false;
    };
    if !valid_variable_name(name) {
        return false;
    }
    match (parse_double(start), parse_double(increment), parse_double(end)) {
        (Some(start), Some(increment), Some(end)) => valid_loop_range(start, increment, end),
        _ => false,
    }
}
