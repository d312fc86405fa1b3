//! Number parsing, rounding and formatting.
//!
//! Operands are kept as text, so every computation goes through
//! [`parse_operand`] on the way in and [`format_number`] on the way out.

use lazy_static::lazy_static;
use regex::Regex;

/// Results are rounded to this many decimal places.
const SCALE: f64 = 1e10;

lazy_static! {
    /// Longest numeric prefix of an operand, e.g. `12.5` in `12.5(`.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?"
    ).unwrap();

    static ref INFINITY_PREFIX: Regex = Regex::new(
        r"^[+-]?Infinity"
    ).unwrap();
}

/// Parse an operand the lenient way a display string is read back.
///
/// Leading whitespace is skipped and only the numeric prefix is used, so
/// `"12)"` reads as 12. Text with no numeric prefix (including the error
/// sentinel) yields NaN.
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim_start();

    if let Some(m) = INFINITY_PREFIX.find(text) {
        return if m.as_str().starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    NUMERIC_PREFIX
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Round to 10 decimal places to hide binary floating-point noise.
///
/// Halves round toward positive infinity. Values too large to scale are
/// returned unchanged; they carry no fractional digits anyway.
pub fn round_result(value: f64) -> f64 {
    let scaled = value * SCALE;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / SCALE
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Render a number in its default string form.
///
/// Integers have no fractional part, negative zero prints as `0`, and
/// magnitudes outside `[1e-6, 1e21)` use exponent notation (`1e+21`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Insert thousands separators into the integer part of a display string.
///
/// Anything that is not a plain decimal number (the error sentinel,
/// exponent forms, stray parentheses) is returned as-is.
pub fn group_digits(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, dec_part) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };

    let is_plain = !int_part.is_empty()
        && int_part.chars().all(|c| c.is_ascii_digit())
        && dec_part.chars().skip(1).all(|c| c.is_ascii_digit());
    if !is_plain {
        return text.to_string();
    }

    let mut result = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let grouped: String = result.chars().rev().collect();
    format!("{}{}{}", sign, grouped, dec_part)
}
