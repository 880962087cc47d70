//! Display formatting for results and operands.
//!
//! Values print in their shortest round-trip form. Integral values keep a
//! trailing `.0`, very large or very small magnitudes switch to scientific
//! notation with a signed two-digit exponent (`1e+308`, `1.5e-07`), and
//! infinities print as `inf` / `-inf`.

use serde::Serializer;

/// Decimal exponents outside this range are shown in scientific notation.
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Format a value for display.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if !POSITIONAL_EXPONENTS.contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

/// Serialize finite values as JSON numbers and infinities as strings.
///
/// JSON has no representation for infinity, so `inf` / `-inf` are emitted
/// as their display text instead of `null`.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_number(*value))
    }
}
