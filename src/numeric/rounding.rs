// ============================================================================
// Rounding and Significant-Digit Rendering
// Midpoint-exact rounding through rust_decimal and fixed-width digit output
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest `decimals` value accepted by validated configurations.
pub const MAX_DECIMALS: u32 = 15;

/// Significant digits used when rendering a scaled Metric magnitude.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Round `value` to `decimals` fractional digits, midpoints to even.
///
/// The value is lifted into a `Decimal` first so that `2.5` and `0.125` are
/// treated as true midpoints rather than whatever their binary expansion says.
/// Falls back to scaled `f64` rounding if the value does not fit a `Decimal`.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| {
            let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
            (value * factor).round() / factor
        })
}

/// Round `value` to `digits` significant digits, returning an `f64`.
pub fn to_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let digits = digits.max(1);
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Render `value` with at most `digits` significant digits.
///
/// Trailing zeros are dropped. Fixed notation is used unless the decimal
/// exponent is below -5 or at least `digits`, in which case the output looks
/// like `1.5E+15` / `2E-07`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let digits = digits.max(1);

    let scientific = format!("{:.*e}", digits - 1, value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut significand: String = mantissa.chars().filter(|c| *c != '.').collect();
    while significand.len() > 1 && significand.ends_with('0') {
        significand.pop();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if exponent < -5 || exponent >= digits as i32 {
        let (head, tail) = significand.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return if tail.is_empty() {
            format!("{}{}E{}{:02}", sign, head, exp_sign, exponent.abs())
        } else {
            format!("{}{}.{}E{}{:02}", sign, head, tail, exp_sign, exponent.abs())
        };
    }

    let body = if exponent < 0 {
        let leading = "0".repeat((-exponent - 1) as usize);
        format!("0.{}{}", leading, significand)
    } else {
        let int_len = exponent as usize + 1;
        if significand.len() <= int_len {
            let padding = "0".repeat(int_len - significand.len());
            format!("{}{}", significand, padding)
        } else {
            let (int_part, frac_part) = significand.split_at(int_len);
            format!("{}.{}", int_part, frac_part)
        }
    };

    format!("{}{}", sign, body)
}
