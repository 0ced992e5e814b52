// ============================================================================
// Metric Formatter
// Number -> Metric numeral ("1500" -> "1.5k")
// ============================================================================

use super::options::{FormatOptions, UnitText};
use crate::numeric::{
    format_significant, round_half_even, to_significant, MetricError, MetricResult,
    SIGNIFICANT_DIGITS,
};
use crate::prefix::{is_in_range, UnitPrefix, MAX_STEP};
use std::borrow::Cow;

/// Format `value` as a Metric numeral.
///
/// - `0` is returned as `"0"` with no unit and no separator.
/// - Magnitudes in `[1, 1000)` are returned without unit text (but with the
///   trailing separator if `with_space` is set).
/// - Everything else is scaled into `[1, 1000)` and followed by the prefix
///   text chosen by `options`. If rounding to `decimals` pushes the scaled
///   magnitude to 1000, the next prefix up is used instead.
///
/// # Errors
/// `OutOfRange` if `|value| >= 1e27`, `0 < |value| <= 1e-27`, or `value` is
/// not finite.
///
/// # Example
/// ```
/// use metric_numeral::format::{to_metric, FormatOptions};
///
/// assert_eq!(to_metric(1500.0, None, None).unwrap(), "1.5k");
/// assert_eq!(to_metric(0.001, Some(FormatOptions::USE_NAME), None).unwrap(), "1milli");
/// assert_eq!(to_metric(999_999.9, None, Some(0)).unwrap(), "1M");
/// ```
pub fn to_metric(
    value: f64,
    options: Option<FormatOptions>,
    decimals: Option<u32>,
) -> MetricResult<String> {
    if value == 0.0 {
        return Ok(value.to_string());
    }

    if !is_in_range(value) {
        tracing::debug!(value, "rejecting value outside the Metric range");
        return Err(MetricError::OutOfRange(value));
    }

    let options = options.unwrap_or_default();
    let step = magnitude_step(value);

    if step == 0 {
        let rounded = decimals.map_or(value, |d| round_half_even(value, d));
        return Ok(with_separator(rounded.to_string(), &options));
    }

    Ok(build_prefixed(value, step, &options, decimals))
}

/// Textual form of `prefix` selected by `options`.
///
/// Name wins over short-scale word, which wins over long-scale word; with
/// none of them set the bare symbol is returned.
pub fn unit_text(prefix: &UnitPrefix, options: &FormatOptions) -> Cow<'static, str> {
    match options.unit_text() {
        UnitText::Name => Cow::Borrowed(prefix.name),
        UnitText::ShortScaleWord => Cow::Borrowed(prefix.short_scale_word),
        UnitText::LongScaleWord => Cow::Borrowed(prefix.long_scale_word()),
        UnitText::Symbol => Cow::Owned(prefix.symbol.to_string()),
    }
}

// ============================================================================
// Exponent Arithmetic
// ============================================================================

/// Power-of-1000 bucket for a non-zero in-range value, clamped to the table.
fn magnitude_step(value: f64) -> i32 {
    let magnitude = value.abs();
    let mut step = (magnitude.log10() / 3.0).floor() as i32;

    // log10 can land an ulp short of an exact power of 1000
    if step < MAX_STEP && scale_to_step(magnitude, step + 1) >= 1.0 {
        step += 1;
    }

    if step.abs() > MAX_STEP {
        tracing::trace!(value, step, "clamping magnitude to the prefix table");
    }
    step.clamp(-MAX_STEP, MAX_STEP)
}

/// `value * 1000^(-step)`, dividing for positive steps.
#[inline]
fn scale_to_step(value: f64, step: i32) -> f64 {
    if step >= 0 {
        value / 1000f64.powi(step)
    } else {
        value * 1000f64.powi(-step)
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn build_prefixed(
    value: f64,
    mut step: i32,
    options: &FormatOptions,
    decimals: Option<u32>,
) -> String {
    let mut scaled = scale_to_step(value, step);
    if let Some(d) = decimals {
        scaled = round_half_even(scaled, d);
    }

    if to_significant(scaled.abs(), SIGNIFICANT_DIGITS) >= 1000.0 && step < MAX_STEP {
        scaled /= 1000.0;
        step += 1;
        tracing::trace!(value, step, "rounded magnitude rolled over to the next prefix");
    }

    let digits = format_significant(scaled, SIGNIFICANT_DIGITS);
    let prefix = match UnitPrefix::from_step(step) {
        Some(prefix) => prefix,
        // Rolled over from milli into the unprefixed bucket
        None => return with_separator(digits, options),
    };

    let mut out = with_separator(digits, options);
    out.push_str(&unit_text(prefix, options));
    out
}

#[inline]
fn with_separator(mut digits: String, options: &FormatOptions) -> String {
    if options.with_space {
        digits.push(' ');
    }
    digits
}
