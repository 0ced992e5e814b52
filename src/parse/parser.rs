// ============================================================================
// Metric Parser
// Metric numeral -> number ("1.5k" -> 1500)
// ============================================================================

use crate::numeric::{MetricError, MetricResult};
use crate::prefix::{UnitPrefix, PREFIXES};

/// Parse a Metric numeral into a number.
///
/// Accepted forms are `{number}`, `{number}{symbol}` and `{number} {symbol}`.
/// Full prefix names are first replaced by their symbol, so `"1kilo"` and
/// `"1 kilo"` parse like `"1k"`. Scale words (`"thousand"`) are not
/// recognised.
///
/// Name replacement is a plain substring replacement over the whole input,
/// applied in table order. Input that happens to contain a prefix name
/// somewhere other than the end is rewritten too and will usually be rejected.
///
/// # Errors
/// - `NullInput` if `input` is `None`
/// - `InvalidNumeral` if the trimmed input is empty, or is not a finite decimal
///   number optionally followed by a known symbol
///
/// # Example
/// ```
/// use metric_numeral::parse::from_metric;
///
/// assert_eq!(from_metric("1.5k").unwrap(), 1500.0);
/// assert_eq!(from_metric("100 m").unwrap(), 0.1);
/// assert_eq!(from_metric("2 mega").unwrap(), 2e6);
/// assert!(from_metric(None::<&str>).is_err());
/// ```
pub fn from_metric<'a>(input: impl Into<Option<&'a str>>) -> MetricResult<f64> {
    let input = input.into().ok_or(MetricError::NullInput)?;
    let cleaned = clean_representation(input)?;
    build_number(input, &cleaned)
}

/// Whether `input` is a decimal number, optionally followed by one symbol
/// from the prefix table. Whitespace around the number is ignored.
///
/// Names are not substituted here; `"1kilo"` is not a valid numeral by
/// this check alone.
pub fn is_valid_metric_numeral(input: &str) -> bool {
    let Some(last) = input.chars().last() else {
        return false;
    };

    let number = if UnitPrefix::from_symbol(last).is_some() {
        &input[..input.len() - last.len_utf8()]
    } else {
        input
    };

    parse_decimal(number).is_some()
}

/// Replace every prefix name in `input` by its symbol (`"kilo"` -> `"k"`).
pub fn replace_names_by_symbols(input: &str) -> String {
    PREFIXES.iter().fold(input.to_string(), |acc, prefix| {
        if acc.contains(prefix.name) {
            let mut buf = [0u8; 4];
            acc.replace(prefix.name, prefix.symbol.encode_utf8(&mut buf))
        } else {
            acc
        }
    })
}

// ============================================================================
// Internals
// ============================================================================

/// Trim, substitute names, validate, and drop internal spaces.
fn clean_representation(input: &str) -> MetricResult<String> {
    let replaced = replace_names_by_symbols(input.trim());

    if replaced.is_empty() || !is_valid_metric_numeral(&replaced) {
        tracing::debug!(input, "rejecting invalid Metric numeral");
        return Err(MetricError::InvalidNumeral(input.to_string()));
    }

    Ok(replaced.replace(' ', ""))
}

fn build_number(input: &str, cleaned: &str) -> MetricResult<f64> {
    let invalid = || MetricError::InvalidNumeral(input.to_string());

    match cleaned.chars().last() {
        Some(last) if last.is_alphabetic() => {
            let prefix = UnitPrefix::from_symbol(last).ok_or_else(invalid)?;
            let number = parse_decimal(&cleaned[..cleaned.len() - last.len_utf8()])
                .ok_or_else(invalid)?;
            Ok(prefix.apply(number))
        },
        Some(_) => parse_decimal(cleaned).ok_or_else(invalid),
        None => Err(invalid()),
    }
}

/// Finite `f64` from a trimmed decimal string. `inf` and `NaN` are rejected.
#[inline]
fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::MICRO_SIGN;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= b.abs() * 1e-12
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(from_metric("123").unwrap(), 123.0);
        assert_eq!(from_metric("  42  ").unwrap(), 42.0);
        assert_eq!(from_metric("-0.5").unwrap(), -0.5);
        assert_eq!(from_metric("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(from_metric("1k").unwrap(), 1000.0);
        assert_eq!(from_metric("1.5M").unwrap(), 1.5e6);
        assert_eq!(from_metric("-2.5k").unwrap(), -2500.0);
        assert_eq!(from_metric("100m").unwrap(), 0.1);
        assert_eq!(from_metric("1μ").unwrap(), 1e-6);
        assert_eq!(from_metric("3n").unwrap(), 3e-9);
        assert!(approx_eq(from_metric("2Y").unwrap(), 2e24));
        assert!(approx_eq(from_metric("1y").unwrap(), 1e-24));
    }

    #[test]
    fn test_symbol_with_space() {
        assert_eq!(from_metric("1 k").unwrap(), 1000.0);
        assert_eq!(from_metric(" 2.5   G ").unwrap(), 2.5e9);
    }

    #[test]
    fn test_micro_sign_alias() {
        let input = format!("5{}", MICRO_SIGN);
        assert_eq!(from_metric(input.as_str()).unwrap(), 5e-6);
    }

    #[test]
    fn test_names() {
        assert_eq!(from_metric("1kilo").unwrap(), from_metric("1k").unwrap());
        assert_eq!(from_metric("1 kilo").unwrap(), 1000.0);
        assert_eq!(from_metric("4 mega").unwrap(), 4e6);
        assert_eq!(from_metric("7micro").unwrap(), 7e-6);
        assert_eq!(from_metric("250 milli").unwrap(), 0.25);
    }

    #[test]
    fn test_scale_words_are_not_names() {
        assert!(matches!(
            from_metric("1 thousand"),
            Err(MetricError::InvalidNumeral(_))
        ));
    }

    #[test]
    fn test_null_input() {
        assert_eq!(from_metric(None::<&str>), Err(MetricError::NullInput));
    }

    #[test]
    fn test_invalid_input() {
        for input in ["", "   ", "abc", "k", "1x", "1kk", "1 0k", "inf", "NaN", "1..5k"] {
            assert!(
                matches!(from_metric(input), Err(MetricError::InvalidNumeral(_))),
                "expected rejection of {:?}",
                input
            );
        }
    }

    #[test]
    fn test_invalid_error_carries_original_input() {
        assert_eq!(
            from_metric(" abc "),
            Err(MetricError::InvalidNumeral(" abc ".to_string()))
        );
    }

    #[test]
    fn test_is_valid_metric_numeral() {
        assert!(is_valid_metric_numeral("1k"));
        assert!(is_valid_metric_numeral("1 k"));
        assert!(is_valid_metric_numeral("12.5"));
        assert!(is_valid_metric_numeral("3μ"));

        assert!(!is_valid_metric_numeral(""));
        assert!(!is_valid_metric_numeral("1kilo"));
        assert!(!is_valid_metric_numeral("1K"));
        assert!(!is_valid_metric_numeral("m"));
    }

    #[test]
    fn test_replace_names_by_symbols() {
        assert_eq!(replace_names_by_symbols("1kilo"), "1k");
        assert_eq!(replace_names_by_symbols("2 nano"), "2 n");
        assert_eq!(replace_names_by_symbols("3 micro"), "3 μ");
        assert_eq!(replace_names_by_symbols("42"), "42");
    }
}
