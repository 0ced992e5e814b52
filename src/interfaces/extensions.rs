// ============================================================================
// Extension Traits
// Method-call syntax for Metric conversions on numbers and strings
// ============================================================================

use crate::format::{to_metric, FormatOptions};
use crate::numeric::MetricResult;
use crate::parse::from_metric;

/// Format a number as a Metric numeral (`1500.to_metric(None, None)` -> `"1.5k"`).
///
/// Integers are converted to `f64` first; integers above 2^53 lose precision
/// the same way an `as f64` cast does.
pub trait ToMetric {
    /// See [`to_metric`](crate::format::to_metric).
    fn to_metric(&self, options: Option<FormatOptions>, decimals: Option<u32>)
        -> MetricResult<String>;
}

/// Parse a Metric numeral (`"1.5k".from_metric()` -> `1500.0`).
pub trait FromMetric {
    /// See [`from_metric`](crate::parse::from_metric).
    fn from_metric(&self) -> MetricResult<f64>;
}

macro_rules! impl_to_metric {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToMetric for $t {
                #[inline]
                fn to_metric(
                    &self,
                    options: Option<FormatOptions>,
                    decimals: Option<u32>,
                ) -> MetricResult<String> {
                    to_metric(*self as f64, options, decimals)
                }
            }
        )*
    };
}

impl_to_metric!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromMetric for str {
    #[inline]
    fn from_metric(&self) -> MetricResult<f64> {
        from_metric(self)
    }
}

impl FromMetric for String {
    #[inline]
    fn from_metric(&self) -> MetricResult<f64> {
        from_metric(self.as_str())
    }
}

/// `None` is the absent-input case and yields `NullInput`.
impl<T: AsRef<str>> FromMetric for Option<T> {
    #[inline]
    fn from_metric(&self) -> MetricResult<f64> {
        let input: Option<&str> = self.as_ref().map(AsRef::as_ref);
        from_metric(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::MetricError;

    #[test]
    fn test_numeric_receivers() {
        assert_eq!(1000i32.to_metric(None, None).unwrap(), "1k");
        assert_eq!(1500u64.to_metric(None, None).unwrap(), "1.5k");
        assert_eq!((-2_000_000i64).to_metric(None, None).unwrap(), "-2M");
        assert_eq!(0.25f64.to_metric(None, None).unwrap(), "250m");
        assert_eq!(0.5f32.to_metric(None, None).unwrap(), "500m");
        assert_eq!(0usize.to_metric(None, None).unwrap(), "0");
    }

    #[test]
    fn test_numeric_receiver_options() {
        assert_eq!(
            1000i32.to_metric(Some(FormatOptions::USE_NAME), None).unwrap(),
            "1kilo"
        );
        assert_eq!(
            1000u32
                .to_metric(Some(FormatOptions::USE_SHORT_SCALE_WORD), None)
                .unwrap(),
            "1thousand"
        );
    }

    #[test]
    fn test_string_receivers() {
        assert_eq!("1k".from_metric().unwrap(), 1000.0);
        assert_eq!(String::from("2 M").from_metric().unwrap(), 2e6);
        assert_eq!(Some("3kilo").from_metric().unwrap(), 3000.0);
        assert_eq!(Some(String::from("4")).from_metric().unwrap(), 4.0);
    }

    #[test]
    fn test_none_receiver() {
        let missing: Option<&str> = None;
        assert_eq!(missing.from_metric(), Err(MetricError::NullInput));

        let missing: Option<String> = None;
        assert_eq!(missing.from_metric(), Err(MetricError::NullInput));
    }
}
