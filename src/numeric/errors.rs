// ============================================================================
// Metric Errors
// Error types for Metric numeral formatting and parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while converting to or from a Metric numeral.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Parser was handed an absent input
    NullInput,
    /// Input is empty or not a number optionally followed by a known symbol
    InvalidNumeral(String),
    /// Value cannot be expressed with the prefix table (|x| >= 1e27, 0 < |x| <= 1e-27, or non-finite)
    OutOfRange(f64),
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::NullInput => write!(f, "null input: a Metric numeral is required"),
            MetricError::InvalidNumeral(input) => {
                write!(f, "invalid Metric numeral: {:?}", input)
            },
            MetricError::OutOfRange(value) => write!(
                f,
                "value out of range: {} is outside the representable Metric interval",
                value
            ),
        }
    }
}

impl std::error::Error for MetricError {}

/// Result type alias for Metric conversions
pub type MetricResult<T> = Result<T, MetricError>;
