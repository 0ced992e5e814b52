// ============================================================================
// Metric Numeral Library
// Bidirectional conversion between numbers and Metric-prefix numerals
// ============================================================================

//! # Metric Numeral
//!
//! Converts numbers to and from their Metric-prefix representation:
//! `1000` ↔ `"1k"`, `0.001` ↔ `"1m"`, `1.5e9` ↔ `"1.5G"`.
//!
//! ## Features
//!
//! - **Sixteen prefixes** from yocto (10^-24) to yotta (10^24)
//! - **Four unit-text forms**: symbol, full name, short-scale and long-scale words
//! - **Rounding** with promotion to the next prefix (`999999.9` → `"1M"`)
//! - **Parsing** of symbols and full prefix names (`"1 kilo"` → `1000`)
//! - **Extension traits** for method-call syntax on numbers and strings
//!
//! ## Example
//!
//! ```rust
//! use metric_numeral::prelude::*;
//!
//! // Number -> text
//! assert_eq!(to_metric(1500.0, None, None).unwrap(), "1.5k");
//! assert_eq!(
//!     1e9_f64.to_metric(Some(FormatOptions::WITH_SPACE | FormatOptions::USE_LONG_SCALE_WORD), None)
//!         .unwrap(),
//!     "1 milliard"
//! );
//!
//! // Text -> number
//! assert_eq!(from_metric("1.5k").unwrap(), 1500.0);
//! assert_eq!("250 milli".from_metric().unwrap(), 0.25);
//!
//! // Reusable configuration
//! let config = MetricFormat::named().with_decimals(1);
//! assert_eq!(config.format(1234.0).unwrap(), "1.2 kilo");
//! ```

pub mod format;
pub mod interfaces;
pub mod numeric;
pub mod parse;
pub mod prefix;

pub use format::to_metric;
pub use parse::from_metric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::format::{to_metric, FormatOptions, MetricFormat, UnitText};
    pub use crate::interfaces::{FromMetric, ToMetric};
    pub use crate::numeric::{MetricError, MetricResult};
    pub use crate::parse::from_metric;
    pub use crate::prefix::UnitPrefix;
}
