// ============================================================================
// Numeric Module
// Error taxonomy and low-level number rendering shared by formatter and parser
// ============================================================================
//
// This module provides:
// - MetricError: Error types for Metric conversions
// - round_half_even: Decimal-backed rounding to a number of fractional digits
// - format_significant: Fixed-width significant-digit rendering
//
// Design principles:
// - All fallible operations return Result (no panics)
// - Rounding midpoints are decided in decimal, not binary

mod errors;
mod rounding;

pub use errors::{MetricError, MetricResult};
pub use rounding::{
    format_significant, round_half_even, to_significant, MAX_DECIMALS, SIGNIFICANT_DIGITS,
};
