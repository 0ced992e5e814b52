// ============================================================================
// Interfaces Module
// Extension traits exposing conversions as methods
// ============================================================================

mod extensions;

pub use extensions::{FromMetric, ToMetric};
