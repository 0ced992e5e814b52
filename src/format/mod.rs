// ============================================================================
// Format Module
// Number -> Metric numeral conversion and its configuration
// ============================================================================

pub mod config;
mod formatter;
mod options;

pub use config::MetricFormat;
pub use formatter::{to_metric, unit_text};
pub use options::{FormatOptions, UnitText};
