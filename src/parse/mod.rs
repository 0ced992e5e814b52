// ============================================================================
// Parse Module
// Metric numeral -> number conversion
// ============================================================================

mod parser;

pub use parser::{from_metric, is_valid_metric_numeral, replace_names_by_symbols};
