// ============================================================================
// Prefix Module
// Immutable Metric prefix table and range limits
// ============================================================================

mod table;

pub use table::{is_in_range, UnitPrefix, BIG_LIMIT, MAX_STEP, MICRO_SIGN, PREFIXES, SMALL_LIMIT};
