// ============================================================================
// Metric Format Configuration
// Reusable formatting settings with validation and presets
// ============================================================================

use super::formatter::to_metric;
use super::options::FormatOptions;
use crate::numeric::{MetricError, MetricResult, MAX_DECIMALS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stored combination of format flags and rounding.
///
/// Useful when the same rendering is applied to many values, or when the
/// settings come from a configuration file (enable the `serde` feature).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetricFormat {
    /// Separator and unit-text flags
    pub options: FormatOptions,

    /// Optional: Number of fractional digits to round the scaled value to
    /// None means no rounding
    pub decimals: Option<u32>,
}

impl MetricFormat {
    /// Create a configuration from flags and an optional rounding
    pub fn new(options: FormatOptions, decimals: Option<u32>) -> Self {
        Self { options, decimals }
    }

    /// Builder method: Separate number and unit text with a space
    pub fn with_space(mut self) -> Self {
        self.options.with_space = true;
        self
    }

    /// Builder method: Emit full prefix names
    pub fn with_name(mut self) -> Self {
        self.options.use_name = true;
        self
    }

    /// Builder method: Emit short-scale words
    pub fn with_short_scale_word(mut self) -> Self {
        self.options.use_short_scale_word = true;
        self
    }

    /// Builder method: Emit long-scale words
    pub fn with_long_scale_word(mut self) -> Self {
        self.options.use_long_scale_word = true;
        self
    }

    /// Builder method: Round the scaled value
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(decimals) = self.decimals {
            if decimals > MAX_DECIMALS {
                return Err(format!(
                    "Decimals must be at most {}, got {}",
                    MAX_DECIMALS, decimals
                ));
            }
        }

        if self.options.selector_count() > 1 {
            return Err(
                "At most one of use_name, use_short_scale_word, use_long_scale_word may be set"
                    .to_string(),
            );
        }

        Ok(())
    }

    /// Format `value` with these settings.
    ///
    /// Does not re-run [`validate`](Self::validate); an unvalidated
    /// configuration behaves exactly like the equivalent `to_metric` call.
    pub fn format(&self, value: f64) -> MetricResult<String> {
        to_metric(value, Some(self.options), self.decimals)
    }

    /// Format every value, stopping at the first error.
    pub fn format_all<I>(&self, values: I) -> MetricResult<Vec<String>>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().map(|v| self.format(v)).collect()
    }

    /// Format `value`, falling back to its plain `Display` form when it
    /// lies outside the representable range.
    pub fn format_lossy(&self, value: f64) -> String {
        match self.format(value) {
            Ok(text) => text,
            Err(MetricError::OutOfRange(_)) => value.to_string(),
            Err(err) => err.to_string(),
        }
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MetricFormat {
    /// `1.5k`
    pub fn symbol() -> Self {
        Self::default()
    }

    /// `1.5 k`
    pub fn spaced_symbol() -> Self {
        Self::default().with_space()
    }

    /// `1.5 kilo`
    pub fn named() -> Self {
        Self::default().with_space().with_name()
    }

    /// `1.5 billion` for 1.5e9
    pub fn short_scale_words() -> Self {
        Self::default().with_space().with_short_scale_word()
    }

    /// `1.5 milliard` for 1.5e9
    pub fn long_scale_words() -> Self {
        Self::default().with_space().with_long_scale_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = MetricFormat::new(FormatOptions::USE_NAME, Some(2));
        assert_eq!(config.options, FormatOptions::USE_NAME);
        assert_eq!(config.decimals, Some(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MetricFormat::symbol().with_space().with_decimals(1);
        assert!(config.options.with_space);
        assert_eq!(config.decimals, Some(1));
        assert_eq!(config.format(1234.0).unwrap(), "1.2 k");
    }

    #[test]
    fn test_validation() {
        let too_precise = MetricFormat::symbol().with_decimals(16);
        assert!(too_precise.validate().is_err());

        let conflicting = MetricFormat::named().with_short_scale_word();
        assert!(conflicting.validate().is_err());

        assert!(MetricFormat::symbol().with_decimals(15).validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(MetricFormat::symbol().format(1500.0).unwrap(), "1.5k");
        assert_eq!(MetricFormat::spaced_symbol().format(1500.0).unwrap(), "1.5 k");
        assert_eq!(MetricFormat::named().format(1500.0).unwrap(), "1.5 kilo");
        assert_eq!(
            MetricFormat::short_scale_words().format(1.5e9).unwrap(),
            "1.5 billion"
        );
        assert_eq!(
            MetricFormat::long_scale_words().format(1.5e9).unwrap(),
            "1.5 milliard"
        );

        for preset in [
            MetricFormat::symbol(),
            MetricFormat::spaced_symbol(),
            MetricFormat::named(),
            MetricFormat::short_scale_words(),
            MetricFormat::long_scale_words(),
        ] {
            assert!(preset.validate().is_ok());
        }
    }

    #[test]
    fn test_format_all() {
        let config = MetricFormat::symbol();
        let out = config.format_all([1e3, 2e6, 3e-3]).unwrap();
        assert_eq!(out, vec!["1k", "2M", "3m"]);

        let err = config.format_all([1e3, 1e30]).unwrap_err();
        assert_eq!(err, MetricError::OutOfRange(1e30));
    }

    #[test]
    fn test_format_lossy() {
        let config = MetricFormat::symbol();
        assert_eq!(config.format_lossy(2000.0), "2k");
        assert_eq!(config.format_lossy(f64::INFINITY), "inf");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = MetricFormat::named().with_decimals(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: MetricFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        let partial: MetricFormat = serde_json::from_str(r#"{"decimals": 1}"#).unwrap();
        assert_eq!(partial.options, FormatOptions::NONE);
        assert_eq!(partial.format(1234.0).unwrap(), "1.2k");
    }
}
