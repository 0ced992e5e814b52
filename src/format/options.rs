// ============================================================================
// Format Options
// Per-call flags controlling separator and unit-text form
// ============================================================================

use std::ops::{BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Unit Text Selector
// ============================================================================

/// Which textual form of the prefix follows the number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitText {
    /// Bare symbol: `1k`
    #[default]
    Symbol,
    /// Full prefix name: `1kilo`
    Name,
    /// Short-scale word: `1thousand`, `1billion`
    ShortScaleWord,
    /// Long-scale word: `1thousand`, `1milliard`
    LongScaleWord,
}

// ============================================================================
// Format Flags
// ============================================================================

/// Independent formatting flags, combinable with `|`.
///
/// `use_name`, `use_short_scale_word` and `use_long_scale_word` are meant to
/// be mutually exclusive. Nothing stops a caller from setting several of
/// them; when that happens [`FormatOptions::unit_text`] silently picks one in
/// the fixed order name, short-scale word, long-scale word. Treat setting
/// more than one as a mistake; [`MetricFormat::validate`] reports it.
///
/// [`MetricFormat::validate`]: crate::format::MetricFormat::validate
///
/// # Example
/// ```
/// use metric_numeral::format::{FormatOptions, UnitText};
///
/// let options = FormatOptions::WITH_SPACE | FormatOptions::USE_NAME;
/// assert!(options.with_space);
/// assert_eq!(options.unit_text(), UnitText::Name);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Insert a single space between the number and the unit text
    pub with_space: bool,
    /// Emit the full prefix name
    pub use_name: bool,
    /// Emit the short-scale word
    pub use_short_scale_word: bool,
    /// Emit the long-scale word
    pub use_long_scale_word: bool,
}

impl FormatOptions {
    /// No flags: bare symbol, no separator.
    pub const NONE: Self = Self {
        with_space: false,
        use_name: false,
        use_short_scale_word: false,
        use_long_scale_word: false,
    };

    pub const WITH_SPACE: Self = Self {
        with_space: true,
        ..Self::NONE
    };

    pub const USE_NAME: Self = Self {
        use_name: true,
        ..Self::NONE
    };

    pub const USE_SHORT_SCALE_WORD: Self = Self {
        use_short_scale_word: true,
        ..Self::NONE
    };

    pub const USE_LONG_SCALE_WORD: Self = Self {
        use_long_scale_word: true,
        ..Self::NONE
    };

    /// Flags set in either operand.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self {
            with_space: self.with_space || other.with_space,
            use_name: self.use_name || other.use_name,
            use_short_scale_word: self.use_short_scale_word || other.use_short_scale_word,
            use_long_scale_word: self.use_long_scale_word || other.use_long_scale_word,
        }
    }

    /// Whether every flag set in `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (!other.with_space || self.with_space)
            && (!other.use_name || self.use_name)
            && (!other.use_short_scale_word || self.use_short_scale_word)
            && (!other.use_long_scale_word || self.use_long_scale_word)
    }

    /// Number of unit-text selectors set (0 means bare symbol).
    #[inline]
    pub fn selector_count(&self) -> usize {
        [
            self.use_name,
            self.use_short_scale_word,
            self.use_long_scale_word,
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Resolve the selectors to a single unit-text form.
    ///
    /// Priority: name > short-scale word > long-scale word > symbol.
    pub fn unit_text(&self) -> UnitText {
        if self.use_name {
            UnitText::Name
        } else if self.use_short_scale_word {
            UnitText::ShortScaleWord
        } else if self.use_long_scale_word {
            UnitText::LongScaleWord
        } else {
            UnitText::Symbol
        }
    }
}

impl From<UnitText> for FormatOptions {
    fn from(unit_text: UnitText) -> Self {
        match unit_text {
            UnitText::Symbol => Self::NONE,
            UnitText::Name => Self::USE_NAME,
            UnitText::ShortScaleWord => Self::USE_SHORT_SCALE_WORD,
            UnitText::LongScaleWord => Self::USE_LONG_SCALE_WORD,
        }
    }
}

impl BitOr for FormatOptions {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for FormatOptions {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}
