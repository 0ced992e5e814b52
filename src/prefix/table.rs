// ============================================================================
// Prefix Table
// The sixteen Metric prefixes from yocto to yotta, keyed by symbol
// ============================================================================

/// Upper magnitude limit (exclusive) for formatting.
pub const BIG_LIMIT: f64 = 1e27;

/// Lower magnitude limit (exclusive) for formatting.
pub const SMALL_LIMIT: f64 = 1e-27;

/// Largest power-of-1000 step in the table (yotta / yocto).
pub const MAX_STEP: i32 = 8;

/// U+00B5 MICRO SIGN, accepted on lookup as an alias of the Greek `μ`.
pub const MICRO_SIGN: char = '\u{00B5}';

/// One Metric prefix: its symbol, power-of-1000 step and textual forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitPrefix {
    /// Single-character symbol (`k`, `M`, `μ`, ...)
    pub symbol: char,
    /// Signed power of 1000 (`k` = +1, `m` = -1, `Y` = +8)
    pub step: i8,
    /// Full prefix name (`kilo`)
    pub name: &'static str,
    /// Short-scale numeral word (`thousand`, `billion`)
    pub short_scale_word: &'static str,
    long_scale_word: Option<&'static str>,
}

impl UnitPrefix {
    const fn new(symbol: char, step: i8, name: &'static str, short_scale_word: &'static str) -> Self {
        Self {
            symbol,
            step,
            name,
            short_scale_word,
            long_scale_word: None,
        }
    }

    const fn with_long_scale(mut self, word: &'static str) -> Self {
        self.long_scale_word = Some(word);
        self
    }

    /// Long-scale numeral word, identical to the short-scale word where the
    /// two conventions agree.
    #[inline]
    pub fn long_scale_word(&self) -> &'static str {
        self.long_scale_word.unwrap_or(self.short_scale_word)
    }

    /// Power of ten this prefix stands for.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.step as i32 * 3
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.step > 0
    }

    /// Scale `number` by this prefix.
    ///
    /// Negative exponents divide by the positive power so that results such
    /// as `100 / 10^3` stay correctly rounded.
    #[inline]
    pub fn apply(&self, number: f64) -> f64 {
        let exponent = self.exponent();
        if exponent >= 0 {
            number * 10f64.powi(exponent)
        } else {
            number / 10f64.powi(-exponent)
        }
    }

    /// Look up a prefix by its symbol.
    pub fn from_symbol(symbol: char) -> Option<&'static UnitPrefix> {
        let symbol = if symbol == MICRO_SIGN { 'μ' } else { symbol };
        PREFIXES.iter().find(|p| p.symbol == symbol)
    }

    /// Look up a prefix by its signed power-of-1000 step.
    pub fn from_step(step: i32) -> Option<&'static UnitPrefix> {
        PREFIXES.iter().find(|p| p.step as i32 == step)
    }

    /// Look up a prefix by its full name (`"kilo"`).
    pub fn from_name(name: &str) -> Option<&'static UnitPrefix> {
        PREFIXES.iter().find(|p| p.name == name)
    }
}

/// All prefixes: positive steps ascending, then negative steps descending.
pub static PREFIXES: [UnitPrefix; 16] = [
    UnitPrefix::new('k', 1, "kilo", "thousand"),
    UnitPrefix::new('M', 2, "mega", "million"),
    UnitPrefix::new('G', 3, "giga", "billion").with_long_scale("milliard"),
    UnitPrefix::new('T', 4, "tera", "trillion").with_long_scale("billion"),
    UnitPrefix::new('P', 5, "peta", "quadrillion").with_long_scale("billiard"),
    UnitPrefix::new('E', 6, "exa", "quintillion").with_long_scale("trillion"),
    UnitPrefix::new('Z', 7, "zetta", "sextillion").with_long_scale("trilliard"),
    UnitPrefix::new('Y', 8, "yotta", "septillion").with_long_scale("quadrillion"),
    UnitPrefix::new('m', -1, "milli", "thousandth"),
    UnitPrefix::new('μ', -2, "micro", "millionth"),
    UnitPrefix::new('n', -3, "nano", "billionth").with_long_scale("milliardth"),
    UnitPrefix::new('p', -4, "pico", "trillionth").with_long_scale("billionth"),
    UnitPrefix::new('f', -5, "femto", "quadrillionth").with_long_scale("billiardth"),
    UnitPrefix::new('a', -6, "atto", "quintillionth").with_long_scale("trillionth"),
    UnitPrefix::new('z', -7, "zepto", "sextillionth").with_long_scale("trilliardth"),
    UnitPrefix::new('y', -8, "yocto", "septillionth").with_long_scale("quadrillionth"),
];

/// Whether `value` can be formatted: zero, or a magnitude strictly between
/// `SMALL_LIMIT` and `BIG_LIMIT`. NaN and infinities are never in range.
#[inline]
pub fn is_in_range(value: f64) -> bool {
    if value == 0.0 {
        return true;
    }
    let magnitude = value.abs();
    magnitude > SMALL_LIMIT && magnitude < BIG_LIMIT
}
