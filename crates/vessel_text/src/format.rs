//! Numeric format glyphs
//!
//! Carries the two glyphs the numeric scanner cares about. The default is
//! the `'-'`/`'.'` convention; [`NumericFormat::comma_decimal`] covers the
//! comma-separator locales.

/// Minus-sign and decimal-separator glyphs for numeric input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericFormat {
    pub minus_sign: char,
    pub decimal_separator: char,
}

impl NumericFormat {
    pub const fn new(minus_sign: char, decimal_separator: char) -> Self {
        Self {
            minus_sign,
            decimal_separator,
        }
    }

    /// Format for locales writing decimals with a comma (`"12,5"`)
    pub const fn comma_decimal() -> Self {
        Self::new('-', ',')
    }
}

impl Default for NumericFormat {
    fn default() -> Self {
        Self::new('-', '.')
    }
}
