//! Single-pass numeric scanner
//!
//! Character-by-character detection of numeric strings, deliberately not
//! driven by a trial `parse`. The scanner permits at most one leading minus
//! sign and at most one decimal separator (both taken from the
//! [`NumericFormat`]), requires at least one ASCII digit, and rejects every
//! other character.

use crate::format::NumericFormat;

/// Whether `input` is a numeric string under `format`
///
/// Accepts an optional leading minus, digits, and at most one decimal
/// separator. Empty and blank strings are not numeric.
pub fn is_numeric(input: &str, format: &NumericFormat) -> bool {
    let mut saw_digit = false;
    let mut saw_separator = false;

    for (index, ch) in input.chars().enumerate() {
        if ch.is_ascii_digit() {
            saw_digit = true;
        } else if ch == format.minus_sign {
            if index != 0 {
                return false;
            }
        } else if ch == format.decimal_separator {
            if saw_separator {
                return false;
            }
            saw_separator = true;
        } else {
            return false;
        }
    }

    saw_digit
}

/// Whether `input` is an integer string under `format`
///
/// Numeric with no decimal separator at all.
pub fn is_integer(input: &str, format: &NumericFormat) -> bool {
    is_numeric(input, format) && !input.contains(format.decimal_separator)
}

/// Rewrite `format`'s glyphs to the `'-'`/`'.'` convention `str::parse` expects
pub(crate) fn normalize(input: &str, format: &NumericFormat) -> String {
    input
        .chars()
        .map(|ch| {
            if ch == format.minus_sign {
                '-'
            } else if ch == format.decimal_separator {
                '.'
            } else {
                ch
            }
        })
        .collect()
}
