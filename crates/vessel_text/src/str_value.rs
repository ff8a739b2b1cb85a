//! Immutable string value object
//!
//! [`StrValue`] wraps a single immutable string. Every transformation
//! returns a new instance; nothing mutates in place, so the type carries no
//! subscriber surface. Indices and widths across the API are measured in
//! characters, not bytes.

use std::fmt;
use std::ops::Range;

use vessel_core::{DoubleValue, FloatValue, IntValue, LongValue, Value};

use crate::format::NumericFormat;
use crate::scan;
use crate::{Result, StrError};

/// One-character case fold; exotic multi-char expansions keep their lead char
fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Immutable string value object
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrValue {
    value: String,
}

impl StrValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// View of the wrapped string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Unwrap into the owned string
    pub fn into_string(self) -> String {
        self.value
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the string is empty or all whitespace
    pub fn is_blank(&self) -> bool {
        self.value.chars().all(char::is_whitespace)
    }

    // ------------------------------------------------------------------
    // whitespace and case
    // ------------------------------------------------------------------

    pub fn trim(&self) -> StrValue {
        StrValue::new(self.value.trim())
    }

    pub fn trim_start(&self) -> StrValue {
        StrValue::new(self.value.trim_start())
    }

    pub fn trim_end(&self) -> StrValue {
        StrValue::new(self.value.trim_end())
    }

    pub fn to_lowercase(&self) -> StrValue {
        StrValue::new(self.value.to_lowercase())
    }

    pub fn to_uppercase(&self) -> StrValue {
        StrValue::new(self.value.to_uppercase())
    }

    /// Uppercase the first letter of every whitespace-delimited word and
    /// lowercase the rest; whitespace is preserved as-is
    pub fn to_title_case(&self) -> StrValue {
        let mut out = String::with_capacity(self.value.len());
        let mut at_word_start = true;
        for ch in self.value.chars() {
            if ch.is_whitespace() {
                at_word_start = true;
                out.push(ch);
            } else if at_word_start {
                out.extend(ch.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(ch.to_lowercase());
            }
        }
        StrValue { value: out }
    }

    /// Uppercase the first character, leaving the rest untouched
    pub fn capitalize(&self) -> StrValue {
        let mut chars = self.value.chars();
        match chars.next() {
            Some(first) => {
                let mut out = String::with_capacity(self.value.len());
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
                StrValue { value: out }
            }
            None => self.clone(),
        }
    }

    /// Lowercase the first character, leaving the rest untouched
    pub fn decapitalize(&self) -> StrValue {
        let mut chars = self.value.chars();
        match chars.next() {
            Some(first) => {
                let mut out = String::with_capacity(self.value.len());
                out.extend(first.to_lowercase());
                out.push_str(chars.as_str());
                StrValue { value: out }
            }
            None => self.clone(),
        }
    }

    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.value.chars().map(fold).eq(other.chars().map(fold))
    }

    // ------------------------------------------------------------------
    // search
    // ------------------------------------------------------------------

    /// Character index of the first occurrence of `needle`
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.value
            .find(needle)
            .map(|byte| self.value[..byte].chars().count())
    }

    /// Character index of the last occurrence of `needle`
    pub fn rfind(&self, needle: &str) -> Option<usize> {
        self.value
            .rfind(needle)
            .map(|byte| self.value[..byte].chars().count())
    }

    /// Character index of the first case-insensitive occurrence of `needle`
    pub fn find_ignore_case(&self, needle: &str) -> Option<usize> {
        let hay: Vec<char> = self.value.chars().map(fold).collect();
        let nee: Vec<char> = needle.chars().map(fold).collect();
        if nee.is_empty() {
            return Some(0);
        }
        if nee.len() > hay.len() {
            return None;
        }
        (0..=hay.len() - nee.len()).find(|&start| hay[start..start + nee.len()] == nee[..])
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.value.contains(needle)
    }

    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.find_ignore_case(needle).is_some()
    }

    // ------------------------------------------------------------------
    // prefix / suffix
    // ------------------------------------------------------------------

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.value.starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.value.ends_with(suffix)
    }

    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        let mut chars = self.value.chars().map(fold);
        prefix.chars().map(fold).all(|p| chars.next() == Some(p))
    }

    pub fn ends_with_ignore_case(&self, suffix: &str) -> bool {
        let hay: Vec<char> = self.value.chars().map(fold).collect();
        let suf: Vec<char> = suffix.chars().map(fold).collect();
        suf.len() <= hay.len() && hay[hay.len() - suf.len()..] == suf[..]
    }

    /// Prepend `prefix` unless already present
    pub fn ensure_prefix(&self, prefix: &str) -> StrValue {
        if self.value.starts_with(prefix) {
            self.clone()
        } else {
            StrValue::new(format!("{prefix}{}", self.value))
        }
    }

    /// Append `suffix` unless already present
    pub fn ensure_suffix(&self, suffix: &str) -> StrValue {
        if self.value.ends_with(suffix) {
            self.clone()
        } else {
            StrValue::new(format!("{}{suffix}", self.value))
        }
    }

    /// Remove a leading `prefix` if present
    pub fn strip_prefix(&self, prefix: &str) -> StrValue {
        match self.value.strip_prefix(prefix) {
            Some(rest) => StrValue::new(rest),
            None => self.clone(),
        }
    }

    /// Remove a trailing `suffix` if present
    pub fn strip_suffix(&self, suffix: &str) -> StrValue {
        match self.value.strip_suffix(suffix) {
            Some(rest) => StrValue::new(rest),
            None => self.clone(),
        }
    }

    // ------------------------------------------------------------------
    // splitting and shaping
    // ------------------------------------------------------------------

    /// Split on `separator`; the separator must not be empty
    pub fn split(&self, separator: &str) -> Result<Vec<StrValue>> {
        if separator.is_empty() {
            return Err(StrError::EmptySeparator);
        }
        Ok(self.value.split(separator).map(StrValue::new).collect())
    }

    /// Join `parts` with `separator`
    pub fn join<I, S>(separator: &str, parts: I) -> StrValue
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            out.push_str(part.as_ref());
        }
        StrValue { value: out }
    }

    /// Character-wise reversal
    pub fn reverse(&self) -> StrValue {
        StrValue {
            value: self.value.chars().rev().collect(),
        }
    }

    pub fn repeat(&self, times: usize) -> StrValue {
        StrValue {
            value: self.value.repeat(times),
        }
    }

    /// Left-pad with `fill` up to `width` characters
    pub fn pad_start(&self, width: usize, fill: char) -> StrValue {
        let count = self.char_count();
        if count >= width {
            return self.clone();
        }
        let mut out = String::with_capacity(self.value.len() + (width - count));
        for _ in 0..width - count {
            out.push(fill);
        }
        out.push_str(&self.value);
        StrValue { value: out }
    }

    /// Right-pad with `fill` up to `width` characters
    pub fn pad_end(&self, width: usize, fill: char) -> StrValue {
        let count = self.char_count();
        if count >= width {
            return self.clone();
        }
        let mut out = String::with_capacity(self.value.len() + (width - count));
        out.push_str(&self.value);
        for _ in 0..width - count {
            out.push(fill);
        }
        StrValue { value: out }
    }

    /// Character-indexed slice, clamped to the string's length
    pub fn substring(&self, range: Range<usize>) -> StrValue {
        let len = range.end.saturating_sub(range.start);
        StrValue {
            value: self.value.chars().skip(range.start).take(len).collect(),
        }
    }

    // ------------------------------------------------------------------
    // quoting
    // ------------------------------------------------------------------

    /// Wrap in double quotes, escaping embedded quotes and backslashes
    pub fn quote(&self) -> StrValue {
        let mut out = String::with_capacity(self.value.len() + 2);
        out.push('"');
        for ch in self.value.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                _ => out.push(ch),
            }
        }
        out.push('"');
        StrValue { value: out }
    }

    /// Undo [`StrValue::quote`]; input without surrounding quotes is
    /// returned unchanged
    pub fn unquote(&self) -> StrValue {
        let inner = match self
            .value
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            Some(inner) => inner,
            None => return self.clone(),
        };
        let mut out = String::with_capacity(inner.len());
        let mut escaped = false;
        for ch in inner.chars() {
            if escaped {
                out.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else {
                out.push(ch);
            }
        }
        StrValue { value: out }
    }

    // ------------------------------------------------------------------
    // numeric detection and conversion
    // ------------------------------------------------------------------

    /// Numeric under the default `'-'`/`'.'` format
    pub fn is_numeric(&self) -> bool {
        self.is_numeric_with(&NumericFormat::default())
    }

    pub fn is_numeric_with(&self, format: &NumericFormat) -> bool {
        scan::is_numeric(&self.value, format)
    }

    pub fn to_i32(&self) -> Result<i32> {
        self.to_i32_with(&NumericFormat::default())
    }

    pub fn to_i32_with(&self, format: &NumericFormat) -> Result<i32> {
        self.integer_form(format)?
            .parse()
            .map_err(|_| self.out_of_range("i32"))
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.to_i64_with(&NumericFormat::default())
    }

    pub fn to_i64_with(&self, format: &NumericFormat) -> Result<i64> {
        self.integer_form(format)?
            .parse()
            .map_err(|_| self.out_of_range("i64"))
    }

    pub fn to_f32(&self) -> Result<f32> {
        self.to_f32_with(&NumericFormat::default())
    }

    pub fn to_f32_with(&self, format: &NumericFormat) -> Result<f32> {
        self.decimal_form(format)?
            .parse()
            .map_err(|_| self.out_of_range("f32"))
    }

    pub fn to_f64(&self) -> Result<f64> {
        self.to_f64_with(&NumericFormat::default())
    }

    pub fn to_f64_with(&self, format: &NumericFormat) -> Result<f64> {
        self.decimal_form(format)?
            .parse()
            .map_err(|_| self.out_of_range("f64"))
    }

    /// Convert into an observable [`IntValue`]
    pub fn to_int_value(&self) -> Result<IntValue> {
        Ok(IntValue::new(self.to_i32()?))
    }

    /// Convert into an observable [`LongValue`]
    pub fn to_long_value(&self) -> Result<LongValue> {
        Ok(LongValue::new(self.to_i64()?))
    }

    /// Convert into an observable [`FloatValue`]
    pub fn to_float_value(&self) -> Result<FloatValue> {
        Ok(FloatValue::new(self.to_f32()?))
    }

    /// Convert into an observable [`DoubleValue`]
    pub fn to_double_value(&self) -> Result<DoubleValue> {
        Ok(DoubleValue::new(self.to_f64()?))
    }

    fn integer_form(&self, format: &NumericFormat) -> Result<String> {
        if !scan::is_integer(&self.value, format) {
            return Err(StrError::NotNumeric {
                value: self.value.clone(),
            });
        }
        Ok(scan::normalize(&self.value, format))
    }

    fn decimal_form(&self, format: &NumericFormat) -> Result<String> {
        if !scan::is_numeric(&self.value, format) {
            return Err(StrError::NotNumeric {
                value: self.value.clone(),
            });
        }
        Ok(scan::normalize(&self.value, format))
    }

    fn out_of_range(&self, target: &'static str) -> StrError {
        StrError::OutOfRange {
            value: self.value.clone(),
            target,
        }
    }
}

impl Value for StrValue {
    type Item = String;

    fn get(&self) -> String {
        self.value.clone()
    }
}

impl From<&str> for StrValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StrValue {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl AsRef<str> for StrValue {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<&str> for StrValue {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl fmt::Debug for StrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrValue").field(&self.value).finish()
    }
}

impl fmt::Display for StrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_roundtrip() {
        assert_eq!(StrValue::new("hello").as_str(), "hello");
        assert_eq!(StrValue::from("hi".to_string()).as_str(), "hi");
    }

    #[test]
    fn test_transformations_leave_original_untouched() {
        let original = StrValue::new("  Mixed Case  ");
        let trimmed = original.trim();
        let upper = original.to_uppercase();

        assert_eq!(original, "  Mixed Case  ");
        assert_eq!(trimmed, "Mixed Case");
        assert_eq!(upper, "  MIXED CASE  ");
    }

    #[test]
    fn test_blank_and_empty() {
        assert!(StrValue::new("").is_empty());
        assert!(StrValue::new("").is_blank());
        assert!(StrValue::new("  \t\n").is_blank());
        assert!(!StrValue::new(" a ").is_blank());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(StrValue::new("hello world").to_title_case(), "Hello World");
        // Already title-cased input comes back unchanged
        assert_eq!(StrValue::new("Hello World").to_title_case(), "Hello World");
        assert_eq!(StrValue::new("HELLO WORLD").to_title_case(), "Hello World");
        assert_eq!(
            StrValue::new("  two   spaces").to_title_case(),
            "  Two   Spaces"
        );
    }

    #[test]
    fn test_capitalize_decapitalize() {
        assert_eq!(StrValue::new("rust").capitalize(), "Rust");
        assert_eq!(StrValue::new("Rust").decapitalize(), "rust");
        assert_eq!(StrValue::new("").capitalize(), "");
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        for input in ["hello", "", "a", "héllo wörld", "日本語"] {
            let value = StrValue::new(input);
            assert_eq!(value.reverse().reverse(), value);
        }
        assert_eq!(StrValue::new("abc").reverse(), "cba");
    }

    #[test]
    fn test_search() {
        let value = StrValue::new("Hello World");
        assert_eq!(value.find("World"), Some(6));
        assert_eq!(value.find("o"), Some(4));
        assert_eq!(value.rfind("o"), Some(7));
        assert_eq!(value.find("xyz"), None);
        assert!(value.contains("lo W"));
    }

    #[test]
    fn test_search_ignore_case() {
        let value = StrValue::new("Hello World");
        assert_eq!(value.find_ignore_case("world"), Some(6));
        assert!(value.contains_ignore_case("HELLO"));
        assert!(!value.contains_ignore_case("mars"));
        assert!(value.starts_with_ignore_case("hello"));
        assert!(value.ends_with_ignore_case("WORLD"));
        assert!(value.eq_ignore_case("hello world"));
    }

    #[test]
    fn test_prefix_suffix() {
        let value = StrValue::new("file.txt");
        assert!(value.starts_with("file"));
        assert!(value.ends_with(".txt"));
        assert_eq!(value.ensure_prefix("./"), "./file.txt");
        assert_eq!(value.ensure_prefix("file"), "file.txt");
        assert_eq!(value.ensure_suffix(".txt"), "file.txt");
        assert_eq!(value.ensure_suffix(".bak"), "file.txt.bak");
        assert_eq!(value.strip_suffix(".txt"), "file");
        assert_eq!(value.strip_prefix("dir/"), "file.txt");
    }

    #[test]
    fn test_split_and_join() {
        let value = StrValue::new("a,b,,c");
        let parts = value.split(",").unwrap();
        assert_eq!(parts, vec!["a", "b", "", "c"]);

        assert_eq!(value.split(""), Err(StrError::EmptySeparator));

        let joined = StrValue::join("-", ["x", "y", "z"]);
        assert_eq!(joined, "x-y-z");
        assert_eq!(StrValue::join(",", Vec::<&str>::new()), "");
    }

    #[test]
    fn test_padding_and_repeat() {
        assert_eq!(StrValue::new("7").pad_start(3, '0'), "007");
        assert_eq!(StrValue::new("ab").pad_end(4, '.'), "ab..");
        assert_eq!(StrValue::new("long").pad_start(2, ' '), "long");
        assert_eq!(StrValue::new("ab").repeat(3), "ababab");
    }

    #[test]
    fn test_substring_is_char_indexed_and_clamped() {
        let value = StrValue::new("héllo");
        assert_eq!(value.substring(1..3), "él");
        assert_eq!(value.substring(3..99), "lo");
        assert_eq!(value.substring(9..12), "");
    }

    #[test]
    fn test_quote_unquote() {
        let value = StrValue::new(r#"say "hi" \now"#);
        let quoted = value.quote();
        assert_eq!(quoted, r#""say \"hi\" \\now""#);
        assert_eq!(quoted.unquote(), value);

        // Unquoted input passes through unchanged
        assert_eq!(StrValue::new("plain").unquote(), "plain");
    }

    #[test]
    fn test_is_numeric_truth_table() {
        assert!(StrValue::new("123").is_numeric());
        assert!(StrValue::new("-123").is_numeric());
        assert!(StrValue::new("12.3").is_numeric());
        assert!(!StrValue::new("--1").is_numeric());
        assert!(!StrValue::new("1.2.3").is_numeric());
        assert!(!StrValue::new("").is_numeric());
        assert!(!StrValue::new("   ").is_numeric());
    }

    #[test]
    fn test_integer_conversion_roundtrip() {
        for input in ["0", "42", "-42", "2147483647", "-2147483648"] {
            let value = StrValue::new(input);
            assert!(value.is_numeric());
            assert_eq!(value.to_i32().unwrap(), input.parse::<i32>().unwrap());
        }
    }

    #[test]
    fn test_conversion_rejects_non_numeric() {
        assert_eq!(
            StrValue::new("12a").to_i32(),
            Err(StrError::NotNumeric {
                value: "12a".to_string()
            })
        );
        // Fractional input is not an integer
        assert!(matches!(
            StrValue::new("12.5").to_i32(),
            Err(StrError::NotNumeric { .. })
        ));
        // But converts as a decimal
        assert_eq!(StrValue::new("12.5").to_f64().unwrap(), 12.5);
    }

    #[test]
    fn test_conversion_out_of_range() {
        assert_eq!(
            StrValue::new("2147483648").to_i32(),
            Err(StrError::OutOfRange {
                value: "2147483648".to_string(),
                target: "i32"
            })
        );
        assert_eq!(
            StrValue::new("2147483648").to_i64().unwrap(),
            2_147_483_648
        );
    }

    #[test]
    fn test_conversion_with_comma_format() {
        let format = NumericFormat::comma_decimal();
        assert_eq!(StrValue::new("-12,5").to_f64_with(&format).unwrap(), -12.5);
        assert!(StrValue::new("12.5").to_f64_with(&format).is_err());
    }

    #[test]
    fn test_wrapper_conversions() {
        assert_eq!(StrValue::new("8").to_int_value().unwrap().get(), 8);
        assert_eq!(StrValue::new("-9").to_long_value().unwrap().get(), -9);
        assert_eq!(StrValue::new("0.5").to_double_value().unwrap().get(), 0.5);
        assert!(StrValue::new("x").to_float_value().is_err());
    }

    #[test]
    fn test_value_trait_get() {
        let value = StrValue::new("abc");
        assert_eq!(Value::get(&value), "abc".to_string());
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(StrValue::new("apple") < StrValue::new("banana"));
        assert_eq!(format!("{}", StrValue::new("show")), "show");
    }
}
