//! Immutable string value object for Vessel
//!
//! This crate provides:
//! - [`StrValue`]: a string value object whose transformations all return
//!   new instances
//! - [`NumericFormat`]: minus-sign and decimal-separator glyphs for
//!   locale-dependent numeric input
//! - A single-pass numeric scanner backing `is_numeric` and the numeric
//!   conversions

pub mod format;
pub mod scan;
pub mod str_value;

pub use format::NumericFormat;
pub use str_value::StrValue;

use thiserror::Error;

/// String value errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrError {
    /// A splitting separator was empty
    #[error("separator must not be empty")]
    EmptySeparator,

    /// The string does not pass the numeric scanner for the requested form
    #[error("not a numeric string: {value:?}")]
    NotNumeric { value: String },

    /// The string is numeric but exceeds the target type's range
    #[error("numeric string {value:?} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },
}

pub type Result<T> = std::result::Result<T, StrError>;
