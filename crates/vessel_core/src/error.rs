//! Error types for vessel_core

use thiserror::Error;

/// Errors raised by exact-arithmetic operations on numeric wrappers.
///
/// Only integer-backed wrappers produce these; floating-point wrappers
/// follow IEEE-754 and never fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// The operation overflowed the wrapped type's range
    #[error("arithmetic overflow in {op}")]
    Overflow { op: &'static str },

    /// Integer division by zero
    #[error("division by zero")]
    DivideByZero,
}

/// Errors raised when resolving enum variants by name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// No variant matches the given name
    #[error("unknown variant name: {name:?}")]
    UnknownVariant { name: String },
}
