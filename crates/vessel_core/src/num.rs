//! Exact-arithmetic numeric wrappers
//!
//! One generic wrapper, [`NumValue`], serves every numeric type through the
//! [`Numeric`] trait; the aliases [`IntValue`], [`LongValue`], [`FloatValue`]
//! and [`DoubleValue`] bind it to the concrete scalars. Integer-backed
//! wrappers fail with [`NumericError`] on overflow and division by zero;
//! floating-point wrappers follow IEEE-754 and never fail.
//!
//! Each operator comes in three forms:
//! - `op(rhs)` mutates and returns the wrapper for chaining,
//! - `op_get(rhs)` mutates and returns the new value,
//! - `get_op(rhs)` mutates and returns the previous value.
//!
//! A failed operation leaves the stored value untouched and fires nothing.

use std::fmt;

use crate::error::NumericError;
use crate::observe::ObservableCell;
use crate::subscribe::SubscriberId;
use crate::value::{MutableValue, Value};

/// Scalar contract for [`NumValue`]
///
/// The checked hooks return `None` where the wrapper must raise an
/// arithmetic error. Integer implementations delegate to the standard
/// checked intrinsics; float implementations always succeed, which is how
/// the integer/float error asymmetry is preserved behind a uniform API.
pub trait Numeric:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

// ============================================================================
// i32 / i64 - exact arithmetic
// ============================================================================

impl Numeric for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i32::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i32::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i32::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        i32::checked_div(self, rhs)
    }
}

impl Numeric for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        i64::checked_div(self, rhs)
    }
}

// ============================================================================
// f32 / f64 - IEEE-754, never fails
// ============================================================================

impl Numeric for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }
}

// ============================================================================
// NumValue
// ============================================================================

/// Observable numeric wrapper
///
/// Comparisons are exact, in the wrapper's own scalar type: the wrapper
/// implements `PartialEq<T>`/`PartialOrd<T>` and nothing wider, so comparing
/// across widths requires an explicit conversion at the call site rather
/// than a silent truncation.
pub struct NumValue<T: Numeric> {
    cell: ObservableCell<T>,
}

/// 32-bit integer wrapper with exact arithmetic
pub type IntValue = NumValue<i32>;
/// 64-bit integer wrapper with exact arithmetic
pub type LongValue = NumValue<i64>;
/// 32-bit IEEE-754 wrapper
pub type FloatValue = NumValue<f32>;
/// 64-bit IEEE-754 wrapper
pub type DoubleValue = NumValue<f64>;

impl<T: Numeric> NumValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: ObservableCell::new(value),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Replace the stored value, returning self for chaining
    pub fn set(&mut self, value: T) -> &mut Self {
        self.cell.replace(value);
        self
    }

    /// Run one checked operation; on success store and return (old, new)
    fn apply(
        &mut self,
        rhs: T,
        op: fn(T, T) -> Option<T>,
        on_fail: impl FnOnce() -> NumericError,
    ) -> Result<(T, T), NumericError> {
        let current = self.cell.get();
        let next = op(current, rhs).ok_or_else(on_fail)?;
        self.cell.replace(next);
        Ok((current, next))
    }

    // ------------------------------------------------------------------
    // add / subtract / multiply / divide
    // ------------------------------------------------------------------

    /// Add `rhs`, returning self for chaining
    pub fn add(&mut self, rhs: T) -> Result<&mut Self, NumericError> {
        self.apply(rhs, T::checked_add, || NumericError::Overflow { op: "add" })?;
        Ok(self)
    }

    /// Add `rhs`, returning the new value
    pub fn add_get(&mut self, rhs: T) -> Result<T, NumericError> {
        self.apply(rhs, T::checked_add, || NumericError::Overflow { op: "add" })
            .map(|(_, new)| new)
    }

    /// Add `rhs`, returning the value it replaced
    pub fn get_add(&mut self, rhs: T) -> Result<T, NumericError> {
        self.apply(rhs, T::checked_add, || NumericError::Overflow { op: "add" })
            .map(|(old, _)| old)
    }

    /// Subtract `rhs`, returning self for chaining
    pub fn subtract(&mut self, rhs: T) -> Result<&mut Self, NumericError> {
        self.apply(rhs, T::checked_sub, || NumericError::Overflow {
            op: "subtract",
        })?;
        Ok(self)
    }

    /// Subtract `rhs`, returning the new value
    pub fn subtract_get(&mut self, rhs: T) -> Result<T, NumericError> {
        self.apply(rhs, T::checked_sub, || NumericError::Overflow {
            op: "subtract",
        })
        .map(|(_, new)| new)
    }

    /// Subtract `rhs`, returning the value it replaced
    pub fn get_subtract(&mut self, rhs: T) -> Result<T, NumericError> {
        self.apply(rhs, T::checked_sub, || NumericError::Overflow {
            op: "subtract",
        })
        .map(|(old, _)| old)
    }

    /// Multiply by `rhs`, returning self for chaining
    pub fn multiply(&mut self, rhs: T) -> Result<&mut Self, NumericError> {
        self.apply(rhs, T::checked_mul, || NumericError::Overflow {
            op: "multiply",
        })?;
        Ok(self)
    }

    /// Multiply by `rhs`, returning the new value
    pub fn multiply_get(&mut self, rhs: T) -> Result<T, NumericError> {
        self.apply(rhs, T::checked_mul, || NumericError::Overflow {
            op: "multiply",
        })
        .map(|(_, new)| new)
    }

    /// Multiply by `rhs`, returning the value it replaced
    pub fn get_multiply(&mut self, rhs: T) -> Result<T, NumericError> {
        self.apply(rhs, T::checked_mul, || NumericError::Overflow {
            op: "multiply",
        })
        .map(|(old, _)| old)
    }

    /// Divide by `rhs`, returning self for chaining
    pub fn divide(&mut self, rhs: T) -> Result<&mut Self, NumericError> {
        self.apply(rhs, T::checked_div, || Self::divide_error(rhs))?;
        Ok(self)
    }

    /// Divide by `rhs`, returning the new value
    pub fn divide_get(&mut self, rhs: T) -> Result<T, NumericError> {
        self.apply(rhs, T::checked_div, || Self::divide_error(rhs))
            .map(|(_, new)| new)
    }

    /// Divide by `rhs`, returning the value it replaced
    pub fn get_divide(&mut self, rhs: T) -> Result<T, NumericError> {
        self.apply(rhs, T::checked_div, || Self::divide_error(rhs))
            .map(|(old, _)| old)
    }

    fn divide_error(rhs: T) -> NumericError {
        if rhs == T::ZERO {
            NumericError::DivideByZero
        } else {
            NumericError::Overflow { op: "divide" }
        }
    }

    // ------------------------------------------------------------------
    // increment / decrement
    // ------------------------------------------------------------------

    /// Add one, returning self for chaining
    pub fn increment(&mut self) -> Result<&mut Self, NumericError> {
        self.add(T::ONE)
    }

    /// Add one, returning the new value
    pub fn increment_get(&mut self) -> Result<T, NumericError> {
        self.add_get(T::ONE)
    }

    /// Add one, returning the value it replaced
    pub fn get_increment(&mut self) -> Result<T, NumericError> {
        self.get_add(T::ONE)
    }

    /// Subtract one, returning self for chaining
    pub fn decrement(&mut self) -> Result<&mut Self, NumericError> {
        self.subtract(T::ONE)
    }

    /// Subtract one, returning the new value
    pub fn decrement_get(&mut self) -> Result<T, NumericError> {
        self.subtract_get(T::ONE)
    }

    /// Subtract one, returning the value it replaced
    pub fn get_decrement(&mut self) -> Result<T, NumericError> {
        self.get_subtract(T::ONE)
    }

    // ------------------------------------------------------------------
    // predicates
    // ------------------------------------------------------------------

    pub fn is_zero(&self) -> bool {
        self.cell.with(|v| *v == T::ZERO)
    }

    pub fn is_not_zero(&self) -> bool {
        !self.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.cell.with(|v| *v > T::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.cell.with(|v| *v < T::ZERO)
    }

    // ------------------------------------------------------------------
    // subscriptions
    // ------------------------------------------------------------------

    /// Register a change callback invoked with `(old, new)`
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: Fn(&T, &T) + Send + 'static,
    {
        self.cell.subscribe(callback)
    }

    /// Remove a previously registered callback
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.cell.unsubscribe(id)
    }

    /// Whether at least one subscriber is attached
    pub fn has_subscribers(&self) -> bool {
        self.cell.has_subscribers()
    }
}

impl<T: Numeric> Value for NumValue<T> {
    type Item = T;

    fn get(&self) -> T {
        self.cell.get()
    }
}

impl<T: Numeric> MutableValue for NumValue<T> {
    fn set(&mut self, value: T) -> &mut Self {
        self.cell.replace(value);
        self
    }
}

impl<T: Numeric> Default for NumValue<T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}

impl<T: Numeric> From<T> for NumValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Numeric> PartialEq for NumValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Numeric> PartialEq<T> for NumValue<T> {
    fn eq(&self, other: &T) -> bool {
        self.cell.with(|v| v == other)
    }
}

impl<T: Numeric> PartialOrd for NumValue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<T: Numeric> PartialOrd<T> for NumValue<T> {
    fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
        self.cell.with(|v| v.partial_cmp(other))
    }
}

impl<T: Numeric> fmt::Debug for NumValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NumValue").field(&self.get()).finish()
    }
}

impl<T: Numeric> fmt::Display for NumValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cell.with(|v| write!(f, "{v}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_new_get_roundtrip() {
        assert_eq!(IntValue::new(7).get(), 7);
        assert_eq!(LongValue::new(-3).get(), -3);
        assert_eq!(DoubleValue::new(1.5).get(), 1.5);
    }

    #[test]
    fn test_add_chaining() {
        let mut value = IntValue::new(5);
        value.add(3).unwrap();
        assert_eq!(value.get(), 8);

        // The chaining form allows consecutive operations
        value.add(1).unwrap().subtract(4).unwrap();
        assert_eq!(value.get(), 5);
    }

    #[test]
    fn test_three_operation_forms() {
        let mut value = IntValue::new(10);
        assert_eq!(value.add_get(5).unwrap(), 15);
        assert_eq!(value.get_add(5).unwrap(), 15);
        assert_eq!(value.get(), 20);

        assert_eq!(value.subtract_get(2).unwrap(), 18);
        assert_eq!(value.get_subtract(2).unwrap(), 18);
        assert_eq!(value.get(), 16);
    }

    #[test]
    fn test_int_overflow_errors() {
        let mut value = IntValue::new(i32::MAX);
        assert_eq!(
            value.add(1),
            Err(NumericError::Overflow { op: "add" })
        );
        // Value is untouched after a failed operation
        assert_eq!(value.get(), i32::MAX);

        let mut value = IntValue::new(i32::MIN);
        assert_eq!(
            value.subtract(1),
            Err(NumericError::Overflow { op: "subtract" })
        );
        assert_eq!(
            value.multiply(2),
            Err(NumericError::Overflow { op: "multiply" })
        );
        // i32::MIN / -1 does not fit in i32
        assert_eq!(
            value.divide(-1),
            Err(NumericError::Overflow { op: "divide" })
        );
    }

    #[test]
    fn test_long_overflow_errors() {
        let mut value = LongValue::new(i64::MAX);
        assert_eq!(
            value.multiply(2),
            Err(NumericError::Overflow { op: "multiply" })
        );
        assert_eq!(value.get(), i64::MAX);
    }

    #[test]
    fn test_int_divide_by_zero() {
        let mut value = IntValue::new(42);
        assert_eq!(value.divide(0), Err(NumericError::DivideByZero));
        assert_eq!(value.get(), 42);
    }

    #[test]
    fn test_float_follows_ieee754() {
        let mut value = DoubleValue::new(f64::MAX);
        value.multiply(2.0).unwrap();
        assert_eq!(value.get(), f64::INFINITY);

        let mut value = FloatValue::new(1.0);
        value.divide(0.0).unwrap();
        assert_eq!(value.get(), f32::INFINITY);
    }

    #[test]
    fn test_increment_decrement() {
        let mut value = IntValue::new(0);
        value.increment().unwrap();
        value.increment().unwrap();
        assert_eq!(value.get(), 2);
        assert_eq!(value.get_decrement().unwrap(), 2);
        assert_eq!(value.decrement_get().unwrap(), 0);

        let mut value = IntValue::new(i32::MAX);
        assert_eq!(
            value.increment(),
            Err(NumericError::Overflow { op: "add" })
        );
    }

    #[test]
    fn test_predicates() {
        assert!(IntValue::new(0).is_zero());
        assert!(IntValue::new(1).is_not_zero());
        assert!(IntValue::new(1).is_positive());
        assert!(IntValue::new(-1).is_negative());
        assert!(!IntValue::new(0).is_positive());
        assert!(DoubleValue::new(-0.5).is_negative());
    }

    #[test]
    fn test_comparisons_against_raw_values() {
        let value = IntValue::new(5);
        assert!(value == 5);
        assert!(value < 6);
        assert!(value > 4);
        assert!(value == IntValue::new(5));
    }

    #[test]
    fn test_arithmetic_fires_subscribers() {
        let mut value = IntValue::new(1);
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        value.subscribe(move |old, new| {
            events_clone.lock().unwrap().push((*old, *new));
        });

        value.add(2).unwrap();
        value.set(3); // equal to current, suppressed
        value.set(9);
        assert_eq!(*events.lock().unwrap(), vec![(1, 3), (3, 9)]);
    }

    #[test]
    fn test_failed_operation_fires_nothing() {
        let mut value = IntValue::new(i32::MAX);
        let fired = Arc::new(Mutex::new(false));
        let fired_clone = fired.clone();

        value.subscribe(move |_, _| *fired_clone.lock().unwrap() = true);
        assert!(value.add(1).is_err());
        assert!(!*fired.lock().unwrap());
    }
}
