//! Vessel Core
//!
//! This crate provides the foundational value primitives for the Vessel
//! library:
//!
//! - **Observable wrappers**: boolean, integer, long, float, double, and
//!   enum values that notify subscribers synchronously on change
//! - **Exact arithmetic**: integer wrappers fail on overflow, float
//!   wrappers follow IEEE-754
//! - **Typed registry**: one shared instance per type, explicit lifecycle
//! - **Condition polling**: block a thread until a supplier yields a value
//!
//! # Example
//!
//! ```rust
//! use vessel_core::IntValue;
//!
//! let mut count = IntValue::new(5);
//! let sub = count.subscribe(|old, new| println!("{old} -> {new}"));
//!
//! count.add(3).unwrap();
//! assert_eq!(count.get(), 8);
//!
//! // Overflow is an error, not a wrap
//! count.set(i32::MAX);
//! assert!(count.add(1).is_err());
//!
//! count.unsubscribe(sub);
//! ```

pub mod boolean;
pub mod condition;
pub mod enums;
pub mod error;
pub mod num;
pub mod observe;
pub mod registry;
pub mod subscribe;
pub mod value;

pub use boolean::BoolValue;
pub use condition::{Condition, DEFAULT_POLL_INTERVAL};
pub use enums::EnumValue;
pub use error::{EnumError, NumericError};
pub use num::{DoubleValue, FloatValue, IntValue, LongValue, NumValue, Numeric};
pub use observe::ObservableCell;
pub use registry::Registry;
pub use subscribe::{SubscriberId, Subscribers};
pub use value::{MutableValue, Value};
