//! Observable enum wrapper
//!
//! [`EnumValue`] is generic over any clonable, comparable enum. The
//! name-based helpers light up when the enum derives the matching strum
//! traits (`EnumString`, `EnumIter`, `Display`).

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::EnumError;
use crate::observe::ObservableCell;
use crate::subscribe::SubscriberId;
use crate::value::{MutableValue, Value};

/// Observable wrapper over an enum variant
pub struct EnumValue<E: Clone + PartialEq + Send + 'static> {
    cell: ObservableCell<E>,
}

impl<E: Clone + PartialEq + Send + 'static> EnumValue<E> {
    pub fn new(variant: E) -> Self {
        Self {
            cell: ObservableCell::new(variant),
        }
    }

    /// Current variant
    pub fn get(&self) -> E {
        self.cell.get()
    }

    /// Replace the stored variant, returning self for chaining
    pub fn set(&mut self, variant: E) -> &mut Self {
        self.cell.replace(variant);
        self
    }

    /// Whether the stored variant equals `variant`
    pub fn is(&self, variant: E) -> bool {
        self.cell.with(|v| *v == variant)
    }

    /// Register a change callback invoked with `(old, new)`
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: Fn(&E, &E) + Send + 'static,
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

impl<E> EnumValue<E>
where
    E: Clone + PartialEq + Send + FromStr + 'static,
{
    /// Construct from a variant name
    pub fn from_name(name: &str) -> Result<Self, EnumError> {
        let variant = E::from_str(name).map_err(|_| EnumError::UnknownVariant {
            name: name.to_string(),
        })?;
        Ok(Self::new(variant))
    }

    /// Replace the stored variant by name, returning self for chaining
    pub fn set_by_name(&mut self, name: &str) -> Result<&mut Self, EnumError> {
        let variant = E::from_str(name).map_err(|_| EnumError::UnknownVariant {
            name: name.to_string(),
        })?;
        Ok(self.set(variant))
    }
}

impl<E> EnumValue<E>
where
    E: Clone + PartialEq + Send + IntoEnumIterator + 'static,
{
    /// All variants of the wrapped enum, in declaration order
    pub fn variants() -> Vec<E> {
        E::iter().collect()
    }
}

impl<E> EnumValue<E>
where
    E: Clone + PartialEq + Send + fmt::Display + 'static,
{
    /// Display name of the stored variant
    pub fn name(&self) -> String {
        self.cell.with(|v| v.to_string())
    }
}

impl<E: Clone + PartialEq + Send + 'static> Value for EnumValue<E> {
    type Item = E;

    fn get(&self) -> E {
        self.cell.get()
    }
}

impl<E: Clone + PartialEq + Send + 'static> MutableValue for EnumValue<E> {
    fn set(&mut self, variant: E) -> &mut Self {
        self.cell.replace(variant);
        self
    }
}

impl<E: Clone + PartialEq + Send + 'static> From<E> for EnumValue<E> {
    fn from(variant: E) -> Self {
        Self::new(variant)
    }
}

impl<E: Clone + PartialEq + Send + 'static> PartialEq for EnumValue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<E: Clone + PartialEq + Send + fmt::Debug + 'static> fmt::Debug for EnumValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumValue").field(&self.get()).finish()
    }
}
