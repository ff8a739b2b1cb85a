//! Observable boolean wrapper

use std::fmt;

use crate::observe::ObservableCell;
use crate::subscribe::SubscriberId;
use crate::value::{MutableValue, Value};

/// Observable boolean value
pub struct BoolValue {
    cell: ObservableCell<bool>,
}

impl BoolValue {
    pub fn new(value: bool) -> Self {
        Self {
            cell: ObservableCell::new(value),
        }
    }

    /// Current value
    pub fn get(&self) -> bool {
        self.cell.get()
    }

    /// Replace the stored value, returning self for chaining
    pub fn set(&mut self, value: bool) -> &mut Self {
        self.cell.replace(value);
        self
    }

    /// Set to `true`, returning self for chaining
    pub fn set_true(&mut self) -> &mut Self {
        self.set(true)
    }

    /// Set to `false`, returning self for chaining
    pub fn set_false(&mut self) -> &mut Self {
        self.set(false)
    }

    /// Invert the stored value, returning self for chaining
    pub fn flip(&mut self) -> &mut Self {
        let flipped = !self.cell.get();
        self.set(flipped)
    }

    /// Invert the stored value, returning the new value
    pub fn flip_get(&mut self) -> bool {
        self.flip().get()
    }

    pub fn is_true(&self) -> bool {
        self.cell.get()
    }

    pub fn is_false(&self) -> bool {
        !self.cell.get()
    }

    /// Register a change callback invoked with `(old, new)`
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: Fn(&bool, &bool) + Send + 'static,
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

impl Value for BoolValue {
    type Item = bool;

    fn get(&self) -> bool {
        self.cell.get()
    }
}

impl MutableValue for BoolValue {
    fn set(&mut self, value: bool) -> &mut Self {
        self.cell.replace(value);
        self
    }
}

impl Default for BoolValue {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for BoolValue {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl PartialEq for BoolValue {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl PartialEq<bool> for BoolValue {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl fmt::Debug for BoolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoolValue").field(&self.get()).finish()
    }
}

impl fmt::Display for BoolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
