//! Observable value slot
//!
//! [`ObservableCell`] is the composition building block shared by every
//! mutable wrapper in this crate: one value slot plus an embedded
//! [`Subscribers`] registry. Wrappers forward their subscribe surface to the
//! cell instead of inheriting notification machinery.

use crate::subscribe::{SubscriberId, Subscribers};

/// A value slot that notifies subscribers when its value changes
///
/// Notification is synchronous and runs on the mutating thread before the
/// mutating call returns. Storing a value equal to the current one is a
/// no-op: nothing is stored and nothing fires. Mutation requires `&mut self`;
/// the cell is `Send` but not designed for concurrent mutation.
pub struct ObservableCell<T> {
    value: T,
    subscribers: Subscribers<T>,
}

impl<T: Clone + PartialEq> ObservableCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Subscribers::new(),
        }
    }

    /// Current value, cloned out of the cell
    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Borrow the current value without cloning
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value)
    }

    /// Store a new value, firing subscribers if it differs
    ///
    /// Returns the previous value when a change happened, `None` when the
    /// new value equaled the stored one and the store was suppressed.
    pub fn replace(&mut self, value: T) -> Option<T> {
        if self.value == value {
            return None;
        }
        let old = std::mem::replace(&mut self.value, value);
        self.subscribers.notify(&old, &self.value);
        Some(old)
    }

    /// Register a change callback invoked with `(old, new)`
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: Fn(&T, &T) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Whether at least one subscriber is attached
    pub fn has_subscribers(&self) -> bool {
        self.subscribers.has_subscribers()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableCell")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_get_after_replace() {
        let mut cell = ObservableCell::new(1);
        assert_eq!(cell.replace(2), Some(1));
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn test_change_fires_old_and_new() {
        let mut cell = ObservableCell::new(10);
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        cell.subscribe(move |old, new| {
            events_clone.lock().unwrap().push((*old, *new));
        });

        cell.replace(20);
        cell.replace(30);
        assert_eq!(*events.lock().unwrap(), vec![(10, 20), (20, 30)]);
    }

    #[test]
    fn test_equal_value_is_suppressed() {
        let mut cell = ObservableCell::new(5);
        let events = Arc::new(Mutex::new(0));
        let events_clone = events.clone();

        cell.subscribe(move |_, _| *events_clone.lock().unwrap() += 1);

        assert_eq!(cell.replace(5), None);
        assert_eq!(*events.lock().unwrap(), 0);
        assert_eq!(cell.get(), 5);
    }

    #[test]
    fn test_has_subscribers() {
        let mut cell = ObservableCell::new(0);
        assert!(!cell.has_subscribers());
        let id = cell.subscribe(|_, _| {});
        assert!(cell.has_subscribers());
        cell.unsubscribe(id);
        assert!(!cell.has_subscribers());
    }
}
