//! Typed change-subscriber registry
//!
//! A flat callback list used by the observable wrappers via composition.
//! Each registration gets its own [`SubscriberId`], so registering the same
//! callback N times yields N independent subscriptions that must each be
//! removed to fully detach. Notification is synchronous, in registration
//! order, on the caller's thread.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a registered subscriber
    pub struct SubscriberId;
}

/// Callback invoked with the previous and the new value
type Callback<T> = Box<dyn Fn(&T, &T) + Send>;

/// Registry of change callbacks for one value slot
pub struct Subscribers<T> {
    entries: SlotMap<SubscriberId, Callback<T>>,
    /// Registration order; slotmap iteration order is not insertion order
    order: SmallVec<[SubscriberId; 4]>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            order: SmallVec::new(),
        }
    }

    /// Register a callback, returning its id
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: Fn(&T, &T) + Send + 'static,
    {
        let id = self.entries.insert(Box::new(callback));
        self.order.push(id);
        id
    }

    /// Remove the identified callback
    ///
    /// Returns `false` if the id was already removed or never registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let removed = self.entries.remove(id).is_some();
        if removed {
            self.order.retain(|entry| *entry != id);
        }
        removed
    }

    /// Invoke every registered callback with `(old, new)`
    ///
    /// Runs synchronously on the calling thread and returns only after the
    /// last callback has run.
    pub fn notify(&self, old: &T, new: &T) {
        for id in &self.order {
            if let Some(callback) = self.entries.get(*id) {
                callback(old, new);
            }
        }
    }

    /// Whether at least one subscriber is attached
    pub fn has_subscribers(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
