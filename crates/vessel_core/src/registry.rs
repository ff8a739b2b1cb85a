//! Typed instance registry
//!
//! A container mapping each type to one shared instance of that type. The
//! registry is an owned value with an explicit lifecycle: callers construct
//! it, pass it where it is needed, and tear it down with [`Registry::clear`]
//! or by dropping it. There is no process-global registry.

use std::any::{Any, TypeId};
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// Container holding at most one shared instance per type
///
/// Instances are handed out as `Arc<T>` clones, so entries can outlive
/// removal from the registry. Mutation requires `&mut self`; share across
/// threads behind external locking if needed.
#[derive(Default)]
pub struct Registry {
    entries: FxHashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Store `value` as the instance for its type, returning a handle
    ///
    /// Replaces any previously stored instance of the same type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) -> Arc<T> {
        let handle = Arc::new(value);
        self.entries.insert(TypeId::of::<T>(), handle.clone());
        tracing::debug!(type_name = std::any::type_name::<T>(), "registry insert");
        handle
    }

    /// Handle to the stored instance of `T`, if any
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|entry| entry.downcast::<T>().ok())
    }

    /// Handle to the stored instance of `T`, creating it if absent
    pub fn get_or_insert_with<T, F>(&mut self, create: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        match self.get::<T>() {
            Some(handle) => handle,
            None => self.insert(create()),
        }
    }

    /// Remove the stored instance of `T`
    ///
    /// Returns `false` if no instance was stored. Handles already handed
    /// out remain valid.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> bool {
        self.entries.remove(&TypeId::of::<T>()).is_some()
    }

    /// Whether an instance of `T` is stored
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every stored instance
    pub fn clear(&mut self) {
        tracing::debug!(count = self.entries.len(), "registry clear");
        self.entries.clear();
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries.len())
            .finish()
    }
}
