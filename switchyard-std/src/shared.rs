//! # Serialized Registry Access
//!
//! The dispatch core is single-threaded by default. When a registry is used
//! from multiple concurrent callers, registration and resolution must be
//! serialized: an in-progress override could otherwise expose a half-updated
//! mapping. [`SharedRegistry`] wraps a [`DispatchRegistry`] in a mutex so
//! reads-during-write races are prevented, not merely tolerated.

use crate::invoker::BatchInvoker;
use crate::registry::DispatchRegistry;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use switchyard_core::{BatchPolicy, DispatchError, Key, Registered, RegistryError};

/// A cloneable, mutex-serialized registry handle.
///
/// Every operation takes the lock for its full duration, including batch
/// invocation: a batch observes one consistent mapping from start to finish.
pub struct SharedRegistry<K, H> {
    inner: Arc<Mutex<DispatchRegistry<K, H>>>,
}

impl<K: Key, H: Registered> SharedRegistry<K, H> {
    /// Wrap an empty registry.
    pub fn new() -> Self {
        Self::from_registry(DispatchRegistry::new())
    }

    /// Wrap an already-populated registry.
    pub fn from_registry(registry: DispatchRegistry<K, H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DispatchRegistry<K, H>> {
        // A poisoned lock means a panic elsewhere, not an inconsistent map:
        // the registry is updated by a single insert.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or override the handler for a key, under the lock.
    pub fn register(&self, key: K, handler: H) -> Result<(), RegistryError> {
        self.lock().register(key, handler)
    }

    /// Run a closure against the resolved handler, under the lock.
    ///
    /// The closure borrows the handler for the duration of the call, so no
    /// concurrent override can swap it mid-use.
    pub fn resolve_with<R>(
        &self,
        key: &K,
        f: impl FnOnce(&H) -> R,
    ) -> Result<R, DispatchError> {
        let registry = self.lock();
        registry.resolve(key).map(f)
    }

    /// Snapshot of the currently registered key set.
    pub fn keys(&self) -> HashSet<K> {
        self.lock().keys()
    }

    /// Check whether a key is registered.
    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run a batch under the lock.
    ///
    /// The lock is held for the whole closure, so the batch sees a frozen
    /// mapping even while other threads wait to register.
    pub fn with_invoker<R>(
        &self,
        policy: BatchPolicy,
        f: impl FnOnce(BatchInvoker<'_, K, H>) -> R,
    ) -> R {
        let registry = self.lock();
        f(registry.invoker_with(policy))
    }
}

impl<K: Key, H: Registered> Default for SharedRegistry<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, H> Clone for SharedRegistry<K, H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
