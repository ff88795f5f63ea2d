//! # Dispatch Registry
//!
//! The keyed mapping at the center of the framework: a `HashMap`-backed
//! registry from a discrete key to a handler, generic over the handler kind
//! so capability trait objects and bound transforms are stored identically
//! as opaque invocable values.
//!
//! # Lifecycle
//!
//! The registry is built once at startup (via [`RegistryBuilder`]) or
//! incrementally via [`register`](DispatchRegistry::register), and lives for
//! the process duration. The registry is the sole long-lived owner of its
//! handlers; resolution hands out non-owning borrows. There is no deletion
//! API beyond override-by-re-registration.
//!
//! # Override Semantics
//!
//! Re-registering a key never errors: last write wins. This is deliberate,
//! so test doubles and configuration overlays can shadow startup bindings.

use crate::invoker::BatchInvoker;
use std::collections::{HashMap, HashSet};
use switchyard_core::{BatchPolicy, DispatchError, Key, Registered, RegistryError};

/// A mapping from keys to handlers with last-write-wins override semantics.
///
/// Generic over the handler kind `H`: use `Arc<dyn CapabilityHandler<C>>`
/// for capability slots and a transform type (or [`BoxTransform`]) for
/// conversion slots.
///
/// [`BoxTransform`]: switchyard_core::BoxTransform
pub struct DispatchRegistry<K, H> {
    handlers: HashMap<K, H>,
}

impl<K: Key, H: Registered> DispatchRegistry<K, H> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Insert or override the handler for a key.
    ///
    /// Fails with [`RegistryError::MalformedKey`] when the key fails its
    /// well-formedness probe and with [`RegistryError::Mismatch`] when the
    /// handler does not satisfy its capability contract. Both are raised
    /// immediately, never deferred to invocation. Overriding an existing
    /// key is not an error.
    pub fn register(&mut self, key: K, handler: H) -> Result<(), RegistryError> {
        if !key.validate() {
            return Err(RegistryError::MalformedKey(format!("{key:?}")));
        }
        handler.conformance()?;

        #[cfg(feature = "tracing")]
        if self.handlers.contains_key(&key) {
            tracing::debug!(key = ?key, "overriding existing registration");
        } else {
            tracing::trace!(key = ?key, "registering handler");
        }

        self.handlers.insert(key, handler);
        Ok(())
    }

    /// Register every binding of an opaque startup configuration.
    ///
    /// Bindings are applied in iteration order, so later duplicates win
    /// exactly as with repeated [`register`](DispatchRegistry::register)
    /// calls. The first malformed binding aborts with its error.
    pub fn extend<I>(&mut self, bindings: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (K, H)>,
    {
        for (key, handler) in bindings {
            self.register(key, handler)?;
        }
        Ok(())
    }

    /// Look up the handler for a key.
    ///
    /// Pure lookup with no side effects; the returned reference is shared
    /// with the registry, not owned by the caller. Fails with
    /// [`DispatchError::KeyNotFound`] when the key is absent.
    pub fn resolve(&self, key: &K) -> Result<&H, DispatchError> {
        self.handlers
            .get(key)
            .ok_or_else(|| DispatchError::key_not_found(key))
    }

    /// Non-erroring sibling of [`resolve`](DispatchRegistry::resolve).
    pub fn get(&self, key: &K) -> Option<&H> {
        self.handlers.get(key)
    }

    /// Snapshot of the currently registered key set.
    pub fn keys(&self) -> HashSet<K> {
        self.handlers.keys().cloned().collect()
    }

    /// Check whether a key is registered.
    pub fn contains(&self, key: &K) -> bool {
        self.handlers.contains_key(key)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Borrow a batch invoker with the default fail-fast policy.
    pub fn invoker(&self) -> BatchInvoker<'_, K, H> {
        BatchInvoker::new(self)
    }

    /// Borrow a batch invoker with an explicit policy.
    pub fn invoker_with(&self, policy: BatchPolicy) -> BatchInvoker<'_, K, H> {
        BatchInvoker::new(self).with_policy(policy)
    }
}

impl<K: Key, H: Registered> Default for DispatchRegistry<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for startup population of a [`DispatchRegistry`].
///
/// Registration through the builder runs the same key validation and
/// conformance checks as the live registry.
pub struct RegistryBuilder<K, H> {
    handlers: HashMap<K, H>,
}

impl<K: Key, H: Registered> RegistryBuilder<K, H> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler. Later registrations for the same key win.
    pub fn register(&mut self, key: K, handler: H) -> Result<(), RegistryError> {
        if !key.validate() {
            return Err(RegistryError::MalformedKey(format!("{key:?}")));
        }
        handler.conformance()?;
        self.handlers.insert(key, handler);
        Ok(())
    }

    /// Chainable variant of [`register`](RegistryBuilder::register).
    pub fn with(mut self, key: K, handler: H) -> Result<Self, RegistryError> {
        self.register(key, handler)?;
        Ok(self)
    }

    /// Build the registry.
    pub fn build(self) -> DispatchRegistry<K, H> {
        DispatchRegistry {
            handlers: self.handlers,
        }
    }
}

impl<K: Key, H: Registered> Default for RegistryBuilder<K, H> {
    fn default() -> Self {
        Self::new()
    }
}
