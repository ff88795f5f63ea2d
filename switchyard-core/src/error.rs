//! Error types for Switchyard.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`SwitchyardError`] - Top-level error type for all Switchyard operations
//! - [`RegistryError`] - Errors raised at registration time
//! - [`CapabilityMismatch`] - A handler falling short of its capability contract
//! - [`DispatchError`] - Errors raised during invocation
//!
//! Registration-time errors are always raised immediately; invocation-time
//! errors follow the caller-selected batch policy (fail-fast vs
//! collect-errors). Nothing is retried: the core has no notion of transient
//! vs permanent failure.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Switchyard operations.
#[derive(Error, Debug)]
pub enum SwitchyardError {
    /// An error occurred at registration time.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// An error occurred during invocation.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised by `register`, always immediately and never deferred.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The key failed its well-formedness probe (e.g. an empty string).
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// The handler does not satisfy the full operation set of its capability.
    #[error(transparent)]
    Mismatch(#[from] CapabilityMismatch),
}

/// A handler registered for a capability slot does not provide every
/// operation the capability declares.
///
/// Conformance is all-or-nothing and is checked when the handler enters a
/// registry, so the mismatch surfaces before any batch invocation begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("handler for capability `{capability}` is missing required operations: {missing:?}")]
pub struct CapabilityMismatch {
    /// Name of the capability the handler was registered for.
    pub capability: &'static str,
    /// Debug renderings of the operations the handler does not provide.
    pub missing: Vec<String>,
}

/// Errors raised while resolving or invoking handlers.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered for the key. Always reported to the caller,
    /// never silently ignored.
    #[error("no handler registered for key: {0}")]
    KeyNotFound(String),

    /// The handler failed during invocation. The underlying error is
    /// propagated verbatim under fail-fast and captured as data under
    /// collect-errors.
    #[error("handler failed for key {key}")]
    Handler {
        /// Debug rendering of the key whose handler failed.
        key: String,
        /// The error raised by the handler.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Build a [`DispatchError::KeyNotFound`] from any debuggable key.
    pub fn key_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        DispatchError::KeyNotFound(format!("{key:?}"))
    }

    /// Build a [`DispatchError::Handler`] wrapping a handler-raised error.
    pub fn handler<K: std::fmt::Debug>(key: &K, source: BoxError) -> Self {
        DispatchError::Handler {
            key: format!("{key:?}"),
            source,
        }
    }

    /// Returns true for the key-not-found variant.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, DispatchError::KeyNotFound(_))
    }
}

// Convenience conversion
impl From<BoxError> for SwitchyardError {
    fn from(err: BoxError) -> Self {
        SwitchyardError::Custom(err)
    }
}
