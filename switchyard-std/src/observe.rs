//! Observation wrapper for handlers.
//!
//! Wraps any handler and emits `tracing` events around each invocation when
//! the `tracing` feature is enabled; without the feature the wrapper is a
//! plain pass-through.

use std::borrow::Cow;
use switchyard_core::{BoxError, Capability, CapabilityHandler, Registered, Transform};

/// A handler wrapper that logs invocations for debugging/observation.
///
/// Implements both handler kinds by delegation, so it can wrap capability
/// handlers and transforms alike.
pub struct Observed<H> {
    inner: H,
    label: &'static str,
}

impl<H> Observed<H> {
    /// Wrap a handler under the default label.
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            label: "handler",
        }
    }

    /// Wrap a handler under an explicit label for log correlation.
    pub fn labeled(inner: H, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// The wrapper's log label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwrap the handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<C, H> CapabilityHandler<C> for Observed<H>
where
    C: Capability,
    H: CapabilityHandler<C>,
{
    fn perform(&self, op: C::Op, input: &C::Input) -> Result<C::Output, BoxError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(capability = C::NAME, op = ?op, label = self.label, "invoking handler");

        let outcome = self.inner.perform(op, input);

        #[cfg(feature = "tracing")]
        if let Err(err) = &outcome {
            tracing::warn!(capability = C::NAME, op = ?op, label = self.label, %err, "handler failed");
        }

        outcome
    }

    fn provided(&self) -> Cow<'static, [C::Op]> {
        self.inner.provided()
    }
}

impl<V, H> Transform<V> for Observed<H>
where
    V: Send + Sync + 'static,
    H: Transform<V>,
{
    type Output = H::Output;

    fn apply(&self, value: &V) -> Result<Self::Output, BoxError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(label = self.label, "applying transform");

        let outcome = self.inner.apply(value);

        #[cfg(feature = "tracing")]
        if let Err(err) = &outcome {
            tracing::warn!(label = self.label, %err, "transform failed");
        }

        outcome
    }
}

// Observation does not change what a handler provides.
impl<H: Registered> Registered for Observed<H> {
    fn conformance(&self) -> Result<(), switchyard_core::CapabilityMismatch> {
        self.inner.conformance()
    }
}
