//! Testing utilities for Switchyard.
//!
//! This module provides doubles for exercising registries and batch
//! invokers without real handler implementations.
//!
//! # Features
//!
//! - [`RecordingHandler`]: records every operation it performs
//! - [`FlakyHandler`]: programmable failure for error-policy tests
//! - [`PartialHandler`]: advertises a subset of its capability's operations,
//!   for conformance-rejection tests
//! - [`SpyTransform`]: records inputs and returns a programmed output

use std::borrow::Cow;
use std::marker::PhantomData;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use switchyard_core::{BoxError, Capability, CapabilityHandler, Registered, Transform};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every operation it performs.
///
/// Clones share the log, so a test can keep one handle and register the
/// other.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::<Switchable>::new();
/// let probe = recorder.clone();
///
/// registry.register("light".to_string(), recorder.erased())?;
/// registry.invoker().invoke_all(["light".to_string()], SwitchOp::Activate, &())?;
///
/// assert_eq!(probe.ops(), vec![SwitchOp::Activate]);
/// ```
pub struct RecordingHandler<C: Capability> {
    ops: Arc<Mutex<Vec<C::Op>>>,
}

impl<C: Capability> RecordingHandler<C>
where
    C::Output: Default,
{
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            ops: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Type-erase into a registry slot value.
    pub fn erased(&self) -> Arc<dyn CapabilityHandler<C>> {
        Arc::new(self.clone())
    }

    /// The operations performed so far, in call order.
    pub fn ops(&self) -> Vec<C::Op> {
        self.ops.lock().unwrap().clone()
    }

    /// Number of invocations recorded.
    pub fn count(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Clear the recorded operations.
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}

impl<C: Capability> Default for RecordingHandler<C>
where
    C::Output: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Capability> Clone for RecordingHandler<C> {
    fn clone(&self) -> Self {
        Self {
            ops: self.ops.clone(),
        }
    }
}

impl<C: Capability> CapabilityHandler<C> for RecordingHandler<C>
where
    C::Output: Default,
{
    fn perform(&self, op: C::Op, _input: &C::Input) -> Result<C::Output, BoxError> {
        self.ops.lock().unwrap().push(op);
        Ok(C::Output::default())
    }
}

// ============================================================================
// Flaky Handler
// ============================================================================

/// A handler with programmable failure, for exercising both batch policies.
pub struct FlakyHandler<C: Capability> {
    should_fail: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
    _capability: PhantomData<C>,
}

impl<C: Capability> FlakyHandler<C>
where
    C::Output: Default,
{
    /// Create a handler that succeeds until told otherwise.
    pub fn new() -> Self {
        Self {
            should_fail: Arc::new(AtomicBool::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
            _capability: PhantomData,
        }
    }

    /// Create a handler that fails from the start.
    pub fn failing() -> Self {
        let handler = Self::new();
        handler.set_fail(true);
        handler
    }

    /// Type-erase into a registry slot value.
    pub fn erased(&self) -> Arc<dyn CapabilityHandler<C>> {
        Arc::new(self.clone())
    }

    /// Program the failure state.
    pub fn set_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Number of times `perform` was called, failures included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<C: Capability> Default for FlakyHandler<C>
where
    C::Output: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Capability> Clone for FlakyHandler<C> {
    fn clone(&self) -> Self {
        Self {
            should_fail: self.should_fail.clone(),
            calls: self.calls.clone(),
            _capability: PhantomData,
        }
    }
}

impl<C: Capability> CapabilityHandler<C> for FlakyHandler<C>
where
    C::Output: Default,
{
    fn perform(&self, _op: C::Op, _input: &C::Input) -> Result<C::Output, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            Err(std::io::Error::other("intentional failure").into())
        } else {
            Ok(C::Output::default())
        }
    }
}

// ============================================================================
// Partial Handler
// ============================================================================

/// A handler advertising only a subset of its capability's operations.
///
/// Registration must reject it with `CapabilityMismatch` before any
/// invocation is attempted.
pub struct PartialHandler<C: Capability> {
    provided: &'static [C::Op],
}

impl<C: Capability> PartialHandler<C>
where
    C::Output: Default,
{
    /// Create a handler claiming only the given operations.
    pub fn new(provided: &'static [C::Op]) -> Self {
        Self { provided }
    }

    /// Type-erase into a registry slot value.
    pub fn erased(self) -> Arc<dyn CapabilityHandler<C>> {
        Arc::new(self)
    }
}

impl<C: Capability> CapabilityHandler<C> for PartialHandler<C>
where
    C::Output: Default,
{
    fn perform(&self, _op: C::Op, _input: &C::Input) -> Result<C::Output, BoxError> {
        Ok(C::Output::default())
    }

    fn provided(&self) -> Cow<'static, [C::Op]> {
        Cow::Borrowed(self.provided)
    }
}

// ============================================================================
// Spy Transform
// ============================================================================

/// A transform that records inputs and returns a programmed output.
pub struct SpyTransform<V: Clone, O: Clone> {
    inputs: Arc<Mutex<Vec<V>>>,
    output: O,
    should_error: Arc<Mutex<Option<String>>>,
}

impl<V: Clone, O: Clone> SpyTransform<V, O> {
    /// Create a spy returning the given output.
    pub fn returning(output: O) -> Self {
        Self {
            inputs: Arc::new(Mutex::new(Vec::new())),
            output,
            should_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Program an error to return instead of the output.
    pub fn set_error(&self, error: impl Into<String>) {
        *self.should_error.lock().unwrap() = Some(error.into());
    }

    /// Clear error state.
    pub fn clear_error(&self) {
        *self.should_error.lock().unwrap() = None;
    }

    /// The recorded inputs, in call order.
    pub fn inputs(&self) -> Vec<V> {
        self.inputs.lock().unwrap().clone()
    }

    /// Number of times `apply` was called.
    pub fn call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl<V: Clone, O: Clone> Clone for SpyTransform<V, O> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            should_error: self.should_error.clone(),
        }
    }
}

impl<V, O> Transform<V> for SpyTransform<V, O>
where
    V: Clone + Send + Sync + 'static,
    O: Clone + Send + Sync + 'static,
{
    type Output = O;

    fn apply(&self, value: &V) -> Result<Self::Output, BoxError> {
        self.inputs.lock().unwrap().push(value.clone());

        if let Some(ref err) = *self.should_error.lock().unwrap() {
            return Err(err.clone().into());
        }

        Ok(self.output.clone())
    }
}

impl<V, O> Registered for SpyTransform<V, O>
where
    V: Clone + Send + Sync + 'static,
    O: Clone + Send + Sync + 'static,
{
}
