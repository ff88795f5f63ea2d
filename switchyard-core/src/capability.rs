//! # Capability Contract Layer
//!
//! A capability is a named contract consisting of one or more operations.
//! Implementations are polymorphic variants; registries never inspect the
//! concrete type, only the contract.
//!
//! # Design Philosophy
//!
//! - **All-or-nothing**: No handler may partially satisfy a capability.
//!   Conformance is checked when the handler enters a registry via
//!   [`Registered`], not probed at invocation time.
//! - **Uniform invocation**: Every handler is driven through a single
//!   `perform(op, input)` entry point, so batch coordination treats all
//!   implementations identically.
//! - **Black-box calls**: A handler invocation may fail, but it never
//!   suspends the calling coordination logic. Retry, timeout, and
//!   cancellation belong to the handler, not the dispatch core.

use crate::error::{BoxError, CapabilityMismatch};
use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// A named contract over a fixed set of operations.
///
/// The operation selector is usually a field-less enum; the full required
/// set is declared once by [`operations`](Capability::operations) and is the
/// baseline every handler is checked against.
///
/// # Example
///
/// ```rust,ignore
/// struct Switchable;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum SwitchOp { Activate, Deactivate }
///
/// impl Capability for Switchable {
///     const NAME: &'static str = "switchable";
///     type Op = SwitchOp;
///     type Input = ();
///     type Output = ();
///
///     fn operations() -> &'static [SwitchOp] {
///         &[SwitchOp::Activate, SwitchOp::Deactivate]
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Capability",
    label = "missing `Capability` implementation",
    note = "Declare the operation selector, input, output, and the full operation set."
)]
pub trait Capability: Send + Sync + 'static {
    /// Name of the contract, used in conformance diagnostics.
    const NAME: &'static str;

    /// Operation selector type, usually a field-less enum.
    type Op: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Input carried by every invocation.
    type Input: Send + Sync;

    /// Output produced by every operation, `()` for pure-effect contracts.
    type Output: Send + Sync;

    /// The full operation set a conforming handler must provide.
    fn operations() -> &'static [Self::Op];
}

/// A handler satisfying a [`Capability`] contract.
///
/// This trait is object-safe: registries store handlers as
/// `Arc<dyn CapabilityHandler<C>>` (or boxed) and share the resolved
/// reference with batch invokers without transferring ownership.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `CapabilityHandler<{C}>`",
    label = "missing `CapabilityHandler` implementation",
    note = "Handlers must implement `perform` for every operation of `{C}`."
)]
pub trait CapabilityHandler<C: Capability>: Send + Sync + 'static {
    /// Executes one operation of the contract.
    fn perform(&self, op: C::Op, input: &C::Input) -> Result<C::Output, BoxError>;

    /// The operations this handler actually provides.
    ///
    /// Defaults to the capability's full set, which is what a plain trait
    /// implementation guarantees at compile time. Handlers whose surface is
    /// assembled at runtime (plugins, generated shims) override this so the
    /// registration-time conformance check can reject partial handlers.
    fn provided(&self) -> Cow<'static, [C::Op]> {
        Cow::Borrowed(C::operations())
    }
}

// Allow type-erased handlers to be used where CapabilityHandler is expected.
impl<C: Capability> CapabilityHandler<C> for Arc<dyn CapabilityHandler<C>> {
    fn perform(&self, op: C::Op, input: &C::Input) -> Result<C::Output, BoxError> {
        (**self).perform(op, input)
    }

    fn provided(&self) -> Cow<'static, [C::Op]> {
        (**self).provided()
    }
}

impl<C: Capability> CapabilityHandler<C> for Box<dyn CapabilityHandler<C>> {
    fn perform(&self, op: C::Op, input: &C::Input) -> Result<C::Output, BoxError> {
        (**self).perform(op, input)
    }

    fn provided(&self) -> Cow<'static, [C::Op]> {
        (**self).provided()
    }
}

/// Construction-time acceptance check run by registries on every
/// registration.
///
/// The default accepts unconditionally; capability handler slots compare the
/// handler's provided operations against the contract's required set and
/// reject partial handlers with [`CapabilityMismatch`] before any invocation
/// is attempted.
pub trait Registered: Send + Sync + 'static {
    /// Verify the handler may enter a registry slot.
    fn conformance(&self) -> Result<(), CapabilityMismatch> {
        Ok(())
    }
}

fn check_conformance<C: Capability>(
    handler: &dyn CapabilityHandler<C>,
) -> Result<(), CapabilityMismatch> {
    let provided = handler.provided();
    let missing: Vec<String> = C::operations()
        .iter()
        .filter(|op| !provided.iter().any(|p| p == *op))
        .map(|op| format!("{op:?}"))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CapabilityMismatch {
            capability: C::NAME,
            missing,
        })
    }
}

impl<C: Capability> Registered for Arc<dyn CapabilityHandler<C>> {
    fn conformance(&self) -> Result<(), CapabilityMismatch> {
        check_conformance(&**self)
    }
}

impl<C: Capability> Registered for Box<dyn CapabilityHandler<C>> {
    fn conformance(&self) -> Result<(), CapabilityMismatch> {
        check_conformance(&**self)
    }
}
