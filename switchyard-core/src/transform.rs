//! # Bound Transformation Layer
//!
//! The second handler kind: a unary function closed over fixed auxiliary
//! configuration. Where a [`CapabilityHandler`] exposes a whole operation
//! set, a transform exposes exactly one: apply itself to a value.
//!
//! Closures implement [`Transform`] directly, so the partial-application
//! pattern (a per-key conversion function bound to the active rate) is
//! expressed as ordinary capture:
//!
//! ```rust,ignore
//! let rate = 0.9;
//! let to_eur = move |value: &i64| Ok(((*value as f64) * rate).round() as i64);
//! registry.register("EUR".to_string(), BoxTransform::from_fn(to_eur))?;
//! ```
//!
//! [`CapabilityHandler`]: crate::CapabilityHandler

use crate::capability::Registered;
use crate::error::BoxError;

/// A unary transformation bound to fixed auxiliary parameters.
///
/// Transforms are assumed to share no mutable state with one another, which
/// is why batch fan-out over them leaves the evaluation order unspecified.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot transform values of type `{V}`",
    label = "missing `Transform<{V}>` implementation",
    note = "Transforms are unary: implement `apply(&self, value: &{V})`."
)]
pub trait Transform<V>: Send + Sync + 'static {
    /// The per-handler output type.
    type Output: Send + Sync + 'static;

    /// Apply the transformation to a single input value.
    fn apply(&self, value: &V) -> Result<Self::Output, BoxError>;
}

// Blanket impl for closures
impl<V, O, F> Transform<V> for F
where
    F: Fn(&V) -> Result<O, BoxError> + Send + Sync + 'static,
    O: Send + Sync + 'static,
{
    type Output = O;

    fn apply(&self, value: &V) -> Result<Self::Output, BoxError> {
        (self)(value)
    }
}

/// A type-erased transform, for registries holding differently-shaped
/// handlers under one slot type.
pub struct BoxTransform<V, O> {
    inner: Box<dyn Transform<V, Output = O>>,
}

impl<V: 'static, O: Send + Sync + 'static> BoxTransform<V, O> {
    /// Erase a concrete transform.
    pub fn new<T>(transform: T) -> Self
    where
        T: Transform<V, Output = O>,
    {
        Self {
            inner: Box::new(transform),
        }
    }

    /// Erase a closure. Identical to [`new`](BoxTransform::new) but guides
    /// inference for bare lambdas.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&V) -> Result<O, BoxError> + Send + Sync + 'static,
    {
        Self::new(f)
    }
}

impl<V: Send + Sync + 'static, O: Send + Sync + 'static> Transform<V> for BoxTransform<V, O> {
    type Output = O;

    fn apply(&self, value: &V) -> Result<Self::Output, BoxError> {
        self.inner.apply(value)
    }
}

// Transforms carry no capability contract, so every transform slot is
// accepted as registered.
impl<V: Send + Sync + 'static, O: Send + Sync + 'static> Registered for BoxTransform<V, O> {}
