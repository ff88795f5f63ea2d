//! # Batch Invoker
//!
//! Walks an ordered key sequence, resolves each key against a borrowed
//! [`DispatchRegistry`], and invokes the resolved handler. The invoker is a
//! coordination structure only: every handler call is a black-box
//! synchronous call that may fail but never suspends, and nothing is retried.
//!
//! Two partial-failure policies are supported, selected at construction:
//!
//! - [`BatchPolicy::FailFast`]: the first `KeyNotFound` or handler error
//!   aborts the batch. Effects already applied to earlier keys remain.
//! - [`BatchPolicy::CollectErrors`]: every key is attempted; the caller gets
//!   one outcome per key, in input order, and the batch itself never fails.

use crate::registry::DispatchRegistry;
use std::collections::HashMap;
use switchyard_core::{
    BatchPolicy, BatchReport, Capability, CapabilityHandler, DispatchError, Key, Registered,
    Transform,
};

/// Batch coordination over a borrowed registry.
///
/// The invoker reads handlers through the registry without taking ownership;
/// it is constructed per batch (or held alongside the registry borrow) and
/// carries only the selected [`BatchPolicy`].
pub struct BatchInvoker<'r, K, H> {
    registry: &'r DispatchRegistry<K, H>,
    policy: BatchPolicy,
}

impl<'r, K: Key, H: Registered> BatchInvoker<'r, K, H> {
    /// Create an invoker with the default fail-fast policy.
    pub fn new(registry: &'r DispatchRegistry<K, H>) -> Self {
        Self {
            registry,
            policy: BatchPolicy::default(),
        }
    }

    /// Select the partial-failure policy.
    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active policy.
    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    /// Invoke one capability operation for each key, in order.
    ///
    /// Under fail-fast the first failure aborts with `Err` and subsequent
    /// keys are not attempted; under collect-errors the call returns
    /// `Ok(report)` with exactly one outcome per input key regardless of
    /// individual failures.
    pub fn invoke_all<C, I>(
        &self,
        keys: I,
        op: C::Op,
        input: &C::Input,
    ) -> Result<BatchReport<K, C::Output>, DispatchError>
    where
        C: Capability,
        H: CapabilityHandler<C>,
        I: IntoIterator<Item = K>,
    {
        let keys = keys.into_iter();
        let mut report = BatchReport::with_capacity(keys.size_hint().0);

        for key in keys {
            let outcome = match self.registry.resolve(&key) {
                Ok(handler) => handler
                    .perform(op, input)
                    .map_err(|source| DispatchError::handler(&key, source)),
                Err(err) => Err(err),
            };

            match self.policy {
                BatchPolicy::FailFast => {
                    #[cfg(feature = "tracing")]
                    if let Err(err) = &outcome {
                        tracing::debug!(key = ?key, %err, "aborting batch");
                    }
                    report.push(key, Ok(outcome?));
                }
                BatchPolicy::CollectErrors => report.push(key, outcome),
            }
        }

        Ok(report)
    }

    /// Apply each key's registered transformation to a single input value.
    ///
    /// The returned mapping contains exactly one entry per requested key.
    /// Evaluation order is unspecified (transforms share no mutable state),
    /// so any `KeyNotFound` or handler error aborts the whole call
    /// regardless of policy; use
    /// [`transform_all_collected`](BatchInvoker::transform_all_collected)
    /// for per-key outcomes.
    pub fn transform_all<V, I>(
        &self,
        keys: I,
        value: &V,
    ) -> Result<HashMap<K, H::Output>, DispatchError>
    where
        H: Transform<V>,
        I: IntoIterator<Item = K>,
    {
        let mut results = HashMap::new();
        for key in keys {
            let handler = self.registry.resolve(&key)?;
            let output = handler
                .apply(value)
                .map_err(|source| DispatchError::handler(&key, source))?;
            results.insert(key, output);
        }
        Ok(results)
    }

    /// Collect-errors fan-out: every requested key gets an outcome entry.
    pub fn transform_all_collected<V, I>(
        &self,
        keys: I,
        value: &V,
    ) -> HashMap<K, Result<H::Output, DispatchError>>
    where
        H: Transform<V>,
        I: IntoIterator<Item = K>,
    {
        let mut results = HashMap::new();
        for key in keys {
            let outcome = match self.registry.resolve(&key) {
                Ok(handler) => handler
                    .apply(value)
                    .map_err(|source| DispatchError::handler(&key, source)),
                Err(err) => Err(err),
            };
            results.insert(key, outcome);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::BatchInvoker;
    use crate::registry::DispatchRegistry;
    use switchyard_core::{BatchPolicy, BoxTransform, Transform};

    fn scaled(factor: i64) -> BoxTransform<i64, i64> {
        BoxTransform::from_fn(move |value: &i64| Ok(*value * factor))
    }

    fn failing() -> BoxTransform<i64, i64> {
        BoxTransform::from_fn(|_| Err("intentional failure".into()))
    }

    fn registry() -> DispatchRegistry<String, BoxTransform<i64, i64>> {
        let mut registry = DispatchRegistry::new();
        registry.register("double".to_string(), scaled(2)).unwrap();
        registry.register("triple".to_string(), scaled(3)).unwrap();
        registry.register("broken".to_string(), failing()).unwrap();
        registry
    }

    #[test]
    fn test_transform_all_exactly_one_entry_per_key() {
        let registry = registry();
        let invoker = BatchInvoker::new(&registry);

        let results = invoker
            .transform_all(["double".to_string(), "triple".to_string()], &10)
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results["double"], 20);
        assert_eq!(results["triple"], 30);
    }

    #[test]
    fn test_transform_all_missing_key_aborts() {
        let registry = registry();
        let invoker = BatchInvoker::new(&registry);

        let err = invoker
            .transform_all(["double".to_string(), "missing".to_string()], &10)
            .unwrap_err();
        assert!(err.is_key_not_found());
    }

    #[test]
    fn test_transform_all_collected_keeps_going() {
        let registry = registry();
        let invoker = registry.invoker_with(BatchPolicy::CollectErrors);

        let outcomes = invoker.transform_all_collected(
            [
                "double".to_string(),
                "missing".to_string(),
                "broken".to_string(),
            ],
            &10,
        );

        assert_eq!(outcomes.len(), 3);
        assert_eq!(*outcomes["double"].as_ref().unwrap(), 20);
        assert!(outcomes["missing"].as_ref().unwrap_err().is_key_not_found());
        assert!(!outcomes["broken"].as_ref().unwrap_err().is_key_not_found());
    }

    #[test]
    fn test_duplicate_requested_keys_collapse() {
        let registry = registry();
        let invoker = BatchInvoker::new(&registry);

        let results = invoker
            .transform_all(["double".to_string(), "double".to_string()], &5)
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results["double"], 10);
    }

    #[test]
    fn test_policy_selection() {
        let registry = registry();
        assert_eq!(registry.invoker().policy(), BatchPolicy::FailFast);
        assert_eq!(
            registry.invoker_with(BatchPolicy::CollectErrors).policy(),
            BatchPolicy::CollectErrors
        );
    }

    #[test]
    fn test_broken_transform_fails() {
        let registry = registry();
        let handler = registry.resolve(&"broken".to_string()).unwrap();
        assert!(handler.apply(&1).is_err());
    }
}
