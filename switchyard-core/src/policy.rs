//! Batch invocation policy and per-key outcome reporting.

use crate::error::DispatchError;

/// Partial-failure policy for batch invocation, selected by the caller when
/// the invoker is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// The first `KeyNotFound` or handler error aborts the batch. Effects
    /// already applied to earlier keys remain; handlers are not assumed
    /// transactional, so there is no rollback.
    #[default]
    FailFast,

    /// Every key is attempted and the batch itself never fails; outcomes are
    /// returned per key so a caller can report all failures at once.
    CollectErrors,
}

/// Ordered per-key outcomes of a batch invocation.
///
/// Contains exactly one outcome per input key, in input order, regardless of
/// individual failures.
#[derive(Debug)]
pub struct BatchReport<K, T> {
    outcomes: Vec<(K, Result<T, DispatchError>)>,
}

// A derived Default would constrain K and T; an empty report needs neither.
impl<K, T> Default for BatchReport<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> BatchReport<K, T> {
    /// Create an empty report.
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    /// Create an empty report sized for a known batch length.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    /// Append the outcome for the next key in batch order.
    pub fn push(&mut self, key: K, outcome: Result<T, DispatchError>) {
        self.outcomes.push((key, outcome));
    }

    /// All outcomes, in input order.
    pub fn outcomes(&self) -> &[(K, Result<T, DispatchError>)] {
        &self.outcomes
    }

    /// True when no outcome is a failure.
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    /// The keys and values of successful outcomes, in input order.
    pub fn successes(&self) -> impl Iterator<Item = (&K, &T)> {
        self.outcomes
            .iter()
            .filter_map(|(key, outcome)| outcome.as_ref().ok().map(|value| (key, value)))
    }

    /// The keys and errors of failed outcomes, in input order.
    pub fn failures(&self) -> impl Iterator<Item = (&K, &DispatchError)> {
        self.outcomes
            .iter()
            .filter_map(|(key, outcome)| outcome.as_ref().err().map(|err| (key, err)))
    }

    /// Number of outcomes recorded.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// True when the batch recorded no outcomes.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl<K, T> IntoIterator for BatchReport<K, T> {
    type Item = (K, Result<T, DispatchError>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}
