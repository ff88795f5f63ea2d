//! Stock transforms: per-key multipliers bound to a rate table.
//!
//! Amounts are integer minor units (cents); each transform multiplies by its
//! bound rate and rounds to the nearest unit.

use crate::registry::DispatchRegistry;
use std::collections::HashMap;
use switchyard_core::{BoxError, Key, Registered, RegistryError, Transform};

/// A multiplier bound to one fixed conversion rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateTransform {
    rate: f64,
}

impl RateTransform {
    /// Bind a transform to a rate.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// The bound rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Transform<i64> for RateTransform {
    type Output = i64;

    fn apply(&self, value: &i64) -> Result<i64, BoxError> {
        Ok(((*value as f64) * self.rate).round() as i64)
    }
}

impl Registered for RateTransform {}

/// A named rate map, the auxiliary configuration transforms are bound to.
///
/// `bind` snapshots the table into per-key [`RateTransform`] handlers: the
/// registry stores bound values, so later table edits never reach already
/// registered handlers.
#[derive(Clone, Debug, Default)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Insert or update a rate.
    pub fn insert(&mut self, code: impl Into<String>, rate: f64) {
        self.rates.insert(code.into(), rate);
    }

    /// Look up a rate.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Number of rates in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when the table holds no rates.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Per-key bound transforms, one per table entry.
    pub fn bind(&self) -> impl Iterator<Item = (String, RateTransform)> + '_ {
        self.rates
            .iter()
            .map(|(code, rate)| (code.clone(), RateTransform::new(*rate)))
    }

    /// Register a bound transform for every table entry.
    pub fn register_into<K>(
        &self,
        registry: &mut DispatchRegistry<K, RateTransform>,
    ) -> Result<(), RegistryError>
    where
        K: Key + From<String>,
    {
        registry.extend(self.bind().map(|(code, transform)| (K::from(code), transform)))
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
