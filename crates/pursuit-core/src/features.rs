use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interned feature name. Policies declare these as constants so extractors
/// and weight tables cannot drift apart on spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureKey(pub &'static str);

impl core::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

/// Named numeric accumulators for one (state, action) evaluation.
///
/// Unset keys read as `0.0`. A vector is built fresh per evaluation and
/// never outlives the turn that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    values: BTreeMap<FeatureKey, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: FeatureKey, value: f64) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: FeatureKey) -> f64 {
        self.values.get(&key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, key: FeatureKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Linear combination over the keys both sides define; a feature with no
    /// weight (and a weight with no feature) contributes nothing.
    pub fn dot(&self, weights: &WeightVector) -> f64 {
        self.values
            .iter()
            .map(|(k, v)| v * weights.get(*k))
            .sum()
    }
}

impl FromIterator<(FeatureKey, f64)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (FeatureKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Fixed per-policy weights. Built once at startup and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightVector {
    values: BTreeMap<FeatureKey, f64>,
}

impl WeightVector {
    /// Weight for `key`, `0.0` when the table has no entry.
    pub fn get(&self, key: FeatureKey) -> f64 {
        self.values.get(&key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, key: FeatureKey) -> bool {
        self.values.contains_key(&key)
    }
}

impl FromIterator<(FeatureKey, f64)> for WeightVector {
    fn from_iter<I: IntoIterator<Item = (FeatureKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(FeatureKey, f64); N]> for WeightVector {
    fn from(entries: [(FeatureKey, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}
