//! Summation of partial contraction results.

use hashbrown::HashMap;

use crate::scalar::Scalar;
use crate::tensor::IndexSeq;

/// Map from index sequences to accumulated values.
pub type PartialMap<T> = HashMap<IndexSeq, T>;

/// Accumulates `(index sequence, value)` contributions.
///
/// Values landing on the same key are summed; nothing is ever overwritten.
/// Keys carry no ordering guarantee.
#[derive(Debug, Clone)]
pub struct EdgeAccumulator<T> {
    entries: PartialMap<T>,
}

impl<T: Scalar> EdgeAccumulator<T> {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Adds `value` to the entry at `key`.
    #[inline]
    pub fn add(&mut self, key: IndexSeq, value: T) {
        *self.entries.entry(key).or_insert_with(T::zero) += value;
    }

    /// Folds a whole partial map into this one.
    pub fn merge(&mut self, partial: PartialMap<T>) {
        self.entries.reserve(partial.len());
        for (key, value) in partial {
            self.add(key, value);
        }
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accumulated value at `key`, if any contribution landed there.
    pub fn get(&self, key: &[usize]) -> Option<T> {
        self.entries.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], T)> + '_ {
        self.entries.iter().map(|(key, &value)| (key.as_slice(), value))
    }

    /// Consumes the accumulator and returns the merged map.
    pub fn into_map(self) -> PartialMap<T> {
        self.entries
    }
}

impl<T: Scalar> Default for EdgeAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Extend<(IndexSeq, T)> for EdgeAccumulator<T> {
    fn extend<I: IntoIterator<Item = (IndexSeq, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<T: Scalar> FromIterator<(IndexSeq, T)> for EdgeAccumulator<T> {
    fn from_iter<I: IntoIterator<Item = (IndexSeq, T)>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Merges any number of partial maps into a fresh one, summing collisions.
pub fn merge_partials<T, I>(partials: I) -> PartialMap<T>
where
    T: Scalar,
    I: IntoIterator<Item = PartialMap<T>>,
{
    let mut acc = EdgeAccumulator::new();
    for partial in partials {
        acc.merge(partial);
    }
    acc.into_map()
}
