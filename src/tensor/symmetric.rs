//! Sparse symmetric tensors stored as hyperedges.

use alloc::format;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{DenseTensor, IndexSeq};
use crate::error::{ContractionError, ContractionResult};
use crate::scalar::Scalar;

/// A fully symmetric tensor of order `k` and cubical dimension `n`.
///
/// Each stored edge maps a canonical (non-decreasing) index sequence to a
/// weight and stands for every permutation of that sequence. Sequences that
/// are not stored weigh zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetricTensor<T> {
    order: usize,
    dimension: usize,
    edges: HashMap<IndexSeq, T>,
}

impl<T: Scalar> SymmetricTensor<T> {
    /// Creates an empty tensor.
    pub fn new(order: usize, dimension: usize) -> ContractionResult<Self> {
        if order == 0 {
            return Err(ContractionError::invalid_tensor("order must be at least 1"));
        }
        if dimension == 0 {
            return Err(ContractionError::invalid_tensor("dimension must be at least 1"));
        }
        Ok(Self {
            order,
            dimension,
            edges: HashMap::new(),
        })
    }

    /// Creates a tensor from `(indices, weight)` pairs.
    ///
    /// Index sequences may be given in any order; they are sorted into
    /// canonical form. Pairs naming the same orbit are summed.
    pub fn from_edges<I, S>(order: usize, dimension: usize, edges: I) -> ContractionResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<[usize]>,
    {
        let mut tensor = Self::new(order, dimension)?;
        for (indices, weight) in edges {
            tensor.insert_edge(indices.as_ref(), weight)?;
        }
        Ok(tensor)
    }

    /// Wraps an accumulated map whose keys are already canonical.
    pub(crate) fn from_canonical(order: usize, dimension: usize, edges: HashMap<IndexSeq, T>) -> Self {
        debug_assert!(edges.keys().all(|key| key.len() == order));
        Self {
            order,
            dimension,
            edges,
        }
    }

    /// Adds `weight` to the orbit of `indices`.
    pub fn insert_edge(&mut self, indices: &[usize], weight: T) -> ContractionResult<()> {
        if indices.len() != self.order {
            return Err(ContractionError::EdgeOrderMismatch {
                expected: self.order,
                got: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= self.dimension) {
            return Err(ContractionError::IndexOutOfRange {
                index,
                dimension: self.dimension,
            });
        }

        let key = canonical(indices);
        *self.edges.entry(key).or_insert_with(T::zero) += weight;
        Ok(())
    }

    /// Number of modes.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Common size of every mode.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over stored `(canonical indices, weight)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&[usize], T)> + '_ {
        self.edges.iter().map(|(key, &weight)| (key.as_slice(), weight))
    }

    /// Entry at any permutation of `indices`; zero when not stored.
    pub fn get(&self, indices: &[usize]) -> T {
        if indices.len() != self.order {
            return T::zero();
        }
        self.edges
            .get(&canonical(indices))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Materializes every entry, including all permutations of each edge.
    pub fn to_dense(&self) -> DenseTensor<T> {
        DenseTensor::from_fn(self.order, self.dimension, |index| self.get(index))
    }

    /// Checks that the stored keys are canonical and in range.
    pub fn validate(&self) -> ContractionResult<()> {
        for key in self.edges.keys() {
            if key.len() != self.order {
                return Err(ContractionError::EdgeOrderMismatch {
                    expected: self.order,
                    got: key.len(),
                });
            }
            if key.windows(2).any(|pair| pair[0] > pair[1]) {
                return Err(ContractionError::invalid_tensor(format!(
                    "edge {:?} is not in canonical order",
                    key.as_slice()
                )));
            }
            if let Some(&index) = key.iter().find(|&&i| i >= self.dimension) {
                return Err(ContractionError::IndexOutOfRange {
                    index,
                    dimension: self.dimension,
                });
            }
        }
        Ok(())
    }
}

fn canonical(indices: &[usize]) -> IndexSeq {
    let mut key = IndexSeq::from_slice(indices);
    key.sort_unstable();
    key
}
