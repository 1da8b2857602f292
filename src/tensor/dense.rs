//! Dense tensors with a common size on every axis.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ContractionError, ContractionResult};
use crate::scalar::Scalar;

/// A general (not necessarily symmetric) rank-`k` array of size `n` per axis.
///
/// Entries are stored row-major: the last axis varies fastest. A rank-0
/// tensor holds exactly one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseTensor<T> {
    rank: usize,
    dimension: usize,
    data: Vec<T>,
}

impl<T: Scalar> DenseTensor<T> {
    /// Creates a tensor filled with zeros.
    pub fn zeros(rank: usize, dimension: usize) -> Self {
        Self {
            rank,
            dimension,
            data: vec![T::zero(); num_entries(rank, dimension)],
        }
    }

    /// Wraps a row-major buffer of length `dimension^rank`.
    pub fn from_vec(rank: usize, dimension: usize, data: Vec<T>) -> ContractionResult<Self> {
        let expected = num_entries(rank, dimension);
        if data.len() != expected {
            return Err(ContractionError::shape(format!(
                "rank {} dimension {} needs {} entries, got {}",
                rank,
                dimension,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            rank,
            dimension,
            data,
        })
    }

    /// Builds a tensor by evaluating `f` at every multi-index, in row-major order.
    pub fn from_fn(rank: usize, dimension: usize, mut f: impl FnMut(&[usize]) -> T) -> Self {
        let mut data = Vec::with_capacity(num_entries(rank, dimension));
        visit_indices(rank, dimension, &mut |index| data.push(f(index)));
        Self {
            rank,
            dimension,
            data,
        }
    }

    /// Number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Size of every axis.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Shape as an explicit list of axis sizes.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.dimension; self.rank]
    }

    /// Total number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the tensor has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `index`, or `None` when the index has the wrong rank or is out of range.
    pub fn get(&self, index: &[usize]) -> Option<T> {
        self.offset(index).map(|offset| self.data[offset])
    }

    /// Row-major offset of `index`.
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.rank {
            return None;
        }
        index.iter().try_fold(0usize, |offset, &i| {
            (i < self.dimension).then(|| offset * self.dimension + i)
        })
    }

    /// Row-major entries.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the tensor and returns its row-major entries.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

fn num_entries(rank: usize, dimension: usize) -> usize {
    (0..rank).fold(1usize, |count, _| count * dimension)
}

/// Calls `f` with every multi-index of the given rank, in row-major order.
pub(crate) fn visit_indices(rank: usize, dimension: usize, f: &mut impl FnMut(&[usize])) {
    let mut prefix: SmallVec<[usize; 8]> = SmallVec::with_capacity(rank);
    visit_from(&mut prefix, rank, dimension, f);
}

fn visit_from(
    prefix: &mut SmallVec<[usize; 8]>,
    rank: usize,
    dimension: usize,
    f: &mut impl FnMut(&[usize]),
) {
    if prefix.len() == rank {
        f(prefix.as_slice());
        return;
    }
    for i in 0..dimension {
        prefix.push(i);
        visit_from(prefix, rank, dimension, f);
        prefix.pop();
    }
}
