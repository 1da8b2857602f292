//! Rank-generic dense contraction.
//!
//! Contracts the trailing `m` axes of a rank-`k` dense array with a vector:
//!
//! ```text
//! y[i_1..i_{k-m}] = Σ A[i_1..i_k] * x[i_{k-m+1}] * ... * x[i_k]
//! ```
//!
//! Both `k` and `m` are runtime values. The outer `k - m` axes and the inner
//! `m` axes are enumerated by two recursions over row-major offsets.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::{ContractionError, ContractionResult};
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Result of a dense contraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DenseContraction<T> {
    /// Every axis was contracted.
    Scalar(T),
    /// Rank `k - m` array.
    Array(DenseTensor<T>),
}

impl<T: Scalar> DenseContraction<T> {
    /// Remaining rank (0 for a scalar).
    pub fn rank(&self) -> usize {
        match self {
            DenseContraction::Scalar(_) => 0,
            DenseContraction::Array(array) => array.rank(),
        }
    }

    pub fn as_scalar(&self) -> Option<T> {
        match self {
            DenseContraction::Scalar(value) => Some(*value),
            DenseContraction::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&DenseTensor<T>> {
        match self {
            DenseContraction::Array(array) => Some(array),
            DenseContraction::Scalar(_) => None,
        }
    }

    pub fn into_array(self) -> Option<DenseTensor<T>> {
        match self {
            DenseContraction::Array(array) => Some(array),
            DenseContraction::Scalar(_) => None,
        }
    }
}

/// Contracts the last `depth` axes of `array` with `x`.
///
/// Requires `x.len() == array.dimension()` and `0 < depth <= array.rank()`.
pub fn contract_dense<T: Scalar>(
    array: &DenseTensor<T>,
    x: &[T],
    depth: usize,
) -> ContractionResult<DenseContraction<T>> {
    ContractionError::check_vector(array.dimension(), x.len())?;
    ContractionError::check_depth(depth, array.rank())?;

    let outer_rank = array.rank() - depth;
    tracing::debug!(
        rank = array.rank(),
        dimension = array.dimension(),
        depth,
        "contracting dense tensor"
    );

    let walk = DenseWalk {
        data: array.as_slice(),
        x,
        dimension: array.dimension(),
        depth,
    };

    if outer_rank == 0 {
        return Ok(DenseContraction::Scalar(walk.inner_sum(depth, 0, T::one())));
    }

    let mut out = Vec::with_capacity(array.dimension().pow(outer_rank as u32));
    walk.collect_outer(outer_rank, 0, &mut out);
    DenseTensor::from_vec(outer_rank, array.dimension(), out).map(DenseContraction::Array)
}

struct DenseWalk<'a, T> {
    data: &'a [T],
    x: &'a [T],
    dimension: usize,
    depth: usize,
}

impl<T: Scalar> DenseWalk<'_, T> {
    /// Visits the outer axes; `base` is the row-major offset of the prefix.
    fn collect_outer(&self, remaining: usize, base: usize, out: &mut Vec<T>) {
        if remaining == 0 {
            out.push(self.inner_sum(self.depth, base, T::one()));
            return;
        }
        for i in 0..self.dimension {
            self.collect_outer(remaining - 1, base * self.dimension + i, out);
        }
    }

    /// Sums over the trailing axes, carrying the product of `x` entries so far.
    fn inner_sum(&self, remaining: usize, base: usize, coeff: T) -> T {
        if remaining == 0 {
            return self.data[base] * coeff;
        }
        (0..self.dimension).fold(T::zero(), |acc, i| {
            acc + self.inner_sum(remaining - 1, base * self.dimension + i, coeff * self.x[i])
        })
    }
}
