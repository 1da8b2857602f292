//! Contraction results, shaped by residual order.

use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::dense::DenseContraction;
use super::executor::contract;
use crate::edge::PartialMap;
use crate::error::{ContractionError, ContractionResult};
use crate::scalar::{Scalar, dot};
use crate::tensor::{DenseTensor, SymmetricMatrix, SymmetricTensor};

/// Result of contracting a symmetric tensor.
///
/// The variant follows the residual order `r`: a scalar for `r = 0`, a dense
/// vector for `r = 1`, a sparse symmetric matrix for `r = 2` and a symmetric
/// tensor for `r >= 3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Contraction<T> {
    Scalar(T),
    Vector(Vec<T>),
    Matrix(SymmetricMatrix<T>),
    Tensor(SymmetricTensor<T>),
}

impl<T: Scalar> Contraction<T> {
    /// Materializes accumulated partials for a result of order `residual`.
    pub(crate) fn from_partials(
        residual: usize,
        dimension: usize,
        partials: PartialMap<T>,
    ) -> ContractionResult<Self> {
        let result = match residual {
            0 => Contraction::Scalar(partials.into_values().fold(T::zero(), |acc, value| acc + value)),
            1 => Contraction::Vector(scatter_vector(dimension, partials)),
            2 => Contraction::Matrix(SymmetricMatrix::from_upper_entries(
                dimension,
                partials.into_iter().map(|(key, value)| ((key[0], key[1]), value)),
            )?),
            order => Contraction::Tensor(SymmetricTensor::from_canonical(order, dimension, partials)),
        };
        Ok(result)
    }

    /// Remaining order of the value.
    pub fn order(&self) -> usize {
        match self {
            Contraction::Scalar(_) => 0,
            Contraction::Vector(_) => 1,
            Contraction::Matrix(_) => 2,
            Contraction::Tensor(tensor) => tensor.order(),
        }
    }

    /// Returns a human-readable name for the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Contraction::Scalar(_) => "scalar",
            Contraction::Vector(_) => "vector",
            Contraction::Matrix(_) => "matrix",
            Contraction::Tensor(_) => "tensor",
        }
    }

    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Contraction::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[T]> {
        match self {
            Contraction::Vector(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&SymmetricMatrix<T>> {
        match self {
            Contraction::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn as_tensor(&self) -> Option<&SymmetricTensor<T>> {
        match self {
            Contraction::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    pub fn into_vector(self) -> Option<Vec<T>> {
        match self {
            Contraction::Vector(values) => Some(values),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<SymmetricMatrix<T>> {
        match self {
            Contraction::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    pub fn into_tensor(self) -> Option<SymmetricTensor<T>> {
        match self {
            Contraction::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    /// Applies one more vector along a single mode.
    ///
    /// Tensors are contracted with depth 1, matrices multiply `x`, vectors
    /// take the dot product with `x`. A scalar has no mode left.
    pub fn contract_vector(self, x: &[T]) -> ContractionResult<Self> {
        match self {
            Contraction::Tensor(tensor) => contract(&tensor, x, 1),
            Contraction::Matrix(matrix) => matrix.matvec(x).map(Contraction::Vector),
            Contraction::Vector(values) => {
                ContractionError::check_vector(values.len(), x.len())?;
                Ok(Contraction::Scalar(dot(&values, x)))
            }
            Contraction::Scalar(_) => Err(ContractionError::InvalidDepth { depth: 1, order: 0 }),
        }
    }

    /// Converts the result into its dense counterpart.
    pub fn into_dense(self) -> DenseContraction<T> {
        match self {
            Contraction::Scalar(value) => DenseContraction::Scalar(value),
            Contraction::Vector(values) => {
                DenseContraction::Array(DenseTensor::from_fn(1, values.len(), |index| values[index[0]]))
            }
            Contraction::Matrix(matrix) => DenseContraction::Array(matrix.to_dense()),
            Contraction::Tensor(tensor) => DenseContraction::Array(tensor.to_dense()),
        }
    }
}

/// Scatters order-1 partials into a zero vector of length `dimension`.
pub(crate) fn scatter_vector<T: Scalar>(dimension: usize, partials: PartialMap<T>) -> Vec<T> {
    let mut out = vec![T::zero(); dimension];
    for (key, value) in partials {
        out[key[0]] += value;
    }
    out
}
