//! Sparse symmetric matrices in CSR form.
//!
//! Order-2 contraction results land here. Every off-diagonal entry `(i, j)`
//! is stored together with its mirror `(j, i)`; diagonal entries are stored
//! once.

use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::DenseTensor;
use crate::error::{ContractionError, ContractionResult};
use crate::scalar::Scalar;

/// Sparse symmetric `n × n` matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetricMatrix<T> {
    dimension: usize,
    /// Row pointers (length `dimension + 1`).
    row_ptr: Vec<usize>,
    /// Column indices, sorted within each row.
    col_indices: Vec<usize>,
    /// Non-zero values aligned with `col_indices`.
    values: Vec<T>,
}

impl<T: Scalar> SymmetricMatrix<T> {
    /// Creates an empty matrix.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            row_ptr: vec![0; dimension + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Builds a matrix from one triangle of entries.
    ///
    /// Each `((i, j), value)` with `i != j` is mirrored into `(j, i)`;
    /// diagonal entries are stored once. Repeated positions are summed.
    pub fn from_upper_entries<I>(dimension: usize, entries: I) -> ContractionResult<Self>
    where
        I: IntoIterator<Item = ((usize, usize), T)>,
    {
        let mut triplets: Vec<(usize, usize, T)> = Vec::new();
        for ((row, col), value) in entries {
            if let Some(index) = [row, col].into_iter().find(|&i| i >= dimension) {
                return Err(ContractionError::IndexOutOfRange { index, dimension });
            }
            triplets.push((row, col, value));
            if row != col {
                triplets.push((col, row, value));
            }
        }
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));

        let mut row_ptr = vec![0usize; dimension + 1];
        let mut col_indices: Vec<usize> = Vec::with_capacity(triplets.len());
        let mut values: Vec<T> = Vec::with_capacity(triplets.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, value) in triplets {
            if last == Some((row, col)) {
                if let Some(slot) = values.last_mut() {
                    *slot += value;
                }
                continue;
            }
            last = Some((row, col));
            row_ptr[row + 1] += 1;
            col_indices.push(col);
            values.push(value);
        }
        for row in 0..dimension {
            row_ptr[row + 1] += row_ptr[row];
        }

        Ok(Self {
            dimension,
            row_ptr,
            col_indices,
            values,
        })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored entries, counting both mirrors of an off-diagonal pair.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Entry at `(row, col)`; zero when not stored or out of range.
    pub fn get(&self, row: usize, col: usize) -> T {
        let Some((cols, values)) = self.row(row) else {
            return T::zero();
        };
        match cols.binary_search(&col) {
            Ok(pos) => values[pos],
            Err(_) => T::zero(),
        }
    }

    /// Column indices and values of one row.
    pub fn row(&self, row: usize) -> Option<(&[usize], &[T])> {
        if row >= self.dimension {
            return None;
        }
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        Some((&self.col_indices[range.clone()], &self.values[range]))
    }

    /// Iterates over stored `(row, col, value)` triplets in row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.dimension).flat_map(move |row| {
            let range = self.row_ptr[row]..self.row_ptr[row + 1];
            range.map(move |pos| (row, self.col_indices[pos], self.values[pos]))
        })
    }

    /// Matrix-vector product `A x`.
    pub fn matvec(&self, x: &[T]) -> ContractionResult<Vec<T>> {
        ContractionError::check_vector(self.dimension, x.len())?;

        let y = (0..self.dimension)
            .map(|row| {
                let range = self.row_ptr[row]..self.row_ptr[row + 1];
                self.col_indices[range.clone()]
                    .iter()
                    .zip(&self.values[range])
                    .fold(T::zero(), |acc, (&col, &value)| acc + value * x[col])
            })
            .collect();
        Ok(y)
    }

    /// Materializes the matrix as a rank-2 dense tensor.
    pub fn to_dense(&self) -> DenseTensor<T> {
        DenseTensor::from_fn(2, self.dimension, |index| self.get(index[0], index[1]))
    }
}
