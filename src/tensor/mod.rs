//! Tensor representations consumed and produced by the engine.
//!
//! - [`SymmetricTensor`]: hyperedge storage, one entry per permutation orbit
//! - [`SymmetricMatrix`]: CSR matrix with mirrored off-diagonal entries
//! - [`DenseTensor`]: row-major array with the same size on every axis

mod dense;
mod matrix;
mod symmetric;

pub use dense::DenseTensor;
pub use matrix::SymmetricMatrix;
pub use symmetric::SymmetricTensor;

use smallvec::SmallVec;

/// Index sequence of one edge, inline up to order eight.
pub type IndexSeq = SmallVec<[usize; 8]>;
