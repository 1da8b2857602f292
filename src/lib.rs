//! # symtensor-contract
//!
//! Contraction engine for fully symmetric tensors stored as hyperedges.
//!
//! ## Features
//!
//! - Sparse symmetric tensors keyed by canonical (sorted) index multisets
//! - Multi-mode contraction of every edge, summed into one accumulator
//! - Closed-form fast path for contraction down to a vector
//! - Result shape picked by residual order: scalar, vector, sparse symmetric
//!   matrix or symmetric tensor
//! - Rank-generic dense contraction
//! - Sequential contraction with several vectors
//! - Generic scalar field: `f32`, `f64`, `f16`, integers, complex numbers
//!
//! ## Example
//!
//! ```
//! use symtensor_contract::{SymmetricTensor, contract, contract_k_1};
//!
//! // x0² x1 weighted 3, stored once for all three permutations
//! let tensor = SymmetricTensor::from_edges(3, 2, [([0usize, 0, 1], 3.0)])?;
//! let x = [2.0, 5.0];
//!
//! let scalar = contract(&tensor, &x, 3)?.as_scalar();
//! assert_eq!(scalar, Some(3.0 * 3.0 * 2.0 * 2.0 * 5.0));
//!
//! let gradient = contract_k_1(&tensor, &x)?;
//! assert_eq!(gradient, vec![60.0, 12.0]);
//! # Ok::<(), symtensor_contract::ContractionError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod contraction;
pub mod edge;
pub mod error;
pub mod scalar;
pub mod tensor;

pub use contraction::{
    Contract, Contraction, ContractionConfig, DenseContraction, EdgeStrategy, contract, contract_dense,
    contract_k_1, contract_multi, contract_pair, contract_with_config,
};
pub use error::{ContractionError, ContractionResult};
pub use scalar::Scalar;
pub use tensor::{DenseTensor, IndexSeq, SymmetricMatrix, SymmetricTensor};
