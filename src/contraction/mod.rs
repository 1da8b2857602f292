//! Contraction entry points.
//!
//! - [`contract`] / [`contract_with_config`]: one vector along `m` modes
//! - [`contract_k_1`]: closed-form contraction down to a vector
//! - [`contract_multi`] / [`contract_pair`]: one mode per vector, in sequence
//! - [`contract_dense`]: trailing-axis contraction of a dense array

mod config;
mod dense;
mod executor;
mod multi;
mod output;
mod plan;

pub use config::{ContractionConfig, EdgeStrategy};
pub use dense::{DenseContraction, contract_dense};
pub use executor::{contract, contract_k_1, contract_with_config};
pub use multi::{contract_multi, contract_pair};
pub use output::Contraction;
pub use plan::{ContractionPlan, ContractionRoute, plan_contraction};

use crate::error::ContractionResult;
use crate::scalar::Scalar;
use crate::tensor::{DenseTensor, SymmetricTensor};

/// Tensors that can be contracted with a vector along `depth` modes.
pub trait Contract<T: Scalar> {
    /// Shape of the contracted value.
    type Output;

    fn contract(&self, x: &[T], depth: usize) -> ContractionResult<Self::Output>;
}

impl<T: Scalar> Contract<T> for SymmetricTensor<T> {
    type Output = Contraction<T>;

    fn contract(&self, x: &[T], depth: usize) -> ContractionResult<Contraction<T>> {
        executor::contract(self, x, depth)
    }
}

impl<T: Scalar> Contract<T> for DenseTensor<T> {
    type Output = DenseContraction<T>;

    fn contract(&self, x: &[T], depth: usize) -> ContractionResult<DenseContraction<T>> {
        contract_dense(self, x, depth)
    }
}
