//! Symmetric tensor contraction engine.
//!
//! Validates the request, runs the selected edge kernel over every stored
//! edge into one accumulator, and shapes the result by residual order.

use alloc::vec::Vec;

use super::config::ContractionConfig;
use super::output::{Contraction, scatter_vector};
use super::plan::{ContractionPlan, ContractionRoute, plan_contraction};
use crate::edge::{
    EdgeAccumulator, PartialMap, contract_edge_into, contract_edge_to_vector, contract_edge_worklist_into,
};
use crate::error::{ContractionError, ContractionResult};
use crate::scalar::Scalar;
use crate::tensor::SymmetricTensor;

/// Contracts `tensor` with `x` along `depth` modes.
///
/// Every edge goes through the general edge contractor. The result is a
/// scalar, vector, symmetric matrix or symmetric tensor depending on
/// `order - depth`.
///
/// # Example
///
/// ```
/// use symtensor_contract::{SymmetricTensor, contract};
///
/// let tensor = SymmetricTensor::from_edges(3, 2, [([0usize, 0, 1], 3.0)])?;
/// let matrix = contract(&tensor, &[2.0, 5.0], 1)?.into_matrix().unwrap();
///
/// assert_eq!(matrix.get(0, 0), 15.0);
/// assert_eq!(matrix.get(0, 1), 6.0);
/// assert_eq!(matrix.get(1, 0), 6.0);
/// # Ok::<(), symtensor_contract::ContractionError>(())
/// ```
pub fn contract<T: Scalar>(
    tensor: &SymmetricTensor<T>,
    x: &[T],
    depth: usize,
) -> ContractionResult<Contraction<T>> {
    contract_with_config(tensor, x, depth, &ContractionConfig::default())
}

/// Contracts `tensor` with `x` along `depth` modes using `config`.
pub fn contract_with_config<T: Scalar>(
    tensor: &SymmetricTensor<T>,
    x: &[T],
    depth: usize,
    config: &ContractionConfig,
) -> ContractionResult<Contraction<T>> {
    let plan = plan_contraction(tensor.order(), tensor.dimension(), x.len(), depth, config)?;

    tracing::debug!(
        order = plan.order(),
        dimension = plan.dimension(),
        depth = plan.depth(),
        edges = tensor.num_edges(),
        route = plan.route().name(),
        "contracting symmetric tensor"
    );

    execute_plan(tensor, x, &plan)
}

/// Contracts `tensor` with `x` along all but one mode.
///
/// Observationally equal to `contract(tensor, x, order - 1)`, but each edge
/// is handled in closed form instead of by recursive expansion.
pub fn contract_k_1<T: Scalar>(tensor: &SymmetricTensor<T>, x: &[T]) -> ContractionResult<Vec<T>> {
    ContractionError::check_vector(tensor.dimension(), x.len())?;
    ContractionError::check_depth(tensor.order().saturating_sub(1), tensor.order())?;

    tracing::debug!(
        order = tensor.order(),
        dimension = tensor.dimension(),
        edges = tensor.num_edges(),
        "contracting symmetric tensor to a vector"
    );

    Ok(scatter_vector(tensor.dimension(), accumulate_order_minus_one(tensor, x)))
}

fn execute_plan<T: Scalar>(
    tensor: &SymmetricTensor<T>,
    x: &[T],
    plan: &ContractionPlan,
) -> ContractionResult<Contraction<T>> {
    let depth = plan.depth();
    let partials = match plan.route() {
        ContractionRoute::OrderMinusOne => accumulate_order_minus_one(tensor, x),
        ContractionRoute::EdgeRecursive => accumulate_edges(tensor, |indices, weight, acc| {
            contract_edge_into(indices, weight, x, depth, acc)
        }),
        ContractionRoute::EdgeWorklist => accumulate_edges(tensor, |indices, weight, acc| {
            contract_edge_worklist_into(indices, weight, x, depth, acc)
        }),
    };

    Contraction::from_partials(plan.residual_order(), tensor.dimension(), partials)
}

/// Runs `kernel` on every edge, sharing one accumulator.
fn accumulate_edges<T, F>(tensor: &SymmetricTensor<T>, mut kernel: F) -> PartialMap<T>
where
    T: Scalar,
    F: FnMut(&[usize], T, &mut EdgeAccumulator<T>),
{
    let mut acc = EdgeAccumulator::with_capacity(tensor.num_edges());
    for (indices, weight) in tensor.edges() {
        kernel(indices, weight, &mut acc);
    }
    acc.into_map()
}

fn accumulate_order_minus_one<T: Scalar>(tensor: &SymmetricTensor<T>, x: &[T]) -> PartialMap<T> {
    let mut acc = EdgeAccumulator::with_capacity(tensor.dimension());
    for (indices, weight) in tensor.edges() {
        acc.extend(contract_edge_to_vector(indices, weight, x));
    }
    acc.into_map()
}
