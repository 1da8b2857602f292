//! Sequential contraction with several vectors.

use super::executor::contract;
use super::output::Contraction;
use crate::error::{ContractionError, ContractionResult};
use crate::scalar::Scalar;
use crate::tensor::SymmetricTensor;

/// Contracts `tensor` with each of `vectors` in turn, one mode per vector.
///
/// The running value starts as the tensor and steps down one order per
/// vector: tensors are contracted with depth 1, a matrix is applied by
/// matrix-vector product, a vector by dot product. At most `order` vectors
/// may be supplied; with none, the tensor itself is returned.
pub fn contract_multi<T, V>(tensor: &SymmetricTensor<T>, vectors: &[V]) -> ContractionResult<Contraction<T>>
where
    T: Scalar,
    V: AsRef<[T]>,
{
    if vectors.len() > tensor.order() {
        return Err(ContractionError::TooManyVectors {
            count: vectors.len(),
            order: tensor.order(),
        });
    }
    for vector in vectors {
        ContractionError::check_vector(tensor.dimension(), vector.as_ref().len())?;
    }

    tracing::debug!(
        order = tensor.order(),
        dimension = tensor.dimension(),
        vectors = vectors.len(),
        "contracting symmetric tensor with several vectors"
    );

    let Some((first, rest)) = vectors.split_first() else {
        return Ok(Contraction::Tensor(tensor.clone()));
    };

    let initial = contract(tensor, first.as_ref(), 1)?;
    rest.iter().enumerate().try_fold(initial, |current, (step, vector)| {
        tracing::trace!(step = step + 1, kind = current.kind(), order = current.order(), "applying vector");
        current.contract_vector(vector.as_ref())
    })
}

/// Contracts `tensor` with `v` and then `u`.
pub fn contract_pair<T: Scalar>(tensor: &SymmetricTensor<T>, v: &[T], u: &[T]) -> ContractionResult<Contraction<T>> {
    contract_multi(tensor, &[v, u])
}
