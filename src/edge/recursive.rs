//! General multi-mode contraction of a single edge.
//!
//! One distinct remaining sequence is explored per recursion level, so the
//! recursion depth never exceeds the contraction depth (at most the order).

use super::accumulator::{EdgeAccumulator, PartialMap};
use super::peel_distinct;
use crate::scalar::Scalar;

/// Contracts one edge `depth` times with `x`.
///
/// `indices` has length `d` and `1 <= depth <= d`. Returns the edge's
/// contribution as a map from length-`d - depth` sequences to values.
pub fn contract_edge<T: Scalar>(indices: &[usize], weight: T, x: &[T], depth: usize) -> PartialMap<T> {
    let mut acc = EdgeAccumulator::new();
    contract_edge_into(indices, weight, x, depth, &mut acc);
    acc.into_map()
}

/// Like [`contract_edge`], adding the contribution into `acc`.
pub fn contract_edge_into<T: Scalar>(
    indices: &[usize],
    weight: T,
    x: &[T],
    depth: usize,
    acc: &mut EdgeAccumulator<T>,
) {
    debug_assert!(depth >= 1 && depth <= indices.len());

    peel_distinct(indices, weight, x, |reduced, partial| {
        if depth == 1 {
            acc.add(reduced, partial);
        } else {
            contract_edge_into(&reduced, partial, x, depth - 1, acc);
        }
    });
}
