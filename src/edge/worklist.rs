//! Iterative single-edge contraction.
//!
//! Same expansion as [`super::contract_edge`], driven level by level from an
//! explicit worklist of `(remaining sequence, weight)` pairs instead of the
//! call stack. Deduplication stays local to each pair being peeled.

use alloc::vec;
use alloc::vec::Vec;

use super::accumulator::{EdgeAccumulator, PartialMap};
use super::peel_distinct;
use crate::scalar::Scalar;
use crate::tensor::IndexSeq;

/// Contracts one edge `depth` times with `x` without recursion.
pub fn contract_edge_worklist<T: Scalar>(
    indices: &[usize],
    weight: T,
    x: &[T],
    depth: usize,
) -> PartialMap<T> {
    let mut acc = EdgeAccumulator::new();
    contract_edge_worklist_into(indices, weight, x, depth, &mut acc);
    acc.into_map()
}

/// Like [`contract_edge_worklist`], adding the contribution into `acc`.
pub fn contract_edge_worklist_into<T: Scalar>(
    indices: &[usize],
    weight: T,
    x: &[T],
    depth: usize,
    acc: &mut EdgeAccumulator<T>,
) {
    debug_assert!(depth >= 1 && depth <= indices.len());

    let mut level: Vec<(IndexSeq, T)> = vec![(IndexSeq::from_slice(indices), weight)];
    for remaining in (1..=depth).rev() {
        let mut next = Vec::new();
        for (seq, seq_weight) in &level {
            peel_distinct(seq, *seq_weight, x, |reduced, partial| {
                if remaining == 1 {
                    acc.add(reduced, partial);
                } else {
                    next.push((reduced, partial));
                }
            });
        }
        level = next;
    }
}
