//! Per-edge contraction kernels.
//!
//! Contains implementations of:
//! - Summation of partial results (accumulator)
//! - General multi-mode contraction of one edge (recursive and worklist forms)
//! - Closed-form contraction of one edge down to order 1 (multiplicity)

mod accumulator;
mod multiplicity;
mod recursive;
mod worklist;

pub use accumulator::{EdgeAccumulator, PartialMap, merge_partials};
pub use multiplicity::{contract_edge_to_vector, multinomial};
pub use recursive::{contract_edge, contract_edge_into};
pub use worklist::{contract_edge_worklist, contract_edge_worklist_into};

use hashbrown::HashSet;

use crate::scalar::Scalar;
use crate::tensor::IndexSeq;

/// Removes one position at a time from `seq`, once per distinct result.
///
/// For each position `i` whose reduced sequence has not been produced by an
/// earlier position, calls `emit(reduced, weight * x[seq[i]])`.
pub(crate) fn peel_distinct<T: Scalar>(
    seq: &[usize],
    weight: T,
    x: &[T],
    mut emit: impl FnMut(IndexSeq, T),
) {
    let mut seen: HashSet<IndexSeq> = HashSet::with_capacity(seq.len());
    for (pos, &removed) in seq.iter().enumerate() {
        let mut reduced = IndexSeq::with_capacity(seq.len() - 1);
        reduced.extend_from_slice(&seq[..pos]);
        reduced.extend_from_slice(&seq[pos + 1..]);

        if seen.contains(&reduced) {
            continue;
        }
        seen.insert(reduced.clone());
        emit(reduced, weight * x[removed]);
    }
}
