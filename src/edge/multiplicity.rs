//! Closed-form contraction of one edge down to order 1.
//!
//! Contracting an edge of length `d` with `d - 1` copies of `x` leaves one
//! free index. For each distinct value `v` of the edge, the surviving entry is
//! `w * M(remaining) * ∏ x[j]`, where `remaining` is the edge with one `v`
//! removed and `M` counts the distinct orderings of `remaining`. This runs in
//! time linear in the number of distinct values times `d`.

use alloc::vec::Vec;

use smallvec::{SmallVec, smallvec};

use crate::scalar::Scalar;
use crate::tensor::IndexSeq;

/// Contracts one edge with `x` along all but one mode.
///
/// Returns one `([v], value)` pair per distinct index value `v`, in order of
/// first occurrence.
pub fn contract_edge_to_vector<T: Scalar>(indices: &[usize], weight: T, x: &[T]) -> Vec<(IndexSeq, T)> {
    debug_assert!(!indices.is_empty());

    let counts = value_counts(indices);
    (0..counts.len())
        .map(|pos| {
            let remaining = counts.iter().enumerate().map(|(other, &(value, count))| {
                let count = if other == pos { count - 1 } else { count };
                (value, count)
            });

            let mut product = T::one();
            let mut multiplicities: SmallVec<[usize; 8]> = SmallVec::new();
            for (value, count) in remaining {
                for _ in 0..count {
                    product = product * x[value];
                }
                multiplicities.push(count);
            }

            let scaling = T::from_count(multinomial(multiplicities));
            (smallvec![counts[pos].0], scaling * weight * product)
        })
        .collect()
}

/// Number of distinct orderings of a multiset with the given multiplicities.
///
/// Exact whenever the count fits in `u64` (always the case for multisets of
/// at most 20 elements); larger counts are clamped to `u64::MAX`.
pub fn multinomial(counts: impl IntoIterator<Item = usize>) -> u64 {
    let mut total: u128 = 0;
    let mut result: u128 = 1;
    for count in counts {
        for i in 1..=count as u128 {
            total += 1;
            result = result.saturating_mul(total) / i;
        }
    }
    u64::try_from(result).unwrap_or(u64::MAX)
}

/// Distinct values of `indices` with their multiplicities, in first-occurrence order.
fn value_counts(indices: &[usize]) -> SmallVec<[(usize, usize); 8]> {
    let mut counts: SmallVec<[(usize, usize); 8]> = SmallVec::new();
    for &value in indices {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}
