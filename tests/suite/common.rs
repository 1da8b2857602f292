//! Shared fixtures and comparisons.

use approx::relative_eq;
use symtensor_contract::{DenseContraction, SymmetricTensor};

const TOLERANCE: f64 = 1e-9;

/// Order 4, dimension 3, with every kind of repetition pattern.
pub fn sample_tensor() -> SymmetricTensor<f64> {
    SymmetricTensor::from_edges(
        4,
        3,
        [
            ([0usize, 0, 1, 2], 1.5),
            ([0, 1, 1, 1], -2.0),
            ([2, 2, 2, 2], 0.5),
            ([0, 0, 0, 0], 3.0),
            ([1, 1, 2, 2], 0.25),
        ],
    )
    .unwrap()
}

pub fn sample_vector() -> Vec<f64> {
    vec![0.5, -1.25, 2.0]
}

pub fn close(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = TOLERANCE, max_relative = TOLERANCE)
}

pub fn slices_close(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| close(*x, *y))
}

pub fn dense_close(a: &DenseContraction<f64>, b: &DenseContraction<f64>) -> bool {
    match (a, b) {
        (DenseContraction::Scalar(x), DenseContraction::Scalar(y)) => close(*x, *y),
        (DenseContraction::Array(x), DenseContraction::Array(y)) => {
            x.shape() == y.shape() && slices_close(x.as_slice(), y.as_slice())
        }
        _ => false,
    }
}

#[track_caller]
pub fn assert_dense_close(actual: &DenseContraction<f64>, expected: &DenseContraction<f64>) {
    assert!(dense_close(actual, expected), "{actual:?} != {expected:?}");
}
