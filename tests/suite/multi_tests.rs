use pretty_assertions::assert_eq;
use symtensor_contract::{
    Contraction, ContractionError, DenseContraction, contract, contract_dense, contract_multi, contract_pair,
};

use crate::common::{assert_dense_close, close, sample_tensor, sample_vector};

fn vectors() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 0.5, -1.0],
        vec![0.25, 2.0, 1.0],
        vec![-1.5, 1.0, 0.5],
        vec![2.0, -0.5, 0.75],
    ]
}

#[test]
fn test_matches_stepwise_dense() {
    let tensor = sample_tensor();
    let dense = tensor.to_dense();
    let vectors = vectors();

    for count in 1..=tensor.order() {
        let mut expected = DenseContraction::Array(dense.clone());
        for vector in &vectors[..count] {
            expected = contract_dense(expected.as_array().unwrap(), vector, 1).unwrap();
        }

        let actual = contract_multi(&tensor, &vectors[..count]).unwrap();
        assert_eq!(actual.order(), tensor.order() - count);
        assert_dense_close(&actual.into_dense(), &expected);
    }
}

#[test]
fn test_repeated_vector_matches_full_contraction() {
    let tensor = sample_tensor();
    let x = sample_vector();

    let multi = contract_multi(&tensor, &[&x[..]; 4]).unwrap().as_scalar().unwrap();
    let full = contract(&tensor, &x, 4).unwrap().as_scalar().unwrap();
    assert!(close(multi, full), "{multi} != {full}");
}

#[test]
fn test_pair() {
    let tensor = sample_tensor();
    let vectors = vectors();

    let pair = contract_pair(&tensor, &vectors[0], &vectors[1]).unwrap();
    let multi = contract_multi(&tensor, &vectors[..2]).unwrap();

    assert_eq!(pair.kind(), "matrix");
    assert_eq!(pair, multi);
}

#[test]
fn test_no_vectors_returns_tensor() {
    let tensor = sample_tensor();
    let none: &[Vec<f64>] = &[];

    assert_eq!(contract_multi(&tensor, none).unwrap(), Contraction::Tensor(tensor));
}

#[test]
fn test_errors() {
    let tensor = sample_tensor();
    let mut vectors = vectors();
    vectors.push(sample_vector());

    assert_eq!(
        contract_multi(&tensor, &vectors),
        Err(ContractionError::TooManyVectors { count: 5, order: 4 })
    );
    assert_eq!(
        contract_pair(&tensor, &[1.0, 2.0, 3.0], &[1.0]),
        Err(ContractionError::DimensionMismatch { expected: 3, got: 1 })
    );
}
