use pretty_assertions::assert_eq;
use symtensor_contract::{Contraction, ContractionError, DenseContraction, SymmetricTensor, contract};

use crate::common::{sample_tensor, sample_vector};

#[test]
fn test_single_edge_every_depth() {
    // 3 * x0^2 * x1 stored once as [0, 0, 1]
    let tensor = SymmetricTensor::from_edges(3, 2, [([0usize, 0, 1], 3.0)]).unwrap();
    let x = [2.0, 5.0];

    let matrix = contract(&tensor, &x, 1).unwrap().into_matrix().unwrap();
    assert_eq!(matrix.get(0, 0), 15.0);
    assert_eq!(matrix.get(0, 1), 6.0);
    assert_eq!(matrix.get(1, 0), 6.0);
    assert_eq!(matrix.get(1, 1), 0.0);

    let vector = contract(&tensor, &x, 2).unwrap();
    assert_eq!(vector, Contraction::Vector(vec![60.0, 12.0]));

    let scalar = contract(&tensor, &x, 3).unwrap();
    assert_eq!(scalar, Contraction::Scalar(180.0));
}

#[test]
fn test_result_kind_follows_residual_order() {
    let tensor = sample_tensor();
    let x = sample_vector();

    let kinds: Vec<_> = (1..=4)
        .map(|depth| contract(&tensor, &x, depth).unwrap().kind())
        .collect();
    assert_eq!(kinds, vec!["tensor", "matrix", "vector", "scalar"]);
}

#[test]
fn test_unit_vector_selects_slice() {
    let tensor = sample_tensor();
    let dense = tensor.to_dense();

    for i in 0..3 {
        let mut unit = vec![0.0; 3];
        unit[i] = 1.0;

        let slice = contract(&tensor, &unit, 1).unwrap().into_tensor().unwrap();
        assert_eq!(slice.order(), 3);
        for a in 0..3 {
            for b in 0..3 {
                for c in 0..3 {
                    assert_eq!(slice.get(&[a, b, c]), dense.get(&[i, a, b, c]).unwrap());
                }
            }
        }
    }
}

#[test]
fn test_result_tensor_is_canonical() {
    let tensor = sample_tensor();
    let result = contract(&tensor, &sample_vector(), 1).unwrap().into_tensor().unwrap();

    assert!(result.validate().is_ok());
    assert!(result.edges().all(|(key, _)| key.windows(2).all(|w| w[0] <= w[1])));
}

#[test]
fn test_homogeneous_in_vector() {
    let tensor = SymmetricTensor::from_edges(
        3,
        3,
        [([0usize, 0, 1], 3i64), ([0, 1, 2], 2), ([2, 2, 2], -1), ([1, 1, 2], 4)],
    )
    .unwrap();
    let x = [1i64, 2, 3];
    let doubled = [2i64, 4, 6];

    for depth in 1..=3 {
        let base = contract(&tensor, &x, depth).unwrap().into_dense();
        let scaled = contract(&tensor, &doubled, depth).unwrap().into_dense();
        let factor = 1i64 << depth;

        match (base, scaled) {
            (DenseContraction::Scalar(a), DenseContraction::Scalar(b)) => assert_eq!(b, a * factor),
            (DenseContraction::Array(a), DenseContraction::Array(b)) => {
                let expected: Vec<i64> = a.as_slice().iter().map(|v| v * factor).collect();
                assert_eq!(b.as_slice(), expected.as_slice());
            }
            _ => panic!("result rank changed with the vector"),
        }
    }
}

#[test]
fn test_empty_tensor_contracts_to_zero() {
    let tensor = SymmetricTensor::<f64>::new(3, 4).unwrap();
    let x = [1.0, 2.0, 3.0, 4.0];

    assert_eq!(contract(&tensor, &x, 3).unwrap(), Contraction::Scalar(0.0));
    assert_eq!(contract(&tensor, &x, 2).unwrap(), Contraction::Vector(vec![0.0; 4]));
    assert_eq!(contract(&tensor, &x, 1).unwrap().into_matrix().unwrap().nnz(), 0);
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        SymmetricTensor::<f64>::new(0, 3),
        Err(ContractionError::InvalidTensor { .. })
    ));
    assert_eq!(
        SymmetricTensor::from_edges(3, 2, [([0usize, 1], 1.0)]),
        Err(ContractionError::EdgeOrderMismatch { expected: 3, got: 2 })
    );
    assert_eq!(
        SymmetricTensor::from_edges(2, 2, [([0usize, 2], 1.0)]),
        Err(ContractionError::IndexOutOfRange { index: 2, dimension: 2 })
    );
}

#[test]
fn test_contraction_errors() {
    let tensor = sample_tensor();

    assert_eq!(
        contract(&tensor, &[1.0, 2.0], 1),
        Err(ContractionError::DimensionMismatch { expected: 3, got: 2 })
    );
    assert_eq!(
        contract(&tensor, &sample_vector(), 0),
        Err(ContractionError::InvalidDepth { depth: 0, order: 4 })
    );
    assert_eq!(
        contract(&tensor, &sample_vector(), 5),
        Err(ContractionError::InvalidDepth { depth: 5, order: 4 })
    );
}

#[test]
fn test_full_contraction_ignores_insertion_order() {
    let edges = [
        (vec![2usize, 0, 1], 2i64),
        (vec![1, 1, 0], 3),
        (vec![2, 2, 2], -1),
        (vec![0, 1, 1], 4),
    ];
    let x = [1i64, -2, 3];

    let forward = SymmetricTensor::from_edges(3, 3, edges.clone()).unwrap();
    let backward = SymmetricTensor::from_edges(3, 3, edges.into_iter().rev()).unwrap();

    assert_eq!(forward.num_edges(), 3);
    assert_eq!(contract(&forward, &x, 3).unwrap(), contract(&backward, &x, 3).unwrap());
}
