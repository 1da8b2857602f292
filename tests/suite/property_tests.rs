use proptest::prelude::*;
use symtensor_contract::edge::{contract_edge, contract_edge_worklist};
use symtensor_contract::{
    ContractionConfig, SymmetricTensor, contract, contract_dense, contract_k_1, contract_multi, contract_with_config,
};

use crate::common::{close, dense_close, slices_close};

fn tensor_and_vector() -> impl Strategy<Value = (SymmetricTensor<f64>, Vec<f64>)> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(order, dimension)| {
        let edge = (prop::collection::vec(0..dimension, order), -2.0f64..2.0);
        (
            prop::collection::vec(edge, 0..8),
            prop::collection::vec(-2.0f64..2.0, dimension),
        )
            .prop_map(move |(edges, x)| (SymmetricTensor::from_edges(order, dimension, edges).unwrap(), x))
    })
}

proptest! {
    #[test]
    fn sparse_matches_dense((tensor, x) in tensor_and_vector()) {
        let dense = tensor.to_dense();
        for depth in 1..=tensor.order() {
            let sparse = contract(&tensor, &x, depth).unwrap().into_dense();
            let expected = contract_dense(&dense, &x, depth).unwrap();
            prop_assert!(dense_close(&sparse, &expected), "depth {}: {:?} != {:?}", depth, sparse, expected);
        }
    }

    #[test]
    fn closed_form_matches_general((tensor, x) in tensor_and_vector()) {
        prop_assume!(tensor.order() >= 2);
        let depth = tensor.order() - 1;

        let general = contract(&tensor, &x, depth).unwrap().into_vector().unwrap();
        let fast = contract_k_1(&tensor, &x).unwrap();
        prop_assert!(slices_close(&fast, &general), "{:?} != {:?}", fast, general);

        let routed = contract_with_config(&tensor, &x, depth, &ContractionConfig::fast()).unwrap();
        prop_assert!(slices_close(routed.as_vector().unwrap(), &general));
    }

    #[test]
    fn worklist_matches_recursive((tensor, x) in tensor_and_vector()) {
        for depth in 1..=tensor.order() {
            let recursive = contract(&tensor, &x, depth).unwrap().into_dense();
            let worklist = contract_with_config(&tensor, &x, depth, &ContractionConfig::iterative())
                .unwrap()
                .into_dense();
            prop_assert!(dense_close(&recursive, &worklist));
        }
    }

    #[test]
    fn edge_forms_agree(
        indices in prop::collection::vec(0usize..3, 1..=5),
        weight in -2.0f64..2.0,
        x in prop::collection::vec(-2.0f64..2.0, 3),
    ) {
        let mut indices = indices;
        indices.sort_unstable();
        for depth in 1..=indices.len() {
            let recursive = contract_edge(&indices, weight, &x, depth);
            let worklist = contract_edge_worklist(&indices, weight, &x, depth);

            prop_assert_eq!(recursive.len(), worklist.len());
            for (key, value) in &recursive {
                prop_assert!(close(*value, worklist[key]));
                prop_assert_eq!(key.len(), indices.len() - depth);
            }
        }
    }

    #[test]
    fn repeated_vector_matches_full((tensor, x) in tensor_and_vector()) {
        let repeated = vec![x.clone(); tensor.order()];
        let multi = contract_multi(&tensor, &repeated).unwrap().as_scalar().unwrap();
        let full = contract(&tensor, &x, tensor.order()).unwrap().as_scalar().unwrap();
        prop_assert!(close(multi, full), "{} != {}", multi, full);
    }
}
