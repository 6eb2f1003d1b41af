pub mod common;
pub use common::*;

use avl_grove::avl::AVLTree;
use proptest::prelude::*;

// Parameters for the inserted values. A small range makes repetitions common.
fn values_strategy() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-50..50i32, 0..300)
}

proptest::proptest! {
    #[test]
    fn invariants_hold_after_every_insertion(values in values_strategy()) {
        // checks balance, heights, order, and contents after each insertion
        insert_and_check(&values);
    }

    #[test]
    fn contents_are_preserved(values in values_strategy()) {
        let tree: AVLTree<i32> = values.iter().cloned().collect();
        let mut sorted = values.clone();
        sorted.sort();
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(tree.into_iter().collect::<Vec<_>>(), sorted);
    }

    #[test]
    fn order_of_insertion_doesnt_matter_for_contents(values in values_strategy()) {
        let tree1: AVLTree<i32> = values.iter().cloned().collect();
        let tree2: AVLTree<i32> = values.iter().rev().cloned().collect();
        prop_assert!(tree1.iter().eq(tree2.iter()));
    }
}

proptest::proptest! {
    #![proptest_config(ProptestConfig {
        cases: 20, .. ProptestConfig::default()
      })]
    #[test]
    fn big_trees_stay_logarithmic(values in proptest::collection::vec(any::<i32>(), 1000..5000)) {
        let tree: AVLTree<i32> = values.iter().cloned().collect();
        check_tree(&tree);
    }
}
