use avl_grove::avl::*;
use avl_grove::*;
use rand::{self, Rng};

/// Walks the whole tree and checks every node against its sons, the way
/// the tree itself is not supposed to: heights are recomputed from scratch.
/// Returns the recomputed height.
pub fn check_subtree(node: Option<&AVLNode<i32>>) -> Height {
    match node {
        None => -1,
        Some(node) => {
            let lh = check_subtree(node.left());
            let rh = check_subtree(node.right());
            if let Some(left) = node.left() {
                assert!(left.node_value() < node.node_value());
            }
            if let Some(right) = node.right() {
                assert!(right.node_value() >= node.node_value());
            }
            assert!((lh - rh).abs() <= 1, "unbalanced node {}", node.node_value());
            let height = std::cmp::max(lh, rh) + 1;
            assert_eq!(node.height(), height, "wrong height at {}", node.node_value());
            height
        }
    }
}

/// Checks every invariant of the tree, both with the tree's own checks and with
/// an independent recomputation.
pub fn check_tree(tree: &AVLTree<i32>) {
    tree.assert_correctness();
    assert_eq!(check_subtree(tree.root()), tree.height());
    check_height_bound(tree.len(), tree.height());
}

/// The minimal number of nodes in an AVL tree of height `h`.
fn min_nodes(height: Height) -> usize {
    let (mut small, mut big) = (0usize, 1usize); // heights -1 and 0
    for _ in 0..height {
        let next = small + big + 1;
        small = big;
        big = next;
    }
    big
}

/// An AVL tree of height `h` has at least `min_nodes(h)` nodes. Equivalently, its height is at
/// most about `1.44 * log2(n + 2) - 0.33`.
pub fn check_height_bound(len: usize, height: Height) {
    if len == 0 {
        assert_eq!(height, -1);
        return;
    }
    assert!(len >= min_nodes(height), "height {} is too big for {} values", height, len);
    let bound = 1.4405 * ((len + 2) as f64).log2() - 0.3277;
    assert!((height as f64) <= bound + 1e-9);
}

/// Inserts the values one by one, checking the tree after every insertion,
/// and comparing its contents against a sorted vector.
pub fn insert_and_check(values: &[i32]) -> AVLTree<i32> {
    let mut tree = AVLTree::new();
    let mut model: Vec<i32> = vec![];
    for &value in values {
        assert!(tree.insert(value));
        let index = model.partition_point(|&x| x <= value);
        model.insert(index, value);
        check_tree(&tree);
        assert_eq!(tree.len(), model.len());
    }
    assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), model);
    tree
}

const MAX_VALUE: i32 = 200;

pub fn random_values(len: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-MAX_VALUE..=MAX_VALUE)).collect()
}
