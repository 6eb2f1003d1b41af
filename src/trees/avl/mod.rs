//! Implementation of AVL trees.
//! Balanced by keeping track of subtree heights, this is a worst-case balancing
//! algorithm that has a small memory overhead per node.
//!
//! Every node caches the height of its subtree. After an insertion, every ancestor of the new
//! node is fixed in leaf-to-root order: if its sons' heights differ by 2 it is rotated,
//! otherwise its height is recomputed. After a single insertion, no node is ever more unbalanced
//! than that, so one (single or double) rotation per node suffices.

mod iterators;
mod node;
mod rotations;
mod walker;

pub use iterators::*;
pub use node::{AVLNode, Subtree};

use super::*;
use log::debug;
use node::Heighted;
pub use walker::AVLWalker;

/// Returns the height of a subtree: `-1` if it is empty, and the node's cached height otherwise.
/// Takes `O(1)` time.
pub fn height_of<V>(tree: &Subtree<V>) -> Height {
    tree.height()
}

/// An AVL tree. Balanced by keeping track of subtree heights, this is a worst-case balancing
/// algorithm that has a small memory overhead per node.
///
/// Values are ordered by [`Ord`]. Equal values are allowed, and an inserted value that is equal
/// to a value already in the tree goes to its right.
///
///```
/// use avl_grove::avl::AVLTree;
///
/// let mut tree = AVLTree::new();
/// for x in [10, 20, 30, 40, 50].iter() {
///     assert!(tree.insert(*x));
/// }
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.root().map(|node| *node.node_value()), Some(20));
/// assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), vec![10, 20, 30, 40, 50]);
/// # tree.assert_correctness();
///```
#[derive(Clone, Debug)]
pub struct AVLTree<V> {
    tree: Subtree<V>,
    size: usize,
}

impl<V> AVLTree<V> {
    /// Creates an empty [`AVLTree`].
    pub fn new() -> Self {
        AVLTree {
            tree: Subtree::Empty,
            size: 0,
        }
    }

    /// Returns a walker at the root of the tree, for walking up and down the tree.
    ///```
    /// use avl_grove::{avl::AVLTree, Side};
    ///
    /// let mut tree: AVLTree<_> = (1..=7).collect();
    /// let mut walker = tree.walker();
    /// assert_eq!(walker.value(), Some(&4));
    /// walker.go_left().unwrap();
    /// walker.go_right().unwrap();
    /// assert_eq!(walker.value(), Some(&3));
    /// assert_eq!(walker.is_left_son(), Some(Side::Right));
    /// assert_eq!(walker.go_up(), Ok(Side::Right));
    ///```
    pub fn walker(&mut self) -> AVLWalker<'_, V> {
        AVLWalker::new(&mut self.tree)
    }

    /// The root node, for read-only access to the shape of the tree.
    pub fn root(&self) -> Option<&AVLNode<V>> {
        self.tree.node()
    }

    pub fn inner(&self) -> &Subtree<V> {
        &self.tree
    }

    /// The number of values in the tree, counting repetitions.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The number of edges on the longest path from the root to a leaf,
    /// or `-1` for an empty tree. Takes `O(1)` time.
    pub fn height(&self) -> Height {
        height_of(&self.tree)
    }

    /// Removes all values from the tree.
    pub fn clear(&mut self) {
        self.tree = Subtree::Empty;
        self.size = 0;
    }

    /// Iterates over the values in order. Equal values are yielded in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.tree, self.size)
    }

    /// Asserts that the heights are correct and that every node is balanced.
    /// Otherwise, panics.
    pub fn assert_heights(&self) {
        self.tree.assert_heights();
    }
}

impl<V: Ord> AVLTree<V> {
    /// Adds a value to the tree, and rebalances it. Always succeeds, and returns `true`.
    /// Takes `O(log n)` time.
    ///
    ///```
    /// use avl_grove::avl::AVLTree;
    ///
    /// let mut tree = AVLTree::new();
    /// assert!(tree.insert(10));
    /// assert!(tree.insert(10));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&10, &10]);
    /// # tree.assert_correctness();
    ///```
    pub fn insert(&mut self, value: V) -> bool {
        let mut walker = self.walker();
        walker.search_empty(&value);
        let res = walker.insert(value);
        debug_assert!(res.is_some());
        // dropping the walker goes up to the root, fixing every ancestor of the new node
        drop(walker);
        self.size += 1;
        debug!("inserted value, tree size {}, height {}", self.size, self.height());
        true
    }

    /// Returns `true` if some value in the tree is equal to `value`.
    /// Takes `O(log n)` time.
    pub fn contains(&self, value: &V) -> bool {
        let mut tree = &self.tree;
        while let Some(node) = tree.node() {
            tree = match value.cmp(&node.node_value) {
                std::cmp::Ordering::Less => &node.left,
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Returns the smallest value in the tree.
    pub fn min(&self) -> Option<&V> {
        let mut node = self.tree.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(&node.node_value)
    }

    /// Returns the biggest value in the tree.
    /// If it appears multiple times, returns the last inserted copy.
    pub fn max(&self) -> Option<&V> {
        let mut node = self.tree.node()?;
        while let Some(right) = node.right.node() {
            node = right;
        }
        Some(&node.node_value)
    }

    /// Asserts that the tree is a search tree, that the heights are correct,
    /// and that every node is balanced. Otherwise, panics.
    /// Takes `O(n)` time.
    pub fn assert_correctness(&self) {
        assert_search_order(self.root());
        self.assert_heights();
        assert_eq!(self.iter().count(), self.size, "invariant violated: wrong size");
    }
}

impl<V> Default for AVLTree<V> {
    fn default() -> Self {
        AVLTree::new()
    }
}

impl<V: Ord> SomeTree<V> for AVLTree<V> {
    type Node = AVLNode<V>;

    fn insert(&mut self, value: V) -> bool {
        AVLTree::insert(self, value)
    }

    fn root(&self) -> Option<&AVLNode<V>> {
        AVLTree::root(self)
    }

    fn len(&self) -> usize {
        AVLTree::len(self)
    }

    fn height(&self) -> Height {
        AVLTree::height(self)
    }

    fn assert_correctness(&self) {
        AVLTree::assert_correctness(self)
    }
}

impl<V: Ord> std::iter::FromIterator<V> for AVLTree<V> {
    /// This takes `O(n log n)` worst-case time.
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut tree = AVLTree::new();
        tree.extend(iter);
        tree
    }
}

impl<V: Ord> Extend<V> for AVLTree<V> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<V> IntoIterator for AVLTree<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree, self.size)
    }
}

impl<'a, V> IntoIterator for &'a AVLTree<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: std::fmt::Display> std::fmt::Display for AVLTree<V> {
    /// Draws the shape of the tree. See [`crate::print::render`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::print::render(self.root()))
    }
}
