//! This module contains the traits shared by tree types, and the implementation
//! of the AVL tree.

pub mod avl;

/// Which son of its parent a position in the tree is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

/// The type that is used for height bookkeeping.
/// `i8` is definitely enough, since the height of a balanced tree is logarithmic in its size.
/// An empty subtree has height `-1`, a single node has height `0`.
pub type Height = i8;

/// A node type exposing an ordered value and its two sons.
/// This is all that is needed in order to draw a tree, or to check that it is a search tree.
pub trait SomeNode<V> {
    fn value(&self) -> &V;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;

    fn son(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }
}

/// The operations a search tree offers to its users.
pub trait SomeTree<V: Ord>: Default + std::iter::FromIterator<V> {
    type Node: SomeNode<V>;

    fn new() -> Self {
        Default::default()
    }

    /// Adds a value to the tree. Returns whether the value was added.
    fn insert(&mut self, value: V) -> bool;

    /// Read-only access to the shape of the tree.
    fn root(&self) -> Option<&Self::Node>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// The number of edges on the longest path from the root to a leaf,
    /// or `-1` for an empty tree.
    fn height(&self) -> Height;

    /// Checks that all of the invariants of the tree hold.
    /// Otherwise, panics.
    fn assert_correctness(&self);
}

/// Checks that the values of the tree are in search tree order:
/// values in a left subtree are strictly smaller than the node's value,
/// and values in a right subtree are greater or equal to it.
/// Otherwise, panics.
///
/// Takes `O(n)` time.
pub fn assert_search_order<V: Ord, N: SomeNode<V>>(root: Option<&N>) {
    // every stack entry carries the bounds the subtree has to respect:
    // `lower <= value < upper`.
    let mut stack: Vec<(&N, Option<&V>, Option<&V>)> = vec![];
    if let Some(node) = root {
        stack.push((node, None, None));
    }
    while let Some((node, lower, upper)) = stack.pop() {
        let value = node.value();
        if let Some(lower) = lower {
            assert!(lower <= value, "search order violated: right subtree has a smaller value");
        }
        if let Some(upper) = upper {
            assert!(value < upper, "search order violated: left subtree has a value that isn't smaller");
        }
        if let Some(left) = node.left() {
            stack.push((left, lower, Some(value)));
        }
        if let Some(right) = node.right() {
            stack.push((right, Some(value), upper));
        }
    }
}
