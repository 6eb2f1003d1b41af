//! The node and subtree types of the AVL tree, and the height bookkeeping.
//! This is a private module, its contents are re-exported by the `avl` module.

use super::super::*; // crate::trees::*

/// A possibly empty AVL subtree. Every node exclusively owns its sons.
#[derive(Clone, Debug)]
pub enum Subtree<V> {
    Empty,
    Root(Box<AVLNode<V>>),
}
use Subtree::*;

/// A node of an AVL tree: a value, the two sons, and the cached height
/// of the subtree rooted at this node.
#[derive(Clone, Debug)]
pub struct AVLNode<V> {
    pub(super) node_value: V,
    pub(super) height: Height,
    pub(super) left: Subtree<V>,
    pub(super) right: Subtree<V>,
}

/// For reading the cached `height` of possibly empty subtrees.
pub(super) trait Heighted {
    /// Reads the cached height. Never walks the subtree.
    fn height(&self) -> Height;
}

impl<V> Heighted for Subtree<V> {
    fn height(&self) -> Height {
        match self {
            Empty => -1,
            Root(node) => node.height,
        }
    }
}

impl<V> Subtree<V> {
    pub fn from_node(node: AVLNode<V>) -> Self {
        Root(Box::new(node))
    }

    pub fn from_boxed_node(node: Box<AVLNode<V>>) -> Self {
        Root(node)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    pub fn node(&self) -> Option<&AVLNode<V>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub(super) fn node_mut(&mut self) -> Option<&mut AVLNode<V>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub fn into_node_boxed(self) -> Option<Box<AVLNode<V>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Replaces this subtree with an empty one, and returns its root node.
    pub(super) fn take_node(&mut self) -> Option<Box<AVLNode<V>>> {
        std::mem::take(self).into_node_boxed()
    }

    /// Checks the cached height and the balance of every node in this subtree,
    /// bottom-up. Otherwise, panics.
    pub(super) fn assert_heights(&self) {
        if let Root(node) = self {
            node.left.assert_heights();
            node.right.assert_heights();
            node.assert_heights_locally();
        }
    }
}

impl<V> Default for Subtree<V> {
    fn default() -> Self {
        Empty
    }
}

impl<V> AVLNode<V> {
    /// A new leaf. It has no sons, and therefore height `0`.
    pub fn new(value: V) -> Self {
        AVLNode {
            node_value: value,
            height: 0,
            left: Empty,
            right: Empty,
        }
    }

    /// Recomputes the cached height from the sons' cached heights.
    pub(super) fn rebuild_height(&mut self) {
        self.height = std::cmp::max(self.left.height(), self.right.height()) + 1;
    }

    /// Returns the value stored in this node specifically.
    pub fn node_value(&self) -> &V {
        &self.node_value
    }

    /// The cached height of the subtree rooted at this node.
    pub fn height(&self) -> Height {
        self.height
    }

    pub fn left_subtree(&self) -> &Subtree<V> {
        &self.left
    }

    pub fn right_subtree(&self) -> &Subtree<V> {
        &self.right
    }

    /// Asserts that the cached height at the current node is correct,
    /// and that the node is balanced. Otherwise, panics.
    pub fn assert_heights_locally(&self) {
        let (lh, rh) = (self.left.height(), self.right.height());
        assert_eq!(
            self.height,
            std::cmp::max(lh, rh) + 1,
            "invariant violated: cached height doesn't match the sons' heights"
        );
        assert!(
            (lh - rh).abs() <= 1,
            "invariant violated: node is unbalanced (left height {}, right height {})",
            lh,
            rh
        );
    }
}

impl<V> SomeNode<V> for AVLNode<V> {
    fn value(&self) -> &V {
        &self.node_value
    }

    fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    fn right(&self) -> Option<&Self> {
        self.right.node()
    }
}
