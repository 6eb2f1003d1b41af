// This is a private module, so no documentation for it directly.
// instead look for documentation of the `AVLWalker` struct.

use super::node::*;
use super::rotations::balance;
use crate::trees::Side;
use recursive_reference::*;

const NO_VALUE_ERROR: &str = "invariant violated: RecRef can't be empty";

/// This struct implements a walker for the [`AVLTree`](super::AVLTree) type.
/// It is a struct that has a mutable reference of the tree, and allows you to walk up and down on it.
/// The walker may also be in a position which is the son of a node, but doesn't contain
/// a node by itself, and then it is said to be in an empty position.
///
/// Going up the tree fixes the subtree that is being left: its height is recomputed,
/// and if it became unbalanced it is rotated back into balance. Therefore, after a
/// modification at the current position, every ancestor is fixed in leaf-to-root order.
///
/// The walker will automatically go back up the tree to the root when dropped,
/// in order to fix all the nodes on the way.
///
/// Internally, [`recursive_reference::RecRef`] is used, in order to be able to dynamically
/// go up and down the tree without upsetting the borrow checker.
pub struct AVLWalker<'a, V> {
    /// The telescope, holding references to all the subtrees from the root to the
    /// current position.
    rec_ref: RecRef<'a, Subtree<V>>,

    /// This array holds for every node on the path from the root to the current position,
    /// whether the path went to its left son or to its right son.
    is_left: Vec<Side>,
}

impl<'a, V> AVLWalker<'a, V> {
    pub(super) fn new(tree: &'a mut Subtree<V>) -> Self {
        AVLWalker {
            rec_ref: RecRef::new(tree),
            is_left: vec![],
        }
    }

    /// Returns `true` if the walker is at an empty position.
    pub fn is_empty(&self) -> bool {
        self.rec_ref.is_empty()
    }

    /// Returns true if the walker is at the root.
    /// Note: even at the root, the position might still be empty.
    pub fn is_root(&self) -> bool {
        self.is_left.is_empty()
    }

    /// If the current position is the left son of a node, returns [`Some(Left)`].
    /// If the current position is the right son of a node, returns [`Some(Right)`].
    /// If at the root, returns [`None`].
    pub fn is_left_son(&self) -> Option<Side> {
        self.is_left.last().cloned()
    }

    /// The number of edges between the root and the current position.
    pub fn depth(&self) -> usize {
        self.is_left.len()
    }

    /// The value stored at the current position, if any.
    pub fn value(&self) -> Option<&V> {
        Some(self.rec_ref.node()?.node_value())
    }

    /// The subtree rooted at the current position.
    pub fn inner(&self) -> &Subtree<V> {
        &self.rec_ref
    }

    /// Goes to the left son. Fails if the current position is empty.
    pub fn go_left(&mut self) -> Result<(), ()> {
        self.go_to(Side::Left)
    }

    /// Goes to the right son. Fails if the current position is empty.
    pub fn go_right(&mut self) -> Result<(), ()> {
        self.go_to(Side::Right)
    }

    fn go_to(&mut self, side: Side) -> Result<(), ()> {
        let res = RecRef::extend_result(&mut self.rec_ref, |tree| match tree.node_mut() {
            Some(node) => Ok(match side {
                Side::Left => &mut node.left,
                Side::Right => &mut node.right,
            }),
            None => Err(()),
        });
        if res.is_ok() {
            self.is_left.push(side);
        }
        res
    }

    /// Goes up to the parent, after fixing the subtree at the current position.
    /// Returns the side the walker came from, or an error if it was at the root.
    /// The root itself is fixed even when there is no parent to go to.
    pub fn go_up(&mut self) -> Result<Side, ()> {
        self.fix_current();
        match self.is_left.pop() {
            None => Err(()),
            Some(side) => {
                RecRef::pop(&mut self.rec_ref).expect(NO_VALUE_ERROR);
                Ok(side)
            }
        }
    }

    /// Goes all the way up to the root, fixing every subtree on the way.
    pub fn go_to_root(&mut self) {
        while self.go_up().is_ok() {}
    }

    /// Goes down to the empty position where `value` belongs:
    /// smaller values are to the left, equal or bigger values are to the right.
    pub(super) fn search_empty(&mut self, value: &V)
    where
        V: Ord,
    {
        loop {
            let side = match self.rec_ref.node() {
                None => return,
                Some(node) if *value < node.node_value => Side::Left,
                Some(_) => Side::Right,
            };
            self.go_to(side).expect(NO_VALUE_ERROR);
        }
    }

    /// Inserts the value into the tree at the current empty position.
    /// If the current position is not empty, returns [`None`].
    /// The new node is a leaf of height `0`. The walker stays at the new node;
    /// its ancestors are fixed when the walker goes up.
    pub(super) fn insert(&mut self, value: V) -> Option<()> {
        if !self.is_empty() {
            return None;
        }
        *self.rec_ref = Subtree::from_node(AVLNode::new(value));
        Some(())
    }

    /// Recomputes the height of the current node, rotating it first if its sons'
    /// heights differ by 2. The sons must already be balanced, with correct heights.
    fn fix_current(&mut self) {
        let mut node = match self.rec_ref.take_node() {
            None => return,
            Some(node) => node,
        };
        let (lh, rh) = (node.left.height(), node.right.height());
        if (lh - rh).abs() == 2 {
            node = balance(node);
        } else {
            node.rebuild_height();
        }
        *self.rec_ref = Subtree::from_boxed_node(node);
    }
}

impl<'a, V> std::ops::Drop for AVLWalker<'a, V> {
    fn drop(&mut self) {
        self.go_to_root()
    }
}
