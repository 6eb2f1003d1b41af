//! Rebalancing of a single unbalanced node.
//!
//! Every function here takes ownership of the root of the subtree it rearranges,
//! and returns the new root of that subtree. No node is ever referenced from two places.

use super::node::*;
use log::trace;

const NO_SON_ERROR: &str = "invariant violated: an unbalanced node must have a son on its deeper side";

/// Rebalances a node whose sons' heights differ by exactly 2.
/// The sons are assumed to be balanced, with correct heights.
/// Returns the new root of the subtree, whose height is correct.
pub(super) fn balance<V>(node: Box<AVLNode<V>>) -> Box<AVLNode<V>> {
    if node.right.height() > node.left.height() {
        // the right subtree is deeper
        let right = node.right.node().expect(NO_SON_ERROR);
        if right.right.height() >= right.left.height() {
            rotate_right_right(node)
        } else {
            rotate_right_left(node)
        }
    } else {
        // the left subtree is deeper
        let left = node.left.node().expect(NO_SON_ERROR);
        if left.left.height() >= left.right.height() {
            rotate_left_left(node)
        } else {
            rotate_left_right(node)
        }
    }
}

/// Right right case: a single rotation to the left.
/// ```text
///     node                  right
///    /    \                /     \
///   a    right    =>    node      c
///       /     \        /    \
///      b       c      a      b
/// ```
fn rotate_right_right<V>(mut node: Box<AVLNode<V>>) -> Box<AVLNode<V>> {
    let mut right = node.right.take_node().expect(NO_SON_ERROR);
    node.right = std::mem::take(&mut right.left);
    node.rebuild_height();
    right.left = Subtree::from_boxed_node(node);
    right.rebuild_height();
    trace!("right right rotation, new subtree height {}", right.height);
    right
}

/// Right left case: a double rotation. The right son's left son becomes the root.
/// ```text
///     node                        rl
///    /    \                     /    \
///   a    right              node      right
///       /     \     =>     /    \    /     \
///      rl      d          a      b  c       d
///     /  \
///    b    c
/// ```
fn rotate_right_left<V>(mut node: Box<AVLNode<V>>) -> Box<AVLNode<V>> {
    let mut right = node.right.take_node().expect(NO_SON_ERROR);
    let mut rl = right.left.take_node().expect(NO_SON_ERROR);
    right.left = std::mem::take(&mut rl.right);
    node.right = std::mem::take(&mut rl.left);
    right.rebuild_height();
    node.rebuild_height();
    rl.left = Subtree::from_boxed_node(node);
    rl.right = Subtree::from_boxed_node(right);
    rl.rebuild_height();
    trace!("right left rotation, new subtree height {}", rl.height);
    rl
}

/// Left left case: a single rotation to the right. Mirrors [`rotate_right_right`].
fn rotate_left_left<V>(mut node: Box<AVLNode<V>>) -> Box<AVLNode<V>> {
    let mut left = node.left.take_node().expect(NO_SON_ERROR);
    node.left = std::mem::take(&mut left.right);
    node.rebuild_height();
    left.right = Subtree::from_boxed_node(node);
    left.rebuild_height();
    trace!("left left rotation, new subtree height {}", left.height);
    left
}

/// Left right case: a double rotation. Mirrors [`rotate_right_left`].
fn rotate_left_right<V>(mut node: Box<AVLNode<V>>) -> Box<AVLNode<V>> {
    let mut left = node.left.take_node().expect(NO_SON_ERROR);
    let mut lr = left.right.take_node().expect(NO_SON_ERROR);
    left.right = std::mem::take(&mut lr.left);
    node.left = std::mem::take(&mut lr.right);
    left.rebuild_height();
    node.rebuild_height();
    lr.left = Subtree::from_boxed_node(left);
    lr.right = Subtree::from_boxed_node(node);
    lr.rebuild_height();
    trace!("left right rotation, new subtree height {}", lr.height);
    lr
}
