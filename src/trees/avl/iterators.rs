//! In-order iterators over an [`AVLTree`](super::AVLTree).
//! Both keep an explicit stack of the nodes whose left subtree is being visited,
//! so the stack never grows past the height of the tree.

use super::node::*;

/// Borrowing in-order iterator.
pub struct Iter<'a, V> {
    stack: Vec<&'a AVLNode<V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(tree: &'a Subtree<V>, len: usize) -> Self {
        let mut res = Iter {
            stack: vec![],
            remaining: len,
        };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: &'a Subtree<V>) {
        while let Subtree::Root(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.node_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

/// Owning in-order iterator.
pub struct IntoIter<V> {
    // every node in the stack already had its left subtree taken out and pushed.
    stack: Vec<Box<AVLNode<V>>>,
    remaining: usize,
}

impl<V> IntoIter<V> {
    pub(super) fn new(tree: Subtree<V>, len: usize) -> Self {
        let mut res = IntoIter {
            stack: vec![],
            remaining: len,
        };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: Subtree<V>) {
        while let Some(mut node) = tree.into_node_boxed() {
            tree = std::mem::take(&mut node.left);
            self.stack.push(node);
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let right = std::mem::take(&mut node.right);
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(node.node_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
