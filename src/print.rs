//! Drawing the shape of a tree as text.

use crate::trees::SomeNode;
use std::fmt::Display;

const EMPTY: &str = "∅";

/// Draws the tree rooted at `root`, one node per line. Every node is followed by its right son
/// and then its left son, so that turning the drawing counter-clockwise shows the tree with
/// smaller values on the left. Missing sons of a node that has at least one son are drawn as `∅`.
///
///```
/// use avl_grove::avl::AVLTree;
/// use avl_grove::print::render;
///
/// let tree: AVLTree<_> = vec![10, 20, 30, 40].into_iter().collect();
/// assert_eq!(
///     render(tree.root()),
///     "20\n├─ 30\n│  ├─ 40\n│  └─ ∅\n└─ 10"
/// );
/// assert_eq!(render::<i32, avl_grove::avl::AVLNode<i32>>(None), "∅");
///```
pub fn render<V: Display, N: SomeNode<V>>(root: Option<&N>) -> String {
    match root {
        None => EMPTY.to_string(),
        Some(node) => render_node(node, ""),
    }
}

fn render_node<V: Display, N: SomeNode<V>>(node: &N, tab: &str) -> String {
    let mut out = node.value().to_string();
    if node.left().is_none() && node.right().is_none() {
        return out;
    }
    let children = [(node.right(), false), (node.left(), true)];
    for (child, is_last) in children.iter().cloned() {
        let (branch, child_tab) = if is_last {
            ("└─", format!("{}   ", tab))
        } else {
            ("├─", format!("{}│  ", tab))
        };
        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        out.push(' ');
        match child {
            None => out.push_str(EMPTY),
            Some(child) => out.push_str(&render_node(child, &child_tab)),
        }
    }
    out
}
