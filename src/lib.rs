//! A height-balanced (AVL) binary search tree.
//!
//! The tree lives in [`avl`]; [`print`] draws trees as text, and [`command`] is a small
//! interpreter of text commands for building a tree and looking at it.

pub mod command;
pub mod print;
pub mod trees;

pub use trees::*;
