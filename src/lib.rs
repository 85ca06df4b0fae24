//! This crate exposes a Binary Search Tree (BST) and a couple of classroom sorting algorithms,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was added, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`tree::Tree`] here makes no
//! attempt to keep its height down, so adding already-sorted values gives a tree
//! that is really a linked list. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Sorting
//!
//! [`sort`] holds bubble sort and insertion sort. With the `visualize` feature
//! (on by default), [`visualize::Visualizer`] prints every step of a sort to the
//! terminal.
//!
//! ## Logging
//!
//! Operations emit [`log`] records (`trace` for tree mutations, `debug` for sort
//! summaries). Install any `log` implementation to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod sort;
pub mod traversal;
pub mod tree;
#[cfg(feature = "visualize")]
pub mod visualize;

pub use error::{Error, Result};
pub use traversal::Traversal;
pub use tree::Tree;
