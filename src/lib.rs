//! An unbalanced Binary Search Tree (BST) ordered by a pluggable
//! comparator, with order statistics and visitor-driven traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are defined recursively
//! using the notion of a `Node`: each node stores a value and up to two
//! child nodes. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have
//!    a value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have
//!    a value greater than its own value.
//!
//! "Less" and "greater" here mean whatever the tree's comparator says
//! they mean: the ordering is a function injected at construction
//! ([`Tree::with_comparator`]), not a hardcoded comparison, so the same
//! tree serves integers, strings, or structured values with custom
//! orderings. Values comparing equal are rejected, making the tree an
//! ordered set.
//!
//! These invariants make searching take `O(height)`. This tree does not
//! self-balance: on randomly ordered insertions the height stays around
//! `O(lg N)`, but sorted insertions degenerate it into a list with `O(N)`
//! operations. That trade-off is accepted by design.
//!
//! Beyond the core operations the tree answers kth-order-statistic
//! queries ([`Tree::kth_smallest`], [`Tree::kth_largest`]) and runs
//! visitor callbacks over five [`Traversal`] strategies, including a
//! breadth-first walk and a comparator-guided search trace.
//!
//! Nodes carry parent back-references, which makes the node graph cyclic;
//! the graph therefore lives in an arena owned by the tree and nodes are
//! addressed through stable, copyable [`NodeId`] handles rather than
//! pointers.
//!
//! # Examples
//!
//! ```
//! use bstree::{Traversal, Tree};
//!
//! let mut tree = Tree::new();
//! for value in [50, 70, 60, 20, 90, 10, 40, 100] {
//!     tree.insert(value).unwrap();
//! }
//!
//! assert_eq!(tree.size(), 8);
//! assert_eq!(tree.value(tree.min().unwrap()), Some(&10));
//! assert_eq!(tree.value(tree.kth_smallest(2).unwrap()), Some(&20));
//!
//! let report = tree.traverse(Traversal::InOrder, |_value, _walk| {});
//! assert_eq!(report.count, 8);
//!
//! let sorted: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(sorted, [10, 20, 40, 50, 60, 70, 90, 100]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod error;
mod print;
mod traverse;
mod tree;

#[cfg(test)]
mod test;

pub use crate::arena::NodeId;
pub use crate::error::Error;
pub use crate::traverse::{IterationReport, Traversal, Walk};
pub use crate::tree::{Iter, Tree};
