//! Failures reported by tree operations.

use thiserror::Error;

/// The ways a tree operation can fail.
///
/// Every failure is reported to the caller as a value and leaves the tree
/// untouched; no operation panics on user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// [`insert`](crate::Tree::insert) was given a value comparing equal
    /// to one already stored.
    #[error("value compares equal to one already in the tree")]
    DuplicateValue,
    /// [`remove`](crate::Tree::remove) was given a value not present in
    /// the tree.
    #[error("value not found in the tree")]
    NotFound,
}
