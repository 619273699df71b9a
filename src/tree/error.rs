//! Error types for the tree engine.

use std::fmt;

/// Errors produced by tree operations.
///
/// Tree operations have no transient failure modes: every error here is a
/// deterministic, fatal outcome that callers are expected to surface rather
/// than retry.
///
/// # Examples
///
/// ```rust
/// use arbors::tree::{BinarySearchTree, TreeError};
///
/// let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
/// tree.insert(10);
/// assert_eq!(tree.remove(&20), Err(TreeError::ValueNotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A removal targeted a value that is not present in the tree.
    ValueNotFound,
    /// Removal was requested on a self-balancing tree, whose
    /// rebalance-on-delete path is intentionally not implemented.
    RemoveUnsupported,
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueNotFound => formatter.write_str("value not found in the tree"),
            Self::RemoveUnsupported => {
                formatter.write_str("remove is not implemented for this tree")
            }
        }
    }
}

impl std::error::Error for TreeError {}
