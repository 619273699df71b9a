//! Self-balancing binary search tree engine.
//!
//! The engine is layered, leaf-first:
//!
//! - [`TreeNode`]: the structural unit — owned children, a non-owning parent
//!   back-reference, an optional (sentinel-capable) value, and a metadata
//!   payload; heights, balance factors, and the uncle lookup are derived on
//!   demand from the live structure.
//! - [`BinarySearchTree`]: comparator-guided insert / find / contains /
//!   remove over tree nodes, generic over the metadata payload.
//! - [`BalancedTree`] + [`BalanceStrategy`]: the composition seam — a
//!   post-insert fixup selected per tree variant.
//! - [`AvlTree`]: height-balanced variant; every node's balance factor stays
//!   within `{-1, 0, 1}`.
//! - [`RedBlackTree`]: color-balanced variant; maintains the five red-black
//!   invariants, with the color tag stored as the node metadata payload.
//!
//! All trees are in-memory, single-threaded structures manipulated
//! synchronously by their caller; callers needing concurrent access must
//! serialize externally.
//!
//! # Examples
//!
//! ```rust
//! use arbors::tree::{AvlTree, RedBlackTree, TreeError};
//!
//! let mut avl = AvlTree::new();
//! for value in [30, 20, 40, 10, 25, 5] {
//!     avl.insert(value);
//! }
//! assert_eq!(avl.to_string(), "5,10,20,25,30,40");
//! assert_eq!(avl.root().value(), Some(20));
//!
//! // Removal on the balanced variants is an explicitly unsupported
//! // operation: the rebalance-on-delete path does not exist.
//! let mut red_black = RedBlackTree::new();
//! red_black.insert(1);
//! assert_eq!(red_black.remove(&1), Err(TreeError::RemoveUnsupported));
//! ```

mod avl;
mod balance;
mod error;
mod node;
mod red_black;
mod search;

pub use avl::AvlBalance;
pub use avl::AvlTree;
pub use balance::BalanceStrategy;
pub use balance::BalancedTree;
pub use error::TreeError;
pub use node::TreeNode;
pub use red_black::NodeColor;
pub use red_black::RedBlackBalance;
pub use red_black::RedBlackTree;
pub use search::BinarySearchTree;
