//! This crate exposes a link-based Binary Search Tree (BST) over any totally
//! ordered value type, with explicit, on-demand rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! has up to two child `Node`s. The invariants kept by this crate are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates are kept, not
//!    merged.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! number of edges on the longest path from the root `Node` to a leaf `Node`).
//! This tree never restructures itself while values are added or removed, so
//! sorted input produces a chain with `height == len - 1`.
//! [`Tree::rebalance`] rebuilds it with a height of `floor(lg N)`, and
//! [`Tree::is_balanced`] reports whether that is worth doing. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree; see [`Tree::inorder`].
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=10).collect();
//! assert_eq!(tree.height(), 9);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.range_find(&3, &5), vec![&3, &4, &5]);
//! assert_eq!(tree.successor(&10), None);
//! assert_eq!(tree.predecessor(&10), Some(&9));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
pub mod linked;
mod node;


pub use error::Error;
pub use iter::Iter;
pub use linked::Tree;
pub use node::Node;
