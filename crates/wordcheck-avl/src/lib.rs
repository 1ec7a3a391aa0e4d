//! Arena-backed AVL tree set.
//!
//! [`BalancedSet`] stores its nodes in a `Vec` and links them with indices,
//! so every node has exactly one owner slot (its parent, or the root slot)
//! and dropping the set releases the whole tree at once. Balancing can be
//! switched off at construction time, in which case the tree behaves as a
//! plain binary search tree.
//!
//! # Architecture
//!
//! - [`node`] -- node layout and height bookkeeping
//! - [`rotate`] -- single and double AVL rotations
//! - [`set`] -- the [`BalancedSet`] itself: insertion, lookup, copy/move
//! - [`traverse`] -- preorder / inorder / postorder walks and iteration

pub mod node;
pub mod rotate;
pub mod set;
pub mod traverse;

pub use set::{BalancedSet, SetOptions};
pub use traverse::Iter;

use std::collections::TryReserveError;

/// Error type for fallible set operations.
#[derive(Debug, thiserror::Error)]
pub enum SetError {
    /// Growing the node arena failed. The set is left unchanged.
    #[error("failed to allocate tree nodes: {0}")]
    Allocation(#[from] TryReserveError),
    /// A structural invariant does not hold (reported by `validate`).
    #[error("tree invariant violated: {0}")]
    Invariant(String),
}
