//! This crate exposes a few classic in-memory data structures, mostly for
//! educational purposes. Each one is defined by how it picks what comes out
//! next.
//!
//! ## Priority queue
//!
//! [`priority::PriorityQueue`] stores values with an integer priority. Values
//! are always added to the back and removal scans for the highest priority.
//! Among equal priorities the value that arrived first leaves first.
//!
//! ## Turn queue
//!
//! [`turns::TurnQueue`] hands out turns round-robin. Each entry has a turn
//! budget. Entries go back in line until their budget is spent, and a budget
//! of zero or less never runs out.
//!
//! ## Binary Search Tree
//!
//! [`tree::Tree`] is a Binary Search Tree over integers. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree never rebalances, so inserting sorted values builds a tree whose
//! height is the number of values.
//!
//! ## Sharing between threads
//!
//! The structures do no locking of their own. With the `sync` feature (on by
//! default) [`sync::Shared`] wraps any of them in a mutex so each operation
//! runs as one critical section.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod priority;
#[cfg(feature = "sync")]
pub mod sync;
pub mod tree;
pub mod turns;

pub use error::{Error, Result};
