//! The one way an operation in this crate can fail.

use thiserror::Error;

/// Errors returned by the extraction operations of the queue-like structures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An extraction ([`dequeue`][crate::priority::PriorityQueue::dequeue] or
    /// [`next`][crate::turns::TurnQueue::next]) was attempted on a structure holding no
    /// entries. The structure is left untouched.
    #[error("the collection is empty")]
    EmptyCollection,
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
