//! A priority queue that selects by scanning. Entries are always appended to the back and
//! `dequeue` walks the whole queue looking for the highest priority. When several entries share
//! that priority, the one closest to the front (the earliest inserted) wins.
//!
//! There is deliberately no heap here: a binary heap would not keep insertion order among equal
//! priorities without extra sequence numbers.
//!
//! # Examples
//!
//! ```
//! use classic_ds::priority::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue("low", 1);
//! queue.enqueue("high", 3);
//! queue.enqueue("also high", 3);
//!
//! assert_eq!(queue.to_string(), "[low (Pri:1), high (Pri:3), also high (Pri:3)]");
//!
//! // Ties go to whoever got in line first.
//! assert_eq!(queue.dequeue().as_deref(), Ok("high"));
//! assert_eq!(queue.dequeue().as_deref(), Ok("also high"));
//! assert_eq!(queue.dequeue().as_deref(), Ok("low"));
//! assert!(queue.dequeue().is_err());
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::slice;

use crate::error::{Error, Result};

/// A value waiting in a [`PriorityQueue`] along with its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityEntry {
    value: String,
    priority: i32,
}

impl PriorityEntry {
    fn new(value: String, priority: i32) -> Self {
        Self { value, priority }
    }

    /// The value that `dequeue` hands back.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The priority this entry was enqueued with.
    pub fn priority(&self) -> i32 {
        self.priority
    }
}

impl fmt::Display for PriorityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Pri:{})", self.value, self.priority)
    }
}

/// A queue whose entries leave in order of highest priority, first come first served among
/// equals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityQueue {
    entries: Vec<PriorityEntry>,
}

impl PriorityQueue {
    /// Generates a new, empty `PriorityQueue`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates an empty `PriorityQueue` with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Adds `value` to the back of the queue regardless of its priority.
    pub fn enqueue(&mut self, value: impl Into<String>, priority: i32) {
        let entry = PriorityEntry::new(value.into(), priority);
        tracing::trace!(value = %entry.value, priority, "enqueue");
        self.entries.push(entry);
    }

    /// Removes and returns the value with the highest priority. If several entries share the
    /// highest priority the one nearest the front is removed. The remaining entries keep their
    /// relative order.
    ///
    /// Returns [`Error::EmptyCollection`] if there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::{priority::PriorityQueue, Error};
    ///
    /// let mut queue = PriorityQueue::new();
    /// assert_eq!(queue.dequeue(), Err(Error::EmptyCollection));
    ///
    /// queue.enqueue("Item1", 1);
    /// queue.enqueue("Item2", 3);
    /// queue.enqueue("Item3", 2);
    ///
    /// assert_eq!(queue.dequeue().as_deref(), Ok("Item2"));
    /// assert_eq!(queue.to_string(), "[Item1 (Pri:1), Item3 (Pri:2)]");
    /// ```
    pub fn dequeue(&mut self) -> Result<String> {
        if self.entries.is_empty() {
            return Err(Error::EmptyCollection);
        }

        // Strictly greater, so an equal priority further back never displaces the current pick.
        let mut highest = 0;
        for (index, entry) in self.entries.iter().enumerate().skip(1) {
            if entry.priority > self.entries[highest].priority {
                highest = index;
            }
        }

        let entry = self.entries.remove(highest);
        tracing::trace!(value = %entry.value, priority = entry.priority, index = highest, "dequeue");
        Ok(entry.value)
    }

    /// How many entries are waiting.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in insertion order (not dequeue order).
    pub fn iter(&self) -> slice::Iter<'_, PriorityEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry)?;
        }
        f.write_str("]")
    }
}

impl<S: Into<String>> Extend<(S, i32)> for PriorityQueue {
    fn extend<I: IntoIterator<Item = (S, i32)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for PriorityQueue {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> IntoIterator for &'a PriorityQueue {
    type Item = &'a PriorityEntry;
    type IntoIter = slice::Iter<'a, PriorityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
