//! A round-robin queue handing out turns. Entries come off the front in arrival order and go
//! back on the end while they still have turns left.
//!
//! A turn count of zero or less means the entry never runs out of turns.
//!
//! # Examples
//!
//! ```
//! use classic_ds::turns::TurnQueue;
//!
//! let mut queue = TurnQueue::new();
//! queue.register("Bob", 2);
//! queue.register("Tim", 0);
//!
//! let names: Vec<_> = (0..5)
//!     .map(|_| queue.next().unwrap().name().to_owned())
//!     .collect();
//!
//! // Bob gets two turns. Tim keeps going forever.
//! assert_eq!(names, ["Bob", "Tim", "Bob", "Tim", "Tim"]);
//! assert_eq!(queue.len(), 1);
//! ```

use std::collections::vec_deque::{self, VecDeque};
use std::fmt;

use crate::error::{Error, Result};

/// Someone waiting for a turn and how many turns they have left.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TurnEntry {
    name: String,
    remaining_turns: i32,
}

impl TurnEntry {
    /// Creates an entry. Any `remaining_turns` of zero or less means unlimited turns.
    pub fn new(name: impl Into<String>, remaining_turns: i32) -> Self {
        Self {
            name: name.into(),
            remaining_turns,
        }
    }

    /// The name this entry was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Turns left, counting the one about to be taken. Zero or less means unlimited.
    pub fn remaining_turns(&self) -> i32 {
        self.remaining_turns
    }

    /// Whether this entry never runs out of turns.
    pub fn is_unlimited(&self) -> bool {
        self.remaining_turns <= 0
    }
}

impl fmt::Display for TurnEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            write!(f, "{} (Turns:unlimited)", self.name)
        } else {
            write!(f, "{} (Turns:{})", self.name, self.remaining_turns)
        }
    }
}

/// A first in, first out queue of [`TurnEntry`]s that recycles entries until their turns are
/// used up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnQueue {
    people: VecDeque<TurnEntry>,
}

impl TurnQueue {
    /// Generates a new, empty `TurnQueue`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` to the back of the queue with `turns` turns. Zero or less means unlimited.
    pub fn register(&mut self, name: impl Into<String>, turns: i32) {
        let entry = TurnEntry::new(name, turns);
        tracing::trace!(name = %entry.name, turns, "register");
        self.people.push_back(entry);
    }

    /// Takes the entry at the front and gives it a turn. Unlimited entries go to the back
    /// unchanged. Entries with more than one turn left lose a turn and go to the back. Entries on
    /// their last turn are not put back.
    ///
    /// The returned entry shows the count at the moment the turn was taken, before any
    /// decrement.
    ///
    /// Returns [`Error::EmptyCollection`] if nobody is waiting.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::{turns::TurnQueue, Error};
    ///
    /// let mut queue = TurnQueue::new();
    /// queue.register("Sue", 2);
    ///
    /// assert_eq!(queue.next().unwrap().remaining_turns(), 2);
    /// assert_eq!(queue.next().unwrap().remaining_turns(), 1);
    /// assert_eq!(queue.next(), Err(Error::EmptyCollection));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<TurnEntry> {
        let mut entry = self.people.pop_front().ok_or(Error::EmptyCollection)?;

        if entry.is_unlimited() {
            tracing::trace!(name = %entry.name, "turn granted, unlimited");
            self.people.push_back(entry.clone());
        } else if entry.remaining_turns > 1 {
            let granted = entry.clone();
            entry.remaining_turns -= 1;
            tracing::trace!(name = %entry.name, remaining = entry.remaining_turns, "turn granted");
            self.people.push_back(entry);
            return Ok(granted);
        } else {
            tracing::trace!(name = %entry.name, "last turn granted");
        }

        Ok(entry)
    }

    /// How many entries are waiting.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterates the waiting entries front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, TurnEntry> {
        self.people.iter()
    }
}

impl fmt::Display for TurnQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.people.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TurnQueue {
    type Item = &'a TurnEntry;
    type IntoIter = vec_deque::Iter<'a, TurnEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
