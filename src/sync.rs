//! A lock around any of the structures in this crate so it can be shared between threads.
//!
//! None of the structures do their own locking. A [`Shared`] handle makes every forwarded
//! operation a single critical section: a `dequeue` scans and removes under one lock and a turn
//! is popped, counted down, and pushed back under one lock.
//!
//! # Examples
//!
//! ```
//! use std::thread;
//!
//! use classic_ds::{sync::Shared, turns::TurnQueue};
//!
//! let queue = Shared::new(TurnQueue::new());
//! queue.register("Bob", 50);
//! queue.register("Sue", 50);
//!
//! let workers: Vec<_> = (0..4)
//!     .map(|_| {
//!         let queue = queue.clone();
//!         thread::spawn(move || {
//!             let mut turns = 0;
//!             while queue.next().is_ok() {
//!                 turns += 1;
//!             }
//!             turns
//!         })
//!     })
//!     .collect();
//!
//! let total: usize = workers.into_iter().map(|w| w.join().unwrap()).sum();
//! assert_eq!(total, 100);
//! assert!(queue.is_empty());
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::priority::PriorityQueue;
use crate::tree::Tree;
use crate::turns::{TurnEntry, TurnQueue};

/// A cloneable handle to a structure behind a mutex. Clones share the same structure.
pub struct Shared<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Shared<T> {
    /// Wraps `inner` so it can be handed to other threads.
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Runs `f` with exclusive access to the structure. Use this when several operations must
    /// happen without anyone else getting in between.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::{priority::PriorityQueue, sync::Shared};
    ///
    /// let queue = Shared::new(PriorityQueue::new());
    /// queue.enqueue("a", 1);
    ///
    /// // Check and take in one step.
    /// let taken = queue.with(|q| if q.len() == 1 { q.dequeue().ok() } else { None });
    /// assert_eq!(taken.as_deref(), Some("a"));
    /// ```
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Takes the structure back out if this is the only handle left. Otherwise hands the handle
    /// back.
    pub fn into_inner(self) -> std::result::Result<T, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T: fmt::Display> fmt::Display for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.lock(), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("inner", &*self.inner.lock())
            .finish()
    }
}

impl Shared<PriorityQueue> {
    /// See [`PriorityQueue::enqueue`].
    pub fn enqueue(&self, value: impl Into<String>, priority: i32) {
        self.inner.lock().enqueue(value, priority);
    }

    /// See [`PriorityQueue::dequeue`].
    pub fn dequeue(&self) -> Result<String> {
        self.inner.lock().dequeue()
    }

    /// See [`PriorityQueue::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`PriorityQueue::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Shared<TurnQueue> {
    /// See [`TurnQueue::register`].
    pub fn register(&self, name: impl Into<String>, turns: i32) {
        self.inner.lock().register(name, turns);
    }

    /// See [`TurnQueue::next`].
    pub fn next(&self) -> Result<TurnEntry> {
        self.inner.lock().next()
    }

    /// See [`TurnQueue::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`TurnQueue::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Shared<Tree> {
    /// See [`Tree::insert`].
    pub fn insert(&self, value: i32) -> bool {
        self.inner.lock().insert(value)
    }

    /// See [`Tree::contains`].
    pub fn contains(&self, value: i32) -> bool {
        self.inner.lock().contains(value)
    }

    /// See [`Tree::height`].
    pub fn height(&self) -> usize {
        self.inner.lock().height()
    }

    /// See [`Tree::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`Tree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
