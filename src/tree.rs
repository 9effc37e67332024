//! An unbalanced Binary Search Tree over `i32`s. Values are only ever added; inserting a value
//! that is already present does nothing.
//!
//! Every operation walks the tree with a loop or an explicit stack rather than recursion so a
//! lopsided tree (say, from inserting already sorted values) can be as deep as memory allows.
//!
//! # Examples
//!
//! ```
//! use classic_ds::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(5));
//! assert_eq!(tree.height(), 0);
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//! assert!(tree.contains(3));
//! assert_eq!(tree.height(), 2);
//!
//! // Inserting the same value again is a no-op.
//! assert!(!tree.insert(8));
//! assert_eq!(tree.len(), 3);
//!
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [3, 5, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{self, FromIterator};

/// A Binary Search Tree. Owns its (possibly missing) root [`Node`].
#[derive(Default)]
pub struct Tree {
    root: Option<Box<Node>>,
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the tree. Returns `false`, leaving the tree untouched, if `value` was
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) -> bool {
        let inserted = match &mut self.root {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };

        if inserted {
            self.len += 1;
            tracing::trace!(value, len = self.len, "insert");
        }
        inserted
    }

    /// Whether `value` has been inserted into this tree.
    pub fn contains(&self, value: i32) -> bool {
        self.root().is_some_and(|root| root.contains(value))
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has
    /// height 0 and a lone root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted input never gets rebalanced.
    /// tree.extend(1..=4);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The root node, if anything has been inserted.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// How many distinct values are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterates the values in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root())
    }

    /// Visits each node before its children, left subtree before right. Inserting values in this
    /// order into an empty tree rebuilds exactly the same shape.
    fn preorder(&self) -> impl Iterator<Item = i32> + '_ {
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right());
            stack.extend(node.left());
            Some(node.data)
        })
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("values", &Values(self.root()))
            .finish()
    }
}

/// Rebuilds the tree node by node so cloning a deep tree doesn't recurse.
impl Clone for Tree {
    fn clone(&self) -> Self {
        self.preorder().collect()
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A value in a [`Tree`] along with its (optional) children. Everything in the left subtree is
/// smaller than `data` and everything in the right subtree is larger.
pub struct Node {
    data: i32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Formats a subtree as the set of its values in order, walking it with [`Iter`] instead of
/// recursing into the children.
struct Values<'a>(Option<&'a Node>);

impl fmt::Debug for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(Iter::new(self.0)).finish()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("values", &Values(Some(self)))
            .finish()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach children onto a heap allocated stack so they're freed one at a time, each with
        // no children left to recurse into.
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Node {
    /// Construct a new leaf `Node` holding `data`.
    pub fn new(data: i32) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn data(&self) -> i32 {
        self.data
    }

    /// The subtree of smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The subtree of larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Adds `value` to the subtree rooted here, creating a new leaf where the search falls off
    /// the tree. Returns `false` if `value` is already in the subtree.
    pub fn insert(&mut self, value: i32) -> bool {
        let mut node = self;
        loop {
            let child = match value.cmp(&node.data) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };

            match child {
                Some(next) => node = &mut **next,
                None => {
                    *child = Some(Box::new(Self::new(value)));
                    return true;
                }
            }
        }
    }

    /// Whether `value` is in the subtree rooted here.
    pub fn contains(&self, value: i32) -> bool {
        let mut node = Some(self);
        while let Some(n) = node {
            node = match value.cmp(&n.data) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Iterates the values of the subtree rooted here in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(Some(self))
    }
}

/// An in-order iterator over the values of a [`Tree`] or [`Node`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Nodes whose left subtrees have been queued but which haven't been yielded yet.
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.data)
    }
}
