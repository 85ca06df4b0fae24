//! A mutable, unbalanced BST over any [`Ord`] element type. Every element is stored at most
//! once: adding a value that's already present is refused, not overwritten.
//!
//! # Examples
//!
//! ```
//! use bst_sort::traversal::Traversal;
//! use bst_sort::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&1));
//!
//! for x in [3, 7, 5, 11, 1, 14] {
//!     assert!(tree.add(x));
//! }
//!
//! // Adding a value twice is a no-op.
//! assert!(!tree.add(7));
//! assert_eq!(tree.len(), 6);
//!
//! // Sorted iteration falls out of the BST invariant.
//! assert_eq!(tree.traverse(Traversal::Inorder), [&1, &3, &5, &7, &11, &14]);
//! assert_eq!(tree.height(), 4);
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert!(tree.remove(&7));
//! assert!(!tree.remove(&7));
//! assert_eq!(tree.traverse(Traversal::Inorder), [&1, &3, &5, &11, &14]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{trace, warn};

use crate::traversal::Traversal;

mod dump;
mod iter;
mod traverse;

pub use dump::Dump;
pub use iter::Iter;

/// An owned, possibly empty, subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree. This can be used for adding, finding, and removing values and for
/// visiting them in several orders. The tree never rebalances itself so its shape (and
/// therefore its height) depends entirely on the order values were added in.
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The default drop recurses once per level, which a tree built from sorted input turns into
    // one frame per element. Detach children onto a heap stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Cloning re-adds the values in breadth-first order, which reproduces the exact shape of the
/// original without recursing through it.
impl<T> Clone for Tree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        self.traverse(Traversal::Preorder).into_iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether `value` is stored in the tree. This walks a single path from the root so it takes
    /// `O(height)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Adds `value` as a new leaf. Returns `false`, leaving the tree untouched, if the value is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add(1));
    /// assert!(!tree.add(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        if self.contains(&value) {
            trace!("refusing to add a duplicate value (size {})", self.size);
            return false;
        }

        let mut new_node = Node::new_boxed(value);
        let Some(mut current) = self.root.as_mut() else {
            self.root = Some(new_node);
            self.size += 1;
            trace!("added the root");
            return true;
        };

        // Offer the node to each node on the way down. An occupied slot hands it back and we
        // follow that slot; an equal value hands it back with nowhere to go.
        let mut depth = 1;
        loop {
            new_node = match current.add_child(new_node) {
                Ok(()) => {
                    self.size += 1;
                    trace!("added a leaf at depth {} (size {})", depth + 1, self.size);
                    return true;
                }
                Err(rejected) => rejected,
            };

            let next = match new_node.value.cmp(&current.value) {
                Ordering::Less => current.left.as_mut(),
                Ordering::Greater => current.right.as_mut(),
                Ordering::Equal => None,
            };
            let Some(child) = next else {
                warn!("refusing to attach a value equal to an existing node");
                return false;
            };
            current = child;
            depth += 1;
        }
    }

    /// Removes `value` from the tree. Returns `false`, leaving the tree untouched, if the value
    /// isn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.contains(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        if !self.contains(value) {
            trace!("nothing to remove (size {})", self.size);
            return false;
        }

        self.root = Node::remove_from(self.root.take(), value);
        self.size -= 1;
        trace!("removed a value (size {})", self.size);
        true
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root has a height of 1.
    pub fn height(&self) -> usize {
        Node::height(self.root.as_deref())
    }

    /// The smallest value in the tree, if there is one.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.find_min().value)
    }

    /// The largest value in the tree, if there is one.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Collects references to every value in the order described by `order`. See
    /// [`Traversal`] for the orders on offer.
    pub fn traverse(&self, order: Traversal) -> Vec<&T> {
        let root = self.root.as_deref();
        match order {
            Traversal::Preorder => traverse::breadth_first(root),
            Traversal::Inorder => self.iter().collect(),
            Traversal::Postorder => traverse::postorder(root),
        }
    }

    /// An iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.size)
    }

    /// A structural rendering of the tree, one node per line. See [`Dump`].
    pub fn dump(&self) -> Dump<'_, T> {
        Dump::new(self.root.as_deref())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Duplicates are skipped just like [`Tree::add`] skips them.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` holds exactly one value and owns up to two children. Everything in `left` is smaller
/// than `value` and everything in `right` is larger.
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Attaches `child` directly below `self`. The child is handed back if the matching slot is
    /// already taken or if it doesn't belong on either side (i.e. it's equal to `self.value`).
    fn add_child(&mut self, child: Box<Self>) -> Result<(), Box<Self>>
    where
        T: Ord,
    {
        match child.value.cmp(&self.value) {
            Ordering::Less if self.left.is_none() => self.left = Some(child),
            Ordering::Greater if self.right.is_none() => self.right = Some(child),
            _ => return Err(child),
        }

        if cfg!(debug_assertions) {
            if let Some(left) = self.left.as_deref() {
                assert!(self.value > left.value);
            }
            if let Some(right) = self.right.as_deref() {
                assert!(self.value < right.value);
            }
        }
        Ok(())
    }

    /// Removes the node holding `value` from the subtree rooted at `link` and returns the new
    /// root of that subtree.
    fn remove_from(link: Link<T>, value: &T) -> Link<T>
    where
        T: Ord,
    {
        let mut node = link?;
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove_from(node.left.take(), value);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_from(node.right.take(), value);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (Some(left), Some(mut right)) => {
                    // Move the in-order successor's value up here. The doomed value lands in the
                    // successor's slot which, being smaller than everything else on the right, is
                    // still a valid position for it, and has no left child to worry about.
                    mem::swap(&mut node.value, &mut right.find_min_mut().value);
                    node.left = Some(left);
                    node.right = Self::remove_from(Some(right), value);
                    Some(node)
                }
            },
        }
    }

    /// The leftmost (smallest) node of the subtree rooted at `self`.
    fn find_min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    fn find_min_mut(&mut self) -> &mut Self {
        match self.left {
            Some(ref mut left) => left.find_min_mut(),
            None => self,
        }
    }

    fn height(node: Option<&Self>) -> usize {
        match node {
            None => 0,
            Some(n) => Self::height(n.left.as_deref()).max(Self::height(n.right.as_deref())) + 1,
        }
    }
}
