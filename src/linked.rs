//! A link-based, unbalanced BST. Values are stored directly in the nodes (there is no separate
//! key) and duplicates are allowed: a value equal to a node's value is routed to that node's right
//! subtree. Nothing is rebalanced implicitly; call [`Tree::rebalance`] when the shape matters.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.find(&4), Some(&4));
//! assert_eq!(tree.find(&6), None);
//!
//! // Removing a missing value is an error and leaves the tree alone.
//! assert_eq!(tree.remove(&42), Err(Error::KeyNotFound));
//!
//! // Removing a node with two children lifts the largest value of its left subtree.
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//! assert_eq!(tree.inorder(), vec![&1, &3, &4, &7, &8, &9]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

use crate::error::Error;
use crate::iter::Iter;
use crate::node::{self, Link, Node};

/// A Binary Search Tree over values of type `T`. This can be used for adding, finding, replacing
/// and removing values as well as for sorted, range and neighbour queries.
///
/// Adding, clearing, dropping and [`Tree::iter`] run in constant stack space. Lookups, `height`,
/// the collected traversals, `rebalance` and `clone` recurse once per level, so a very long
/// degenerate chain (hundreds of thousands of ascending values) can overflow the stack in them.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

/// Renders the tree rotated 90 degrees counter-clockwise, one value per line. The root sits at
/// the left margin and every level below it is indented by another `"| "`.
///
/// ```
/// use linked_bst::Tree;
///
/// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => root.render(0, f),
            None => Ok(()),
        }
    }
}

/// Two trees are equal when they hold the same number of values and their (preorder) iterations
/// yield equal values pairwise. Two trees with the same values in different shapes are not equal.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            trace!(len = self.len, "clearing tree");
        }
        // Unlink iteratively so a long degenerate chain doesn't recurse once per node on drop.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
        }
        self.len = 0;
    }

    /// Returns a lazy preorder iterator over the values: each node, then its left subtree, then
    /// its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// let values: Vec<_> = tree.iter().collect();
    ///
    /// assert_eq!(values, vec![&2, &1, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// The values in preorder, collected from [`Tree::iter`].
    pub fn preorder(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// The values in inorder. For a valid tree this is ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.inorder(&mut out);
        }
        out
    }

    /// The values in postorder: left subtree, right subtree, then the node.
    pub fn postorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root() {
            root.postorder(&mut out);
        }
        out
    }

    /// The values level by level from the root, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.levelorder(), vec![&5, &3, &8, &1, &4]);
    /// ```
    pub fn levelorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(node.value());
            queue.extend(node.left());
            queue.extend(node.right());
        }
        out
    }

    /// The number of edges on the longest path from the root to a leaf. Both an empty tree and a
    /// tree with a single value have a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Whether the height stays below `2 * log2(len + 1) - 1`, the bound used to decide if a tree
    /// is close enough to a perfectly balanced tree with the same number of values. Trees with a
    /// height of 0 are always balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=10).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let len = self.inorder().len();
        let height = self.height();
        if height == 0 {
            return true;
        }
        let threshold = 2.0 * ((len + 1) as f64).log2() - 1.0;
        trace!(len, height, threshold, "checking balance");

        (height as f64) < threshold
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Adds a value to the tree. Values smaller than a node go left, everything else (duplicates
    /// included) goes right. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// ```
    pub fn add(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = node.child_link_mut(&value);
        }
        *link = Some(Node::new_boxed(value));
        self.len += 1;
        trace!(len = self.len, "added value");
    }

    /// Potentially finds the stored value equal to `item`. If no node matches, `None` is
    /// returned.
    pub fn find(&self, item: &T) -> Option<&T> {
        self.root().and_then(|root| root.find(item))
    }

    /// Whether some stored value equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Overwrites the stored value equal to `item` with `new_item` and returns the old value, or
    /// returns `None` (dropping `new_item`) if there is no such value.
    ///
    /// The node keeps its position, so `new_item` has to sort into the same place as `item` or
    /// later lookups may miss it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&(2, 'b'), (2, 'c')), Some((2, 'b')));
    /// assert_eq!(tree.replace(&(3, 'c'), (3, 'd')), None);
    /// assert_eq!(tree.inorder(), vec![&(1, 'a'), &(2, 'c')]);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let slot = self.root.as_mut()?.find_mut(item)?;
        trace!("replacing value in place");
        Some(mem::replace(slot, new_item))
    }

    /// Removes one value equal to `item` from the tree and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no stored value equals `item`. The tree is not modified
    /// in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = vec![1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, Error> {
        if !self.contains(item) {
            debug!(len = self.len, "value to remove is not in tree");
            return Err(Error::KeyNotFound);
        }
        let removed = node::remove(&mut self.root, item).ok_or(Error::KeyNotFound)?;
        self.len -= 1;
        if self.is_empty() {
            self.root = None;
        }
        trace!(len = self.len, "removed value");

        Ok(removed)
    }

    /// Every stored value `v` with `low <= v <= high`, in ascending order.
    ///
    /// This walks the whole tree regardless of how many values fall in the range.
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        self.inorder()
            .into_iter()
            .filter(|value| low <= *value && *value <= high)
            .collect()
    }

    /// Rebuilds the tree with minimal height. All values (duplicates included) are kept: they are
    /// pulled out in ascending order and added back middle first, recursing into the lower half
    /// and then the upper half.
    pub fn rebalance(&mut self) {
        let height_before = self.height();
        let mut values = Vec::with_capacity(self.len);
        if let Some(root) = self.root.take() {
            root.into_inorder(&mut values);
        }
        self.clear();

        let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        self.add_middle_first(&mut slots);
        debug!(
            len = self.len,
            height_before,
            height_after = self.height(),
            "rebalanced tree"
        );
    }

    fn add_middle_first(&mut self, slots: &mut [Option<T>]) {
        if slots.is_empty() {
            return;
        }
        let (lower, rest) = slots.split_at_mut(slots.len() / 2);
        let (middle, upper) = rest.split_at_mut(1);
        if let Some(value) = middle[0].take() {
            self.add(value);
        }
        self.add_middle_first(lower);
        self.add_middle_first(upper);
    }

    /// The smallest stored value strictly greater than `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&3), Some(&4));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        self.inorder().into_iter().find(|value| *value > item)
    }

    /// The largest stored value strictly less than `item`.
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        self.inorder().into_iter().rev().find(|value| *value < item)
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

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Tree<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        IntoIterator::into_iter(values).collect()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
