//! The building block of a [`Tree`][crate::Tree].
//!
//! A `Node` owns its value and, through `Box`es, at most one left and one right child. There are
//! no parent pointers: anything that needs to rewire a parent does so by recursing over the
//! parent's owning `Link` and reassigning it on the way back.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// An owning slot for a child (or the root). `None` marks the empty position below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of a [`Tree`][crate::Tree]. Every value in the left subtree compares less than
/// this node's value and every value in the right subtree compares greater than or equal to it.
#[derive(Clone)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3, 4].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 2);
    /// assert_eq!(root.left().map(|n| n.height()), Some(0));
    /// assert_eq!(root.right().map(|n| n.height()), Some(1));
    /// ```
    pub fn height(&self) -> usize {
        if self.is_leaf() {
            return 0;
        }
        let left_height = self.left().map_or(0, Node::height);
        let right_height = self.right().map_or(0, Node::height);

        1 + left_height.max(right_height)
    }

    pub(crate) fn take_children(&mut self) -> (Link<T>, Link<T>) {
        (self.left.take(), self.right.take())
    }

    /// The child slot a search for `value` continues into. Values smaller than this node's go
    /// left, everything else (equal values included) goes right.
    pub(crate) fn child_link_mut(&mut self, value: &T) -> &mut Link<T>
    where
        T: Ord,
    {
        if *value < self.value {
            &mut self.left
        } else {
            &mut self.right
        }
    }

    pub(crate) fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        match item.cmp(&self.value) {
            Ordering::Less => self.left().and_then(|n| n.find(item)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right().and_then(|n| n.find(item)),
        }
    }

    pub(crate) fn find_mut(&mut self, item: &T) -> Option<&mut T>
    where
        T: Ord,
    {
        match item.cmp(&self.value) {
            Ordering::Less => self.left.as_mut().and_then(|n| n.find_mut(item)),
            Ordering::Equal => Some(&mut self.value),
            Ordering::Greater => self.right.as_mut().and_then(|n| n.find_mut(item)),
        }
    }

    pub(crate) fn inorder<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.inorder(out);
        }
        out.push(&self.value);
        if let Some(right) = self.right() {
            right.inorder(out);
        }
    }

    pub(crate) fn postorder<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.postorder(out);
        }
        if let Some(right) = self.right() {
            right.postorder(out);
        }
        out.push(&self.value);
    }

    /// Consumes the subtree, moving its values out in ascending order.
    pub(crate) fn into_inorder(self: Box<Self>, out: &mut Vec<T>) {
        let Node { value, left, right } = *self;
        if let Some(left) = left {
            left.into_inorder(out);
        }
        out.push(value);
        if let Some(right) = right {
            right.into_inorder(out);
        }
    }

    /// Writes the subtree rotated 90 degrees counter-clockwise: the right subtree above the node
    /// and the left subtree below it, each level indented by one `"| "`.
    pub(crate) fn render(&self, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        if let Some(right) = self.right() {
            right.render(depth + 1, f)?;
        }
        writeln!(f, "{}{}", "| ".repeat(depth), self.value)?;
        if let Some(left) = self.left() {
            left.render(depth + 1, f)?;
        }
        Ok(())
    }
}

/// Removes the first node on the search path of `item` from the subtree owned by `link` and
/// returns its value, or `None` if no node matches.
///
/// A node with two children keeps its position: it takes over the largest value of its left
/// subtree and that node is unlinked instead. A node with at most one child is replaced in `link`
/// by that child.
pub(crate) fn remove<T>(link: &mut Link<T>, item: &T) -> Option<T>
where
    T: Ord,
{
    let node = link.as_mut()?;
    match item.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, item),
        Ordering::Greater => remove(&mut node.right, item),
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            let largest = remove_largest(&mut node.left)?;
            Some(mem::replace(&mut node.value, largest))
        }
        Ordering::Equal => {
            let mut removed = link.take()?;
            *link = removed.left.take().or_else(|| removed.right.take());
            Some(removed.value)
        }
    }
}

/// Unlinks the rightmost node of the subtree owned by `link`, letting its left child (if any)
/// take its place, and returns its value.
fn remove_largest<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.as_mut()?;
    if node.right.is_some() {
        return remove_largest(&mut node.right);
    }
    let mut largest = link.take()?;
    *link = largest.left.take();
    Some(largest.value)
}
