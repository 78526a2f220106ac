use std::iter::FusedIterator;

use crate::node::Node;

/// A lazy preorder iterator over the values of a [`Tree`][crate::Tree], created by
/// [`Tree::iter`][crate::Tree::iter].
///
/// Nodes waiting to be visited are kept on an explicit stack rather than the call stack. After a
/// node is yielded its right child is pushed before its left child so the left subtree comes out
/// first.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
