use std::cmp::Ordering;
use std::iter::FusedIterator;

use keysort::{Identity, KeyFn};
use tracing::trace;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree ordered by a key projection.
///
/// - Values with a key strictly less than a node's key go left, everything else goes
///   right, so equal keys are never merged: a duplicate lands in the right subtree of the
///   first equal key met on the way down.
/// - There is no removal and no rebalancing. Sorted insertion produces a chain; every
///   operation walks it with a loop or an explicit stack, never recursion.
pub struct KeyedTree<T, F = Identity> {
    pub(crate) root: Link<T>,
    len: usize,
    key: F,
}

impl<T: Ord + Clone> KeyedTree<T> {
    pub fn new() -> Self {
        Self::with_key(Identity)
    }
}

impl<T: Ord + Clone> Default for KeyedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F: KeyFn<T>> KeyedTree<T, F> {
    pub fn with_key(key: F) -> Self {
        Self {
            root: None,
            len: 0,
            key,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T) {
        let target = self.key.key(&value);
        let mut link = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = link {
            link = if target < self.key.key(&node.value) {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        trace!(depth, len = self.len, "inserted tree node");
    }

    /// Finds a value whose key equals the key of `value`.
    pub fn search(&self, value: &T) -> Option<&T> {
        self.search_key(&self.key.key(value))
    }

    /// Finds some value with key `target`. With duplicates this is the one nearest the
    /// root, not necessarily the first inserted.
    pub fn search_key(&self, target: &F::Key) -> Option<&T> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match target.cmp(&self.key.key(&node.value)) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains_key(&self, target: &F::Key) -> bool {
        self.search_key(target).is_some()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|n| (n, 1)));
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Values in ascending key order; equal keys come out in insertion order.
    pub fn inorder_traversal(&self) -> Vec<&T> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }
}

impl<T, F: KeyFn<T>> Extend<T> for KeyedTree<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord + Clone> FromIterator<T> for KeyedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, F: KeyFn<T>> IntoIterator for &'a KeyedTree<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, F> Drop for KeyedTree<T, F> {
    fn drop(&mut self) {
        // Tear down without recursing through nested boxes.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// In-order iterator over a [`KeyedTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
