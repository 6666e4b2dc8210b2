//! Depth-first, pre-order iterators over the entries of a token trie.
//!
//! A node's own entry is yielded before any of its children are visited.
//! Children are visited in the order of the node's child map, which is stable
//! as long as the trie is not modified. Each call to `iter()` walks the live
//! tree again from the top.

use std::iter::FusedIterator;

use crate::key_converter::TokenSequence;
use crate::node::TrieNode;

/// An iterator over the `(key, value)` entries of a trie or prefix view.
pub struct Iter<'a, K: TokenSequence, V> {
    /// Nodes still to visit
    stack: Vec<&'a TrieNode<K, V>>,

    /// Entries not yet yielded
    remaining: usize,
}

impl<'a, K: TokenSequence, V> Iter<'a, K, V> {
    pub(crate) fn new(start: &'a TrieNode<K, V>, len: usize) -> Self {
        Iter {
            stack: vec![start],
            remaining: len,
        }
    }

    pub(crate) fn empty() -> Self {
        Iter {
            stack: Vec::new(),
            remaining: 0,
        }
    }
}

impl<'a, K: TokenSequence, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values());
            if let Some((key, value)) = &node.entry {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: TokenSequence, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K: TokenSequence, V> FusedIterator for Iter<'_, K, V> {}

impl<K: TokenSequence, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An iterator over the entries of a trie with mutable access to the values.
pub struct IterMut<'a, K: TokenSequence, V> {
    stack: Vec<&'a mut TrieNode<K, V>>,
    remaining: usize,
}

impl<'a, K: TokenSequence, V> IterMut<'a, K, V> {
    pub(crate) fn new(start: &'a mut TrieNode<K, V>, len: usize) -> Self {
        IterMut {
            stack: vec![start],
            remaining: len,
        }
    }
}

impl<'a, K: TokenSequence, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            let TrieNode {
                children, entry, ..
            } = node;
            self.stack.extend(children.values_mut());
            if let Some((key, value)) = entry {
                self.remaining -= 1;
                return Some((&*key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: TokenSequence, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K: TokenSequence, V> FusedIterator for IterMut<'_, K, V> {}

/// An owning iterator over the entries of a trie.
pub struct IntoIter<K: TokenSequence, V> {
    stack: Vec<TrieNode<K, V>>,
    remaining: usize,
}

impl<K: TokenSequence, V> IntoIter<K, V> {
    pub(crate) fn new(root: TrieNode<K, V>, len: usize) -> Self {
        IntoIter {
            stack: vec![root],
            remaining: len,
        }
    }
}

impl<K: TokenSequence, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.stack.pop() {
            self.stack.extend(node.children.drain().map(|(_, child)| child));
            if let Some(entry) = node.entry.take() {
                self.remaining -= 1;
                return Some(entry);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: TokenSequence, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K: TokenSequence, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of a trie.
pub struct Keys<'a, K: TokenSequence, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K: TokenSequence, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Keys { inner }
    }
}

impl<'a, K: TokenSequence, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: TokenSequence, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K: TokenSequence, V> FusedIterator for Keys<'_, K, V> {}

impl<K: TokenSequence, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

/// An iterator over the values of a trie, one per stored key.
pub struct Values<'a, K: TokenSequence, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K: TokenSequence, V> Values<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Values { inner }
    }
}

impl<'a, K: TokenSequence, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: TokenSequence, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K: TokenSequence, V> FusedIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a trie.
pub struct ValuesMut<'a, K: TokenSequence, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K: TokenSequence, V> ValuesMut<'a, K, V> {
    pub(crate) fn new(inner: IterMut<'a, K, V>) -> Self {
        ValuesMut { inner }
    }
}

impl<'a, K: TokenSequence, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: TokenSequence, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K: TokenSequence, V> FusedIterator for ValuesMut<'_, K, V> {}
