//! Prefix view into a token trie.
//!
//! This module provides the `PrefixView` type, which gives borrowed access to
//! the entries stored under a key prefix.

use std::fmt;

use crate::iter::{Iter, Keys};
use crate::key_converter::{elide, TokenSequence};
use crate::node::TrieNode;

/// A lightweight view into the subtree below a key prefix.
///
/// Prefixes and keys are compared on their paths, i.e. with separator tokens
/// removed. The view borrows the trie, so the trie cannot change while the
/// view is alive.
///
/// # Examples
///
/// ```
/// use token_trie::TrieDictionary;
///
/// let mut dict = TrieDictionary::with_separator('.');
/// dict.add("net.http.client".to_string(), 1);
/// dict.add("net.http.server".to_string(), 2);
/// dict.add("net.tcp".to_string(), 3);
///
/// let view = dict.view_prefix("net.http");
/// assert!(view.exists());
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.get("net.http.server"), Some(&2));
/// assert!(!view.contains_key("net.tcp"));
/// ```
pub struct PrefixView<'a, K: TokenSequence, V> {
    /// The prefix path, separators elided
    prefix: Vec<K::Token>,

    /// The subtree node at the prefix, if it exists
    node: Option<&'a TrieNode<K, V>>,

    /// The separator of the viewed trie
    separator: Option<&'a K::Token>,
}

impl<'a, K: TokenSequence, V> PrefixView<'a, K, V> {
    pub(crate) fn new(
        node: Option<&'a TrieNode<K, V>>,
        prefix: &[K::Token],
        separator: Option<&'a K::Token>,
    ) -> Self {
        PrefixView {
            prefix: elide(prefix, separator),
            node,
            separator,
        }
    }

    /// Returns the tokens on the path to the viewed subtree.
    pub fn prefix(&self) -> &[K::Token] {
        &self.prefix
    }

    /// Returns whether some stored key runs through the prefix.
    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    /// Returns whether the prefix ends on a token boundary of a stored key,
    /// the same answer `contains_prefix` gives.
    pub fn is_boundary(&self) -> bool {
        self.node.map_or(false, TrieNode::is_end_of_token)
    }

    /// Returns the number of entries in this view.
    pub fn len(&self) -> usize {
        self.node.map_or(0, TrieNode::subtree_size)
    }

    /// Returns whether this view contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the view contains a key.
    ///
    /// Only returns true if the key is stored and its path starts with the
    /// prefix.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.entry(key).is_some()
    }

    /// Gets the value for a key if it exists in this view.
    pub fn get<Q>(&self, key: &Q) -> Option<&'a V>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.entry(key).map(|(_, value)| value)
    }

    /// Returns an iterator over the entries of the view in pre-order.
    pub fn iter(&self) -> Iter<'a, K, V> {
        match self.node {
            Some(node) => Iter::new(node, node.subtree_size()),
            None => Iter::empty(),
        }
    }

    /// Returns an iterator over the keys of the view.
    pub fn keys(&self) -> Keys<'a, K, V> {
        Keys::new(self.iter())
    }

    fn entry<Q>(&self, key: &Q) -> Option<&'a (K, V)>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        let node = self.node?;
        let path = elide(&key.tokens(), self.separator);
        let rest = path.strip_prefix(self.prefix.as_slice())?;
        node.find(rest, None)?.entry.as_ref()
    }
}

impl<K: TokenSequence, V> Clone for PrefixView<'_, K, V> {
    fn clone(&self) -> Self {
        PrefixView {
            prefix: self.prefix.clone(),
            node: self.node,
            separator: self.separator,
        }
    }
}

impl<K, V> fmt::Debug for PrefixView<'_, K, V>
where
    K: TokenSequence + fmt::Debug,
    K::Token: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("entries", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Views are equal when they hold the same keys mapped to equal values,
/// whichever tries they were taken from.
impl<K: TokenSequence, V: PartialEq> PartialEq for PrefixView<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: TokenSequence, V: Eq> Eq for PrefixView<'_, K, V> {}

impl<'a, K: TokenSequence, V> IntoIterator for &PrefixView<'a, K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
