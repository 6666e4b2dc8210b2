//! A set of token-sequence keys.

use std::fmt;
use std::iter::FusedIterator;

use crate::iter::{self, Keys};
use crate::key_converter::TokenSequence;
use crate::prefix_view::PrefixView;
use crate::tree::TokenTree;

/// A set of unique keys stored in a prefix tree.
///
/// Each key is broken into tokens by its [`TokenSequence`] impl. A set built
/// with [`with_separator`](TrieSet::with_separator) treats that token as a
/// sub-token boundary: it never becomes an edge of the tree, and
/// [`contains_prefix`](TrieSet::contains_prefix) only succeeds for prefixes
/// that stop on such a boundary (or on the end of a key). Keys that differ
/// only in where separators appear share one path, so they are the same
/// member.
///
/// # Examples
///
/// ```
/// use token_trie::TrieSet;
///
/// let mut set = TrieSet::new();
/// assert!(set.add("car".to_string()));
/// assert!(set.add("cart".to_string()));
/// assert!(!set.add("car".to_string()));
///
/// assert!(set.contains("cart"));
/// assert!(!set.contains("ca"));
/// assert!(set.contains_prefix("ca"));
/// assert_eq!(set.len(), 2);
/// ```
pub struct TrieSet<K: TokenSequence> {
    tree: TokenTree<K, ()>,
}

impl<K: TokenSequence> TrieSet<K> {
    /// Creates an empty set in which every position is a token boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_trie::TrieSet;
    ///
    /// let set = TrieSet::<String>::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.separator(), None);
    /// ```
    pub fn new() -> Self {
        TrieSet {
            tree: TokenTree::new(None),
        }
    }

    /// Creates an empty set that splits keys into sub-tokens at `separator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_trie::TrieSet;
    ///
    /// let mut set = TrieSet::with_separator('-');
    /// set.add("a-bc".to_string());
    ///
    /// assert!(set.contains_prefix("a"));
    /// assert!(set.contains_prefix("a-bc"));
    /// assert!(!set.contains_prefix("a-b"));
    /// ```
    pub fn with_separator(separator: K::Token) -> Self {
        TrieSet {
            tree: TokenTree::new(Some(separator)),
        }
    }

    /// Returns the separator token this set was built with, if any.
    pub fn separator(&self) -> Option<&K::Token> {
        self.tree.separator()
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every key. The separator is kept.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Adds a key to the set.
    ///
    /// Returns `false`, leaving the stored key in place, if a key with the
    /// same path is already present.
    pub fn add(&mut self, key: K) -> bool {
        self.tree.insert_new(key, ())
    }

    /// Removes a key from the set, returning whether it was present.
    ///
    /// Branches of the tree that no longer lead to any key are pruned.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns the stored key object.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree.remove(&key.tokens()).map(|(stored, _)| stored)
    }

    /// Returns the stored key object matching `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_trie::TrieSet;
    ///
    /// let mut set = TrieSet::with_separator('.');
    /// set.add("a.b".to_string());
    ///
    /// // Separators are elided, so "ab" walks the same path
    /// assert_eq!(set.get("ab"), Some(&"a.b".to_string()));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree.entry(&key.tokens()).map(|(stored, _)| stored)
    }

    /// Returns `true` if `key` is a member of the set.
    ///
    /// A strict prefix of a stored key is not a member unless it was added
    /// itself.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree.contains(&key.tokens())
    }

    /// Returns `true` if some stored key starts with `prefix` and `prefix`
    /// ends on one of that key's token boundaries.
    pub fn contains_prefix<Q>(&self, prefix: &Q) -> bool
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree.contains_prefix(&prefix.tokens())
    }

    /// Returns `true` if any of `keys` is a member. `false` for no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_trie::TrieSet;
    ///
    /// let set: TrieSet<String> = vec!["red".to_string()].into_iter().collect();
    /// assert!(set.contains_any(&["blue", "red"]));
    /// assert!(!set.contains_all(&["blue", "red"]));
    /// ```
    pub fn contains_any<'q, Q, I>(&self, keys: I) -> bool
    where
        Q: TokenSequence<Token = K::Token> + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        keys.into_iter().any(|key| self.contains(key))
    }

    /// Returns `true` if every one of `keys` is a member. `true` for no keys.
    pub fn contains_all<'q, Q, I>(&self, keys: I) -> bool
    where
        Q: TokenSequence<Token = K::Token> + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        keys.into_iter().all(|key| self.contains(key))
    }

    /// Prefix counterpart of [`contains_any`](Self::contains_any).
    pub fn contains_any_prefix<'q, Q, I>(&self, prefixes: I) -> bool
    where
        Q: TokenSequence<Token = K::Token> + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        prefixes.into_iter().any(|prefix| self.contains_prefix(prefix))
    }

    /// Prefix counterpart of [`contains_all`](Self::contains_all).
    pub fn contains_all_prefix<'q, Q, I>(&self, prefixes: I) -> bool
    where
        Q: TokenSequence<Token = K::Token> + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        prefixes.into_iter().all(|prefix| self.contains_prefix(prefix))
    }

    /// Copies the keys, in iteration order, into `buffer` starting at
    /// `offset`. Copying stops silently when the buffer is full; an offset
    /// past the end copies nothing. Returns the number of keys copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_trie::TrieSet;
    ///
    /// let set: TrieSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    /// let mut buffer = vec![String::new(); 4];
    ///
    /// assert_eq!(set.copy_to(&mut buffer, 2), 2);
    /// assert!(buffer[0].is_empty() && buffer[1].is_empty());
    /// ```
    pub fn copy_to(&self, buffer: &mut [K], offset: usize) -> usize
    where
        K: Clone,
    {
        let slots = match buffer.get_mut(offset..) {
            Some(slots) => slots,
            None => return 0,
        };
        let mut copied = 0;
        for (slot, key) in slots.iter_mut().zip(self.iter()) {
            *slot = key.clone();
            copied += 1;
        }
        copied
    }

    /// Returns an iterator over the keys in depth-first pre-order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: Keys::new(self.tree.iter()),
        }
    }

    /// Creates a view of the keys whose path starts with `prefix`.
    pub fn view_prefix<Q>(&self, prefix: &Q) -> PrefixView<'_, K, ()>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree.view(&prefix.tokens())
    }
}

impl<K: TokenSequence> Default for TrieSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TokenSequence + Clone> Clone for TrieSet<K> {
    fn clone(&self) -> Self {
        TrieSet {
            tree: self.tree.clone(),
        }
    }
}

impl<K: TokenSequence + fmt::Debug> fmt::Debug for TrieSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two sets are equal when they have the same separator and the same members.
impl<K: TokenSequence> PartialEq for TrieSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.separator() == other.separator()
            && self.len() == other.len()
            && self.iter().all(|key| other.contains(key))
    }
}

impl<K: TokenSequence> Eq for TrieSet<K> {}

impl<K: TokenSequence> Extend<K> for TrieSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K: TokenSequence> FromIterator<K> for TrieSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = TrieSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, K: TokenSequence> IntoIterator for &'a TrieSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: TokenSequence> IntoIterator for TrieSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.tree.into_entries(),
        }
    }
}

/// An iterator over the keys of a [`TrieSet`].
pub struct Iter<'a, K: TokenSequence> {
    inner: Keys<'a, K, ()>,
}

impl<'a, K: TokenSequence> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: TokenSequence> ExactSizeIterator for Iter<'_, K> {}
impl<K: TokenSequence> FusedIterator for Iter<'_, K> {}

impl<K: TokenSequence> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the keys of a [`TrieSet`].
pub struct IntoIter<K: TokenSequence> {
    inner: iter::IntoIter<K, ()>,
}

impl<K: TokenSequence> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: TokenSequence> ExactSizeIterator for IntoIter<K> {}
impl<K: TokenSequence> FusedIterator for IntoIter<K> {}
