//! A map from token-sequence keys to values.

use std::fmt;
use std::ops::Index;

use crate::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::key_converter::TokenSequence;
use crate::prefix_view::PrefixView;
use crate::tree::TokenTree;
use crate::Error;

/// A mapping from unique keys to values, stored in a prefix tree.
///
/// Keys are tokenized and separated exactly as in [`TrieSet`](crate::TrieSet).
/// Adding a key that is already present overwrites its value and replaces the
/// stored key object with the one supplied, without changing the count.
///
/// # Examples
///
/// ```
/// use token_trie::{Error, TrieDictionary};
///
/// let mut dict = TrieDictionary::new();
/// dict.add("apple".to_string(), 1);
/// dict.add("apricot".to_string(), 2);
///
/// assert_eq!(dict.get("apple"), Ok(&1));
/// assert_eq!(dict.get("ap"), Err(Error::KeyNotFound));
/// assert_eq!(dict.try_get("apricot"), Some(&2));
/// assert!(dict.contains_prefix("ap"));
///
/// // Overwrite
/// assert_eq!(dict.add("apple".to_string(), 10), Some(1));
/// assert_eq!(dict["apple"], 10);
/// assert_eq!(dict.len(), 2);
/// ```
pub struct TrieDictionary<K: TokenSequence, V> {
    tree: TokenTree<K, V>,
}

impl<K: TokenSequence, V> TrieDictionary<K, V> {
    /// Creates an empty dictionary in which every position is a token boundary.
    pub fn new() -> Self {
        TrieDictionary {
            tree: TokenTree::new(None),
        }
    }

    /// Creates an empty dictionary that splits keys into sub-tokens at
    /// `separator`.
    pub fn with_separator(separator: K::Token) -> Self {
        TrieDictionary {
            tree: TokenTree::new(Some(separator)),
        }
    }

    /// Returns the separator token this dictionary was built with, if any.
    pub fn separator(&self) -> Option<&K::Token> {
        self.tree.separator()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry. The separator is kept.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert(key, value).map(|(_, previous)| previous)
    }

    /// Indexer-style assignment: stores `value` under `key`, silently
    /// overwriting an existing entry.
    pub fn set(&mut self, key: K, value: V) {
        self.add(key, value);
    }

    /// Looks up the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no such key is stored.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.try_get(key).ok_or(Error::KeyNotFound)
    }

    /// Looks up the value stored for `key`, if any.
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key object and value matching `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree
            .entry(&key.tokens())
            .map(|(stored, value)| (stored, value))
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree.value_mut(&key.tokens())
    }

    /// Removes `key`, returning its value. Branches that no longer lead to
    /// any key are pruned.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key`, returning the stored key object and its value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree.remove(&key.tokens())
    }

    /// Returns `true` if a value is stored for exactly `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
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

    /// Returns `true` if any entry holds a value equal to `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|stored| stored == value)
    }

    /// Returns an iterator over the keys in depth-first pre-order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.tree.iter())
    }

    /// Returns an iterator over the values, one per key, in the same order
    /// as [`keys`](Self::keys). Equal values under different keys are all
    /// yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_trie::TrieDictionary;
    ///
    /// let mut dict = TrieDictionary::new();
    /// dict.add("a".to_string(), 0);
    /// dict.add("b".to_string(), 0);
    ///
    /// assert_eq!(dict.values().count(), 2);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.tree.iter())
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.tree.iter_mut())
    }

    /// Returns an iterator over the entries in depth-first pre-order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Returns an iterator over the entries with mutable access to values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.tree.iter_mut()
    }

    /// Creates a view of the entries whose key path starts with `prefix`.
    pub fn view_prefix<Q>(&self, prefix: &Q) -> PrefixView<'_, K, V>
    where
        Q: TokenSequence<Token = K::Token> + ?Sized,
    {
        self.tree.view(&prefix.tokens())
    }
}

impl<K: TokenSequence, V> Default for TrieDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TokenSequence + Clone, V: Clone> Clone for TrieDictionary<K, V> {
    fn clone(&self) -> Self {
        TrieDictionary {
            tree: self.tree.clone(),
        }
    }
}

impl<K: TokenSequence + fmt::Debug, V: fmt::Debug> fmt::Debug for TrieDictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two dictionaries are equal when they have the same separator and map the
/// same keys to equal values.
impl<K: TokenSequence, V: PartialEq> PartialEq for TrieDictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.separator() == other.separator()
            && self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.try_get(key) == Some(value))
    }
}

impl<K: TokenSequence, V: Eq> Eq for TrieDictionary<K, V> {}

impl<K, V, Q> Index<&Q> for TrieDictionary<K, V>
where
    K: TokenSequence,
    Q: TokenSequence<Token = K::Token> + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.try_get(key).expect("no entry found for key")
    }
}

impl<K: TokenSequence, V> Extend<(K, V)> for TrieDictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K: TokenSequence, V> FromIterator<(K, V)> for TrieDictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = TrieDictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<'a, K: TokenSequence, V> IntoIterator for &'a TrieDictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: TokenSequence, V> IntoIterator for &'a mut TrieDictionary<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: TokenSequence, V> IntoIterator for TrieDictionary<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_entries()
    }
}
