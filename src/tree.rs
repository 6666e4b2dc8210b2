//! The node-tree algorithm shared by [`TrieSet`](crate::TrieSet) and
//! [`TrieDictionary`](crate::TrieDictionary).
//!
//! A `TokenTree` owns the root node, the separator chosen at construction and
//! the running count of stored keys. The set is a tree whose values are `()`.

use crate::iter::{IntoIter, Iter, IterMut};
use crate::key_converter::TokenSequence;
use crate::node::TrieNode;
use crate::prefix_view::PrefixView;

pub(crate) struct TokenTree<K: TokenSequence, V> {
    /// The root node; created once and never pruned
    root: TrieNode<K, V>,

    /// Token marking sub-token boundaries, if any
    separator: Option<K::Token>,

    /// The number of keys stored in the tree
    len: usize,
}

impl<K: TokenSequence, V> TokenTree<K, V> {
    pub fn new(separator: Option<K::Token>) -> Self {
        TokenTree {
            root: TrieNode::new(),
            separator,
            len: 0,
        }
    }

    pub fn separator(&self) -> Option<&K::Token> {
        self.separator.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Discards every node under the root. The separator is kept.
    pub fn clear(&mut self) {
        debug_event!(discarded = self.len, "clearing trie");
        self.root = TrieNode::new();
        self.len = 0;
    }

    pub fn contains(&self, tokens: &[K::Token]) -> bool {
        self.node(tokens).map_or(false, TrieNode::is_end_of_key)
    }

    pub fn contains_prefix(&self, tokens: &[K::Token]) -> bool {
        self.node(tokens).map_or(false, TrieNode::is_end_of_token)
    }

    pub fn entry(&self, tokens: &[K::Token]) -> Option<&(K, V)> {
        self.node(tokens)?.entry.as_ref()
    }

    pub fn value_mut(&mut self, tokens: &[K::Token]) -> Option<&mut V> {
        let separator = self.separator.as_ref();
        self.root
            .find_mut(tokens, separator)?
            .entry
            .as_mut()
            .map(|(_, value)| value)
    }

    /// Stores `key` unless a key with the same path is already present, in
    /// which case nothing changes. Returns whether the key was stored.
    pub fn insert_new(&mut self, key: K, value: V) -> bool {
        if self.contains(&key.tokens()) {
            return false;
        }
        self.store(key, value);
        true
    }

    /// Stores `key`, replacing both the key object and the value of an entry
    /// already present at the same path. Returns the replaced entry.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let previous = self.take_entry(&key.tokens());
        self.store(key, value);
        if previous.is_some() {
            // `store` counted the key again
            self.len -= 1;
        }
        previous
    }

    /// Removes the entry at the path of `tokens`, pruning every branch that
    /// no longer leads to a stored key.
    pub fn remove(&mut self, tokens: &[K::Token]) -> Option<(K, V)> {
        let separator = self.separator.as_ref();
        let removed = self.root.remove(tokens, separator)?;
        // The stored key placed the marks, so it takes them back
        self.root.release_path(&removed.0.tokens(), separator);
        self.len -= 1;
        Some(removed)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.root, self.len)
    }

    pub fn into_entries(self) -> IntoIter<K, V> {
        IntoIter::new(self.root, self.len)
    }

    pub fn view(&self, prefix: &[K::Token]) -> PrefixView<'_, K, V> {
        PrefixView::new(self.node(prefix), prefix, self.separator())
    }

    fn node(&self, tokens: &[K::Token]) -> Option<&TrieNode<K, V>> {
        self.root.find(tokens, self.separator.as_ref())
    }

    fn store(&mut self, key: K, value: V) {
        let landing = self.root.mark_path(&key.tokens(), self.separator.as_ref());
        landing.entry = Some((key, value));
        self.len += 1;
        trace_event!(len = self.len, "stored key");
    }

    /// Takes the entry at the path of `tokens` out of its node without
    /// pruning, releasing the marks its key placed.
    fn take_entry(&mut self, tokens: &[K::Token]) -> Option<(K, V)> {
        let separator = self.separator.as_ref();
        let entry = self.root.find_mut(tokens, separator)?.entry.take()?;
        self.root.release_path(&entry.0.tokens(), separator);
        Some(entry)
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &TrieNode<K, V> {
        &self.root
    }
}

impl<K: TokenSequence + Clone, V: Clone> Clone for TokenTree<K, V> {
    fn clone(&self) -> Self {
        TokenTree {
            root: self.root.clone(),
            separator: self.separator.clone(),
            len: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tree = TokenTree<String, u32>;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn node_count<K: TokenSequence, V>(node: &TrieNode<K, V>) -> usize {
        1 + node.children.values().map(node_count).sum::<usize>()
    }

    #[test]
    fn test_new_tree() {
        let tree = Tree::new(None);
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.separator(), None);
        assert!(!tree.contains_prefix(&[]));
        assert_eq!(node_count(tree.root()), 1);
    }

    #[test]
    fn test_insert_new_is_noop_when_present() {
        let mut tree = Tree::new(None);
        assert!(tree.insert_new("ab".to_string(), 1));
        assert!(!tree.insert_new("ab".to_string(), 2));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.entry(&chars("ab")), Some(&("ab".to_string(), 1)));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut tree = Tree::new(None);
        assert_eq!(tree.insert("ab".to_string(), 1), None);
        assert_eq!(tree.insert("ab".to_string(), 2), Some(("ab".to_string(), 1)));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.entry(&chars("ab")), Some(&("ab".to_string(), 2)));
        assert_eq!(tree.root().boundaries, 1);
    }

    #[test]
    fn test_overwrite_with_aliased_key_moves_marks() {
        // "ab" and "a.b" share a path once the separator is elided
        let mut tree = Tree::new(Some('.'));
        tree.insert("ab".to_string(), 1);
        assert!(!tree.contains_prefix(&chars("a")));

        tree.insert("a.b".to_string(), 2);
        assert_eq!(tree.len(), 1);
        assert!(tree.contains_prefix(&chars("a")));
        assert_eq!(tree.entry(&chars("ab")), Some(&("a.b".to_string(), 2)));

        // Removing through the other spelling releases the stored key's marks
        assert!(tree.remove(&chars("ab")).is_some());
        assert_eq!(node_count(tree.root()), 1);
        assert_eq!(tree.root().boundaries, 0);
    }

    #[test]
    fn test_rejected_alias_places_no_marks() {
        let mut tree = Tree::new(Some('.'));
        assert!(tree.insert_new("ab".to_string(), 1));

        // Same path as "ab", so nothing is stored and no boundary appears
        assert!(!tree.insert_new("a.b".to_string(), 2));
        assert!(!tree.contains_prefix(&chars("a")));
        assert_eq!(tree.entry(&chars("a.b")), Some(&("ab".to_string(), 1)));

        assert!(tree.remove(&chars("ab")).is_some());
        assert_eq!(tree.root().boundaries, 0);
        assert_eq!(node_count(tree.root()), 1);
    }

    #[test]
    fn test_remove_prunes_exactly() {
        let mut tree = Tree::new(Some('.'));
        tree.insert("a.b.c".to_string(), 1);
        tree.insert("a.b.d".to_string(), 2);
        assert_eq!(node_count(tree.root()), 5);

        assert_eq!(tree.remove(&chars("a.b.c")), Some(("a.b.c".to_string(), 1)));
        assert_eq!(node_count(tree.root()), 4);
        assert_eq!(tree.len(), 1);

        assert!(tree.remove(&chars("a.b.d")).is_some());
        assert_eq!(node_count(tree.root()), 1);
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_failed_remove_changes_nothing() {
        let mut tree = Tree::new(Some('.'));
        tree.insert("a.bc".to_string(), 1);

        assert_eq!(tree.remove(&chars("a.b")), None);
        assert_eq!(tree.remove(&chars("a.bcd")), None);
        assert_eq!(tree.len(), 1);
        assert_eq!(node_count(tree.root()), 4);
        assert!(tree.contains_prefix(&chars("a")));
    }

    #[test]
    fn test_removed_boundary_stops_matching() {
        let mut tree = Tree::new(Some('-'));
        tree.insert("a-bc".to_string(), 1);
        tree.insert("a-b".to_string(), 2);
        assert!(tree.contains_prefix(&chars("a-b")));

        tree.remove(&chars("a-b"));
        assert!(!tree.contains_prefix(&chars("a-b")));
        assert!(tree.contains_prefix(&chars("a-bc")));
        assert!(tree.contains_prefix(&chars("a")));
    }

    #[test]
    fn test_count_matches_subtree_size() {
        let mut tree = Tree::new(None);
        for (i, key) in ["a", "ab", "abc", "b", "ba"].iter().enumerate() {
            tree.insert(key.to_string(), i as u32);
        }
        tree.remove(&chars("ab"));
        tree.remove(&chars("zz"));

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root().subtree_size(), tree.len());
    }

    #[test]
    fn test_clear_keeps_separator() {
        let mut tree = Tree::new(Some('.'));
        tree.insert("a.b".to_string(), 1);
        tree.clear();

        assert_eq!(tree.len(), 0);
        assert_eq!(tree.separator(), Some(&'.'));
        assert!(!tree.contains_prefix(&chars("a")));
        assert_eq!(node_count(tree.root()), 1);
    }

    #[test]
    fn test_value_mut() {
        let mut tree = Tree::new(None);
        tree.insert("key".to_string(), 1);
        *tree.value_mut(&chars("key")).unwrap() += 41;

        assert_eq!(tree.entry(&chars("key")).map(|(_, v)| *v), Some(42));
        assert!(tree.value_mut(&chars("ke")).is_none());
    }
}
