//! Internal node implementation for the token trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of
//! both containers. Every node owns its children outright, so a trie owns its
//! whole node tree and no node is ever shared between two tries.
//!
//! Paths are as deep as the longest key, so nothing here recurses over the
//! tree: every walk keeps its own stack.

use std::collections::HashMap;

use crate::key_converter::{elide, TokenSequence};

/// Internal node type for the token trie.
///
/// The path from the root to a node is the sequence of edge tokens with
/// separators elided. A node may carry the entry of the one key that ends
/// there.
pub(crate) struct TrieNode<K: TokenSequence, V> {
    /// Child nodes indexed by the token on their incoming edge
    pub children: HashMap<K::Token, TrieNode<K, V>>,

    /// The stored key and its value, present iff a key ends at this node
    pub entry: Option<(K, V)>,

    /// Number of token-boundary marks placed here by the stored keys
    pub boundaries: usize,
}

impl<K: TokenSequence, V> TrieNode<K, V> {
    /// Creates a new empty node
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            entry: None,
            boundaries: 0,
        }
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether a complete key terminates at this node
    pub fn is_end_of_key(&self) -> bool {
        self.entry.is_some()
    }

    /// Returns whether this node is a sub-token boundary of some stored key
    pub fn is_end_of_token(&self) -> bool {
        self.boundaries > 0
    }

    /// A node that is neither terminal nor on the way to anything
    fn is_prunable(&self) -> bool {
        self.is_leaf() && !self.is_end_of_key()
    }

    /// Returns the number of entries stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_end_of_key() {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Follows `tokens` from this node, skipping separators.
    pub fn find(&self, tokens: &[K::Token], separator: Option<&K::Token>) -> Option<&Self> {
        let mut current = self;
        for token in tokens {
            if separator == Some(token) {
                continue;
            }
            current = current.children.get(token)?;
        }
        Some(current)
    }

    /// Mutable counterpart of [`find`](Self::find).
    pub fn find_mut(
        &mut self,
        tokens: &[K::Token],
        separator: Option<&K::Token>,
    ) -> Option<&mut Self> {
        let mut current = self;
        for token in tokens {
            if separator == Some(token) {
                continue;
            }
            current = current.children.get_mut(token)?;
        }
        Some(current)
    }

    /// Walks `tokens` from this node, creating missing children and placing
    /// the key's boundary marks. Returns the node the key lands on.
    ///
    /// Without a separator every visited node is a boundary. With one, the
    /// node a separator is read at becomes a boundary and the separator
    /// itself produces no edge. The landing node is always a boundary.
    pub fn mark_path(&mut self, tokens: &[K::Token], separator: Option<&K::Token>) -> &mut Self {
        let mut current = self;
        for token in tokens {
            match separator {
                Some(sep) if sep == token => {
                    current.boundaries += 1;
                    continue;
                }
                Some(_) => {}
                None => current.boundaries += 1,
            }
            current = current
                .children
                .entry(token.clone())
                .or_insert_with(TrieNode::new);
        }
        current.boundaries += 1;
        current
    }

    /// Takes back the marks [`mark_path`](Self::mark_path) placed for
    /// `tokens`. Stops at the first missing child: everything below it was
    /// pruned along with its marks.
    pub fn release_path(&mut self, tokens: &[K::Token], separator: Option<&K::Token>) {
        let mut current = self;
        for token in tokens {
            match separator {
                Some(sep) if sep == token => {
                    current.boundaries -= 1;
                    continue;
                }
                Some(_) => {}
                None => current.boundaries -= 1,
            }
            current = match current.children.get_mut(token) {
                Some(child) => child,
                None => return,
            };
        }
        current.boundaries -= 1;
    }

    /// Removes the entry at the end of `tokens` and prunes the branch it
    /// leaves without keys.
    ///
    /// The pruned branch is the tail of the path below the deepest node that
    /// still matters afterwards: the root, a node holding another entry, or a
    /// node with more than one child. It is cut off in one step, so a failed
    /// removal changes nothing.
    pub fn remove(&mut self, tokens: &[K::Token], separator: Option<&K::Token>) -> Option<(K, V)> {
        let path = elide(tokens, separator);

        let mut keep = 0;
        let mut current: &Self = self;
        for (depth, token) in path.iter().enumerate() {
            if depth > 0 && (current.is_end_of_key() || current.children.len() > 1) {
                keep = depth;
            }
            current = current.children.get(token)?;
        }

        let landing = self.find_mut(&path, None)?;
        let removed = landing.entry.take()?;

        if !path.is_empty() && landing.is_prunable() {
            if let Some(parent) = self.find_mut(&path[..keep], None) {
                trace_event!(depth = keep, pruned = path.len() - keep, "pruning empty branch");
                parent.children.remove(&path[keep]);
            }
        }

        Some(removed)
    }
}

impl<K: TokenSequence + Clone, V: Clone> Clone for TrieNode<K, V> {
    /// Deep copy, built bottom-up: a node is rebuilt once all of its
    /// children have been.
    fn clone(&self) -> Self {
        let mut pending = vec![(self, false)];
        let mut built: Vec<Self> = Vec::new();

        while let Some((node, expanded)) = pending.pop() {
            if !expanded {
                pending.push((node, true));
                pending.extend(node.children.values().map(|child| (child, false)));
                continue;
            }

            // Children finish in reverse push order, last one on top
            let start = built.len() - node.children.len();
            let children: HashMap<K::Token, Self> = node
                .children
                .keys()
                .cloned()
                .zip(built.drain(start..).rev())
                .collect();

            built.push(TrieNode {
                children,
                entry: node.entry.clone(),
                boundaries: node.boundaries,
            });
        }

        built.pop().unwrap_or_else(TrieNode::new)
    }
}

impl<K: TokenSequence, V> Drop for TrieNode<K, V> {
    fn drop(&mut self) {
        let mut stack: Vec<Self> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
