//! # Token Trie
//!
//! Prefix-tree containers for keys that are sequences of tokens.
//!
//! This crate provides a [`TrieSet`] of keys and a [`TrieDictionary`] mapping
//! keys to values. A key is anything implementing [`TokenSequence`]: strings
//! are sequences of `char`s, vectors and slices are sequences of their
//! elements.
//!
//! ## Features
//!
//! - **Exact and prefix membership**: `contains` answers for complete keys
//!   only, `contains_prefix` for any stored path ending on a token boundary
//! - **Separator tokens**: a trie built `with_separator` splits keys such as
//!   `"a.b.c"` into sub-tokens; the separator never becomes an edge and prefix
//!   queries only succeed on sub-token boundaries
//! - **Pruning removal**: removing a key drops every branch left without keys
//! - **Prefix views**: borrowed views of the entries below a prefix
//!
//! ## Example
//!
//! ```rust
//! use token_trie::TrieSet;
//!
//! let mut names = TrieSet::with_separator('.');
//! names.add("a.b.c".to_string());
//! names.add("a.b.d".to_string());
//!
//! assert_eq!(names.len(), 2);
//! assert!(names.contains("a.b.c"));
//! assert!(!names.contains("a.b"));
//! assert!(names.contains_prefix("a.b"));
//! assert!(!names.contains_prefix("a.c"));
//!
//! names.remove("a.b.c");
//! assert!(!names.contains_prefix("a.b.c"));
//! assert!(names.contains("a.b.d"));
//! ```
//!
//! ## Mutation during iteration
//!
//! Iterators and views borrow the trie, so changing a trie while one of them
//! is alive does not compile:
//!
//! ```compile_fail
//! use token_trie::TrieSet;
//!
//! let mut set: TrieSet<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
//! for key in set.iter() {
//!     set.add(format!("{}!", key));
//! }
//! ```

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

pub mod iter;
mod key_converter;
mod node;
mod prefix_view;
mod tree;
pub mod trie_dictionary;
pub mod trie_set;

// Re-export public types
pub use crate::key_converter::TokenSequence;
pub use crate::prefix_view::PrefixView;
pub use crate::trie_dictionary::TrieDictionary;
pub use crate::trie_set::TrieSet;

/// A set of strings, tokenized by `char`.
pub type StringTrieSet = TrieSet<String>;

/// A dictionary keyed by strings, tokenized by `char`.
pub type StringTrieDictionary<V> = TrieDictionary<String, V>;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No stored key matches the lookup
    KeyNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "Key not found in trie"),
        }
    }
}

impl std::error::Error for Error {}
