//! Defines how trie keys are broken into the tokens that label tree edges.
use std::borrow::Cow;
use std::hash::Hash;

/// A key that can be viewed as an ordered sequence of tokens.
///
/// `Cow` allows for borrowing when the key already stores its tokens
/// contiguously (slices, vectors), or owning when a conversion is necessary
/// (e.g. decoding the `char`s of a `str`).
pub trait TokenSequence {
    /// One element of the key. Edge lookups and separator detection use its `Eq`.
    type Token: Clone + Eq + Hash;

    /// Returns the tokens of this key in key order.
    fn tokens(&self) -> Cow<'_, [Self::Token]>;
}

impl TokenSequence for str {
    type Token = char;

    fn tokens(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl TokenSequence for String {
    type Token = char;

    fn tokens(&self) -> Cow<'_, [char]> {
        self.as_str().tokens()
    }
}

impl<T: Clone + Eq + Hash> TokenSequence for [T] {
    type Token = T;

    fn tokens(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }
}

impl<T: Clone + Eq + Hash> TokenSequence for Vec<T> {
    type Token = T;

    fn tokens(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Clone + Eq + Hash, const N: usize> TokenSequence for [T; N] {
    type Token = T;

    fn tokens(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<Q: TokenSequence + ?Sized> TokenSequence for &Q {
    type Token = Q::Token;

    fn tokens(&self) -> Cow<'_, [Q::Token]> {
        Q::tokens(*self)
    }
}

/// Drops every occurrence of `separator` from `tokens`, leaving the edge
/// labels of the path the tokens walk.
pub(crate) fn elide<T: Eq + Clone>(tokens: &[T], separator: Option<&T>) -> Vec<T> {
    tokens
        .iter()
        .filter(|token| Some(*token) != separator)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_tokens_are_chars() {
        let tokens = "héllo".tokens();
        assert_eq!(tokens.as_ref(), &['h', 'é', 'l', 'l', 'o']);
        assert!(matches!(tokens, Cow::Owned(_)));
    }

    #[test]
    fn test_string_matches_str() {
        let key = "a.b".to_string();
        assert_eq!(key.tokens(), "a.b".tokens());
    }

    #[test]
    fn test_vec_tokens_borrowed() {
        let key = vec!["usr".to_string(), "lib".to_string()];
        let tokens = key.tokens();
        assert_eq!(tokens.len(), 2);
        assert!(matches!(tokens, Cow::Borrowed(_)));
    }

    #[test]
    fn test_byte_slice_and_array() {
        let key: &[u8] = b"data";
        assert_eq!(key.tokens().as_ref(), b"data");
        assert_eq!([1u8, 2, 3].tokens().as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn test_reference_delegates() {
        let key: &&str = &"xy";
        assert_eq!(key.tokens().as_ref(), &['x', 'y']);
    }

    #[test]
    fn test_elide() {
        let tokens: Vec<char> = "a.b..c".chars().collect();
        assert_eq!(elide(&tokens, Some(&'.')), vec!['a', 'b', 'c']);
        assert_eq!(elide(&tokens, None), tokens);
    }
}
