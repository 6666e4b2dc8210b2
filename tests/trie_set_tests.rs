use std::collections::HashSet;
use token_trie::{StringTrieSet, TrieSet};

#[test]
fn test_dotted_identifier_scenario() {
    let mut set = StringTrieSet::with_separator('.');
    set.add("a.b.c".to_string());
    set.add("a.b.d".to_string());

    assert_eq!(set.len(), 2);
    assert!(set.contains("a.b.c"));
    assert!(!set.contains("a.b"));
    assert!(set.contains_prefix("a.b"));
    assert!(!set.contains_prefix("a.c"));

    assert!(set.remove("a.b.c"));
    assert_eq!(set.len(), 1);
    assert!(set.contains("a.b.d"));
    assert!(!set.contains_prefix("a.b.c"));
    assert!(set.contains_prefix("a.b.d"));
}

#[test]
fn test_separator_boundaries() {
    let mut set = StringTrieSet::with_separator('-');
    set.add("a-b-c".to_string());

    assert!(set.contains_prefix("a"));
    assert!(set.contains_prefix("a-b"));
    assert!(set.contains_prefix("a-b-c"));
    assert!(!set.contains("a-b"));

    // "a-b" is only a path into "a-bc", not a boundary of it
    let mut other = StringTrieSet::with_separator('-');
    other.add("a-bc".to_string());
    assert!(other.contains_prefix("a"));
    assert!(!other.contains_prefix("a-b"));
    assert!(other.contains_prefix("a-bc"));

    // Until some key makes it one
    other.add("a-b-x".to_string());
    assert!(other.contains_prefix("a-b"));
}

#[test]
fn test_without_separator_every_prefix_matches() {
    let set: StringTrieSet = vec!["dotted.name".to_string()].into_iter().collect();

    let key = "dotted.name";
    for end in 0..=key.len() {
        assert!(set.contains_prefix(&key[..end]), "prefix {:?}", &key[..end]);
    }
    assert!(!set.contains_prefix("dotted.named"));
    assert!(!set.contains_prefix("x"));
}

#[test]
fn test_round_trip() {
    let keys = ["alpha", "alphabet", "al", "beta", "b", ""];
    let mut set = StringTrieSet::new();

    for key in keys.iter() {
        assert!(set.add(key.to_string()));
        assert!(set.contains(*key));
    }
    assert_eq!(set.len(), keys.len());

    for key in keys.iter() {
        assert!(set.remove(*key));
        assert!(!set.contains(*key));
    }
    assert!(set.is_empty());
    assert!(!set.contains_prefix("a"));
    assert!(!set.contains_prefix(""));
}

#[test]
fn test_pruning_removes_shared_subtree() {
    let mut set = StringTrieSet::with_separator('.');
    set.extend(
        ["net.http.client", "net.http.server", "net.tcp"]
            .iter()
            .map(|s| s.to_string()),
    );

    set.remove("net.http.client");
    set.remove("net.http.server");

    assert!(!set.contains_prefix("net.http"));
    assert!(set.view_prefix("net.h").is_empty());
    assert!(!set.view_prefix("net.h").exists());
    assert!(set.contains_prefix("net"));
    assert!(set.contains("net.tcp"));
}

#[test]
fn test_count_consistency_with_enumeration() {
    let mut set = StringTrieSet::new();
    let words = ["to", "tea", "ted", "ten", "i", "in", "inn", "tea"];
    for word in words.iter() {
        set.add(word.to_string());
    }
    set.remove("ted");
    set.remove("missing");
    set.add("ted".to_string());
    set.remove("in");

    let enumerated: Vec<&String> = set.iter().collect();
    let distinct: HashSet<&String> = enumerated.iter().copied().collect();
    assert_eq!(enumerated.len(), set.len());
    assert_eq!(distinct.len(), set.len());
    assert_eq!(set.len(), 6);
}

#[test]
fn test_segment_keys_with_separator_segment() {
    // Keys are lists of segments; an empty segment works as a separator
    let mut set: TrieSet<Vec<&str>> = TrieSet::with_separator("");
    set.add(vec!["std", "", "collections", "", "HashMap"]);

    assert!(set.contains_prefix(&["std"][..]));
    assert!(set.contains_prefix(&["std", "", "collections"][..]));
    assert!(set.contains(&["std", "collections", "HashMap"][..]));
    assert!(!set.contains(&["std", "collections"][..]));
}

#[test]
fn test_copy_to_and_into_iter() {
    let set: StringTrieSet = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();

    let mut buffer = vec![String::from("-"); 5];
    assert_eq!(set.copy_to(&mut buffer, 1), 3);
    assert_eq!(buffer[0], "-");
    assert_eq!(buffer[4], "-");

    let mut owned: Vec<String> = set.into_iter().collect();
    owned.sort();
    assert_eq!(owned, vec!["x", "y", "z"]);
}

#[test]
fn test_very_long_keys() {
    let long = "a".repeat(100_000);
    let branch = format!("{}b", &long[..50_000]);

    let mut set = StringTrieSet::new();
    assert!(set.add(long.clone()));
    assert!(set.add(branch.clone()));
    assert!(set.contains(long.as_str()));
    assert!(set.contains_prefix(&long[..99_999]));
    assert_eq!(set.view_prefix("a").len(), 2);
    assert!(!set.view_prefix(&long[..70_000]).is_empty());

    let copy = set.clone();
    assert_eq!(copy, set);

    assert!(set.remove(long.as_str()));
    assert_eq!(set.len(), 1);
    assert!(!set.contains_prefix(&long[..60_000]));
    assert!(set.contains_prefix(&long[..50_000]));
    assert!(set.contains(branch.as_str()));

    assert!(copy.contains(long.as_str()));
    assert_eq!(copy.iter().count(), 2);
    drop(copy);

    let mut owned: Vec<String> = set.clone().into_iter().collect();
    assert_eq!(owned.pop(), Some(branch));
    drop(set);
}
