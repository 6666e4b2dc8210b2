//! Basic usage of a dotted-name set and dictionary
use token_trie::{StringTrieDictionary, StringTrieSet};

fn main() {
    // Module paths, with '.' separating the sub-tokens
    let mut modules = StringTrieSet::with_separator('.');
    modules.add("std.collections.HashMap".to_string());
    modules.add("std.collections.BTreeMap".to_string());
    modules.add("std.fmt.Display".to_string());

    assert!(modules.contains("std.fmt.Display"));
    assert!(!modules.contains("std.fmt"));

    // Prefixes only match on whole components
    assert!(modules.contains_prefix("std.collections"));
    assert!(!modules.contains_prefix("std.coll"));

    println!("Modules under std.collections:");
    for name in modules.view_prefix("std.collections").keys() {
        println!("  {}", name);
    }

    modules.remove("std.fmt.Display");
    assert!(!modules.contains_prefix("std.fmt"));
    println!("{} modules left", modules.len());

    // Settings keyed by dotted path
    let mut settings = StringTrieDictionary::with_separator('.');
    settings.add("editor.font.size".to_string(), 14);
    settings.add("editor.tab_width".to_string(), 4);
    settings.set("editor.font.size".to_string(), 16);

    assert_eq!(settings["editor.font.size"], 16);
    match settings.get("editor.theme") {
        Ok(value) => println!("theme: {}", value),
        Err(err) => println!("editor.theme: {}", err),
    }
}

#[test]
fn test_dotted_settings() {
    let mut settings = StringTrieDictionary::with_separator('.');
    settings.add("a.b".to_string(), 1);
    settings.add("a.c".to_string(), 2);

    let view = settings.view_prefix("a");
    assert!(view.is_boundary());
    assert_eq!(view.len(), 2);
    assert_eq!(view.get("a.c"), Some(&2));
}
