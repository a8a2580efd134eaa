//! Examples of using the trie
use lexitrie::Trie;

fn main() {
    // Create a new, empty trie
    let trie = Trie::new();

    // Insert some words; case does not matter
    trie.insert("hello");
    trie.insert("World");
    trie.insert("help");

    // Check words
    assert!(trie.contains("hello"));
    assert!(trie.contains("WORLD"));
    assert!(!trie.contains("hel"));
    assert_eq!(trie.count(), 3);

    // Words sharing a prefix come back sorted
    assert_eq!(trie.like("hel", 10), vec!["hello", "help"]);

    // Removing a word leaves its neighbours alone
    trie.remove("hello");
    assert_eq!(trie.like("hel", 10), vec!["help"]);

    // Or build one straight from a list
    let colors: Trie = ["red", "green", "blue"].iter().collect();
    println!("{:?} holds {:?}", colors, colors.words());
}
