//! Autocomplete over a shared vocabulary.
//!
//! Run with `RUST_LOG=lexitrie=debug cargo run --example autocomplete` to
//! watch the trie log its mutations.
use std::sync::Arc;
use std::thread;

use lexitrie::Trie;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const VOCABULARY: &str = "fun funny function functional fund fundamental fungus
    furnace fur further fury fuse fusion future";

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let trie: Arc<Trie> = Arc::new(VOCABULARY.split_whitespace().collect());

    // Several readers complete prefixes while a writer grows the vocabulary
    let writer = {
        let trie = Arc::clone(&trie);
        thread::spawn(move || {
            for word in ["Fudge", "Fuel", "Fugue"] {
                trie.insert(word);
            }
        })
    };

    let readers: Vec<_> = ["fun", "fur", "fu", "fus"]
        .iter()
        .map(|&prefix| {
            let trie = Arc::clone(&trie);
            thread::spawn(move || (prefix, trie.like(prefix, 4)))
        })
        .collect();

    for reader in readers {
        if let Ok((prefix, words)) = reader.join() {
            println!("{:>4} -> {}", prefix, words.join(", "));
        }
    }
    if writer.join().is_err() {
        eprintln!("writer thread panicked");
    }

    println!("{} words stored", trie.count());
}
