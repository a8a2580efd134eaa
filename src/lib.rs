//! # Lexitrie
//!
//! A thread-safe character trie for exact lookups and sorted prefix autocomplete.
//!
//! This crate provides a prefix tree that stores a set of lowercase words. Every
//! level of the tree is an ordered sibling sequence searched with a binary
//! search, so prefix enumeration comes out in ascending order without sorting.
//!
//! ## Features
//!
//! - **Case-insensitive**: words are lowercased on the way in
//! - **Sorted autocomplete**: `like` returns up to `limit` words below a prefix in ascending order
//! - **Shared access**: a single readers-writer lock lets any number of lookups run
//!   concurrently while mutations run alone
//! - **Tidy removal**: removing a word prunes the nodes only it was using
//!
//! ## Example
//!
//! ```rust
//! use lexitrie::Trie;
//!
//! let trie = Trie::new();
//! trie.insert("Funny");
//! trie.insert("fun");
//! trie.insert("function");
//!
//! assert!(trie.contains("FUN"));
//! assert_eq!(trie.count(), 3);
//! assert_eq!(trie.like("fun", 2), vec!["fun", "function"]);
//! ```

mod engine;
mod node;
mod prefix;
mod trie;
mod util;
mod verify;

// Re-export public types
pub use crate::trie::Trie;

/// Structural problems reported by [`Trie::verify`].
///
/// None of these can be produced by the public operations; seeing one means
/// the tree was corrupted by a bug. Each path names the affected node by the
/// code points leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The children below `path` are not strictly ascending
    Unordered { path: String },
    /// The node at `path` does not link back to the node that owns it
    BrokenParent { path: String },
    /// The node at `path` ends no word and has no children
    Garbage { path: String },
    /// The word counter disagrees with the number of stored words
    CountMismatch { counted: usize, stored: usize },
    /// Arena slots are live that no stored word reaches
    Leaked { live: usize, reachable: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unordered { path } => write!(f, "children below {:?} are out of order", path),
            Error::BrokenParent { path } => write!(f, "node {:?} has a wrong parent link", path),
            Error::Garbage { path } => write!(f, "node {:?} is unreachable garbage", path),
            Error::CountMismatch { counted, stored } => {
                write!(f, "count is {} but {} words are stored", counted, stored)
            }
            Error::Leaked { live, reachable } => {
                write!(f, "{} live nodes but only {} reachable", live, reachable)
            }
        }
    }
}

impl std::error::Error for Error {}
