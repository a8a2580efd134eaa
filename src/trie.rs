//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the word-level API and
//! the locking around the tree engine.

use std::fmt;
use std::mem;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::engine;
use crate::node::{NodeArena, NodeId};
use crate::prefix::enumerate;
use crate::util::code_points;
use crate::verify::audit;
use crate::Error;

/// Everything guarded by the trie's lock.
#[derive(Debug, Clone, Default)]
struct TrieState {
    /// Storage for every node in the tree
    nodes: NodeArena,

    /// The root-level sibling sequence
    children: Vec<NodeId>,

    /// The number of distinct words stored
    count: usize,
}

/// A case-insensitive prefix tree of words, safe to share between threads.
///
/// All operations take `&self`. Insertions and removals hold the lock
/// exclusively; counts, lookups and prefix queries hold it shared, so any
/// number of them run side by side. Wrap the trie in an `Arc` to hand it to
/// several threads.
///
/// Words are lowercased before they reach the tree, and every result is
/// reported in lowercase.
pub struct Trie {
    state: RwLock<TrieState>,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitrie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            state: RwLock::new(TrieState::default()),
        }
    }

    /// Returns the number of distinct words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitrie::Trie;
    ///
    /// let trie = Trie::new();
    /// trie.insert("hello");
    /// trie.insert("HELLO");
    /// assert_eq!(trie.count(), 1);
    /// ```
    pub fn count(&self) -> usize {
        self.state.read().count
    }

    /// Returns `true` if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Stores a word, returning `true` if it was not stored already.
    ///
    /// Inserting the empty string or a word already present changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitrie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.insert("foobar"));
    /// assert!(!trie.insert("FooBar"));
    /// assert!(!trie.insert(""));
    /// assert_eq!(trie.count(), 1);
    /// ```
    pub fn insert(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let word = code_points(word);

        let mut guard = self.state.write();
        let state = &mut *guard;

        let roots = mem::take(&mut state.children);
        let (roots, inserted) = engine::insert(&mut state.nodes, roots, &word, None);
        state.children = roots;

        if inserted {
            state.count += 1;
            debug!(word = %Spelled(&word), count = state.count, "inserted word");
        } else {
            trace!(word = %Spelled(&word), "word already stored");
        }
        inserted
    }

    /// Returns `true` if the word is stored.
    ///
    /// A string stored only as the beginning of a longer word is not contained,
    /// and neither is the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitrie::Trie;
    ///
    /// let trie = Trie::new();
    /// trie.insert("foobar");
    ///
    /// assert!(trie.contains("FOOBAR"));
    /// assert!(!trie.contains("foo"));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let word = code_points(word);

        let state = self.state.read();
        engine::contains(&state.nodes, &state.children, &word)
    }

    /// Removes a word, returning `true` if it was stored.
    ///
    /// Nodes used only by the removed word are freed; words sharing its
    /// prefix or extending it are untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitrie::Trie;
    ///
    /// let trie = Trie::new();
    /// trie.insert("foo");
    /// trie.insert("foobar");
    ///
    /// assert!(trie.remove("foo"));
    /// assert!(!trie.contains("foo"));
    /// assert!(trie.contains("foobar"));
    /// assert!(!trie.remove("foo"));
    /// ```
    pub fn remove(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let word = code_points(word);

        let mut guard = self.state.write();
        let state = &mut *guard;

        let roots = mem::take(&mut state.children);
        let (roots, removed) = engine::remove(&mut state.nodes, roots, &word, None);
        state.children = roots;

        if removed {
            state.count -= 1;
            debug!(word = %Spelled(&word), count = state.count, "removed word");
        } else {
            trace!(word = %Spelled(&word), "word not stored, nothing removed");
        }
        removed
    }

    /// Returns up to `limit` stored words beginning with `prefix`, in ascending order.
    ///
    /// A stored word equal to the prefix itself is included first. The empty
    /// prefix matches every word, and a `limit` of zero returns nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitrie::Trie;
    ///
    /// let trie = Trie::new();
    /// trie.insert("funny");
    /// trie.insert("fun");
    /// trie.insert("fungus");
    ///
    /// assert_eq!(trie.like("fun", 2), vec!["fun", "fungus"]);
    /// assert_eq!(trie.like("FUNN", 5), vec!["funny"]);
    /// assert!(trie.like("fun", 0).is_empty());
    /// ```
    pub fn like(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = code_points(prefix);

        let state = self.state.read();
        enumerate(&state.nodes, &state.children, &prefix, limit)
    }

    /// Returns `true` if some stored word begins with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitrie::Trie;
    ///
    /// let trie = Trie::new();
    /// trie.insert("hello");
    ///
    /// assert!(trie.starts_with("hel"));
    /// assert!(trie.starts_with("hello"));
    /// assert!(!trie.starts_with("help"));
    /// ```
    pub fn starts_with(&self, prefix: &str) -> bool {
        let prefix = code_points(prefix);

        let state = self.state.read();
        if prefix.is_empty() {
            return state.count > 0;
        }
        // Every reachable node leads to at least one stored word
        engine::find(&state.nodes, &state.children, &prefix).is_some()
    }

    /// Returns every stored word in ascending order.
    pub fn words(&self) -> Vec<String> {
        self.like("", usize::MAX)
    }

    /// Removes every word.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let dropped = state.count;

        state.nodes.clear();
        state.children.clear();
        state.count = 0;
        debug!(dropped, "cleared trie");
    }

    /// Audits the whole tree, returning the first broken invariant found.
    ///
    /// This walks every node, so it is meant for tests and diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexitrie::Trie;
    ///
    /// let trie: Trie = ["ab", "abc", "b"].iter().collect();
    /// trie.remove("abc");
    /// assert!(trie.verify().is_ok());
    /// ```
    pub fn verify(&self) -> Result<(), Error> {
        let state = self.state.read();
        let stored = audit(&state.nodes, &state.children)?;

        if stored != state.count {
            return Err(Error::CountMismatch {
                counted: state.count,
                stored,
            });
        }
        Ok(())
    }
}

// Default implementation
impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Trie {
    fn clone(&self) -> Self {
        Trie {
            state: RwLock::new(self.state.read().clone()),
        }
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie").field("count", &self.count()).finish()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

// Displays a code-point sequence as the word it spells, for log fields
struct Spelled<'a>(&'a [char]);

impl fmt::Display for Spelled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}
