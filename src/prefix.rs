//! Prefix enumeration.
//!
//! This module provides the `Matches` iterator, which walks the subtree below
//! a prefix depth-first and yields every stored word in ascending order.

use crate::engine::find;
use crate::node::{NodeArena, NodeId};

/// Depth-first iterator over the stored words below a prefix.
///
/// Children are pushed onto the work stack in reverse so they are popped in
/// ascending order, which makes the output lexicographically sorted. A word
/// ending exactly at the prefix comes before its extensions.
pub(crate) struct Matches<'a> {
    /// The arena the walked nodes live in
    nodes: &'a NodeArena,

    /// Nodes still to visit, with the path length above each one
    stack: Vec<(NodeId, usize)>,

    /// The code points from the root down to the node visited last
    path: String,
}

impl<'a> Matches<'a> {
    /// Starts an enumeration of the words below `siblings` that begin with `prefix`.
    ///
    /// An empty prefix enumerates every word. An unknown prefix yields nothing.
    pub fn new(nodes: &'a NodeArena, siblings: &'a [NodeId], prefix: &[char]) -> Self {
        let mut matches = Matches {
            nodes,
            stack: Vec::new(),
            path: String::new(),
        };

        if prefix.is_empty() {
            matches.push_level(siblings, 0);
        } else if let Some(subtree) = find(nodes, siblings, prefix) {
            // The subtree root's own value is pushed back when it is visited
            let (above, _) = prefix.split_at(prefix.len() - 1);
            matches.path.extend(above);
            matches.stack.push((subtree, matches.path.len()));
        }

        matches
    }

    fn push_level(&mut self, siblings: &[NodeId], depth: usize) {
        for &child in siblings.iter().rev() {
            self.stack.push((child, depth));
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((id, depth)) = self.stack.pop() {
            let nodes = self.nodes;
            let node = &nodes[id];

            self.path.truncate(depth);
            self.path.push(node.value);

            let below = self.path.len();
            self.push_level(&node.children, below);

            if node.end_of_word {
                return Some(self.path.clone());
            }
        }

        None
    }
}

/// Collects up to `limit` words below `siblings` starting with `prefix`, in ascending order.
///
/// Traversal stops once `limit` words have been produced; a `limit` of zero
/// returns nothing without touching the tree.
pub(crate) fn enumerate(nodes: &NodeArena, siblings: &[NodeId], prefix: &[char], limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    Matches::new(nodes, siblings, prefix).take(limit).collect()
}
