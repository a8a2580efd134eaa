//! Insert, lookup and removal over sibling sequences.
//!
//! Each function works on one sibling sequence plus the arena holding the
//! nodes, so the root level and every inner level go through the same code.
//! Mutating functions take the sequence by value and hand back the updated
//! one together with a flag saying whether a stored word changed.

use std::mem;

use tracing::trace;

use crate::node::{NodeArena, NodeId};
use crate::util::{is_ordered, locate, Location};

/// Inserts `word` below `siblings`, the children of `parent` (`None` for the root level).
///
/// Returns the updated sequence and whether the word was not stored before.
/// An empty `word` changes nothing.
pub(crate) fn insert(
    nodes: &mut NodeArena,
    mut siblings: Vec<NodeId>,
    word: &[char],
    parent: Option<NodeId>,
) -> (Vec<NodeId>, bool) {
    let (&head, tail) = match word.split_first() {
        Some(split) => split,
        None => return (siblings, false),
    };

    let inserted = match locate(nodes, &siblings, head) {
        Location::Found { id, .. } if tail.is_empty() => {
            let node = &mut nodes[id];
            let fresh = !node.end_of_word;
            node.end_of_word = true;
            fresh
        }
        Location::Found { id, .. } => {
            let children = mem::take(&mut nodes[id].children);
            let (children, inserted) = insert(nodes, children, tail, Some(id));
            nodes[id].children = children;
            inserted
        }
        Location::Vacant { index } => {
            let top = build_chain(nodes, head, tail, parent);
            siblings.insert(index, top);
            true
        }
    };

    debug_assert!(is_ordered(nodes, &siblings), "sibling order broken by insert");
    (siblings, inserted)
}

// Builds the single-child path for `head` followed by `tail`, the last node ending the word
fn build_chain(nodes: &mut NodeArena, head: char, tail: &[char], parent: Option<NodeId>) -> NodeId {
    let top = nodes.alloc(head, parent);
    let mut last = top;

    for &value in tail {
        let next = nodes.alloc(value, Some(last));
        nodes[last].children.push(next);
        last = next;
    }

    nodes[last].end_of_word = true;
    top
}

/// Walks `word` down from `siblings` and returns the node its last code point lands on.
///
/// The node need not end a word. An empty `word` finds nothing.
pub(crate) fn find(nodes: &NodeArena, siblings: &[NodeId], word: &[char]) -> Option<NodeId> {
    let mut level = siblings;
    let mut found = None;

    for &value in word {
        let id = locate(nodes, level, value).node()?;
        level = &nodes[id].children;
        found = Some(id);
    }

    found
}

/// Returns whether `word` is stored below `siblings`.
///
/// A node that exists only as part of a longer word does not count.
pub(crate) fn contains(nodes: &NodeArena, siblings: &[NodeId], word: &[char]) -> bool {
    find(nodes, siblings, word).map_or(false, |id| nodes[id].end_of_word)
}

/// Removes `word` from below `siblings`, the children of `parent` (`None` for the root level).
///
/// Returns the updated sequence and whether a stored word was removed. Nodes
/// left without children and without a word ending on them are pruned, from
/// the terminal node upward until a surviving node is reached.
pub(crate) fn remove(
    nodes: &mut NodeArena,
    mut siblings: Vec<NodeId>,
    word: &[char],
    parent: Option<NodeId>,
) -> (Vec<NodeId>, bool) {
    let target = match find(nodes, &siblings, word) {
        Some(id) if nodes[id].end_of_word => id,
        _ => return (siblings, false),
    };

    nodes[target].end_of_word = false;
    prune(nodes, &mut siblings, target, parent);

    debug_assert!(is_ordered(nodes, &siblings), "sibling order broken by remove");
    (siblings, true)
}

// Upward cleanup: detach `current` while it is garbage, then continue with its parent
fn prune(nodes: &mut NodeArena, siblings: &mut Vec<NodeId>, mut current: NodeId, owner: Option<NodeId>) {
    while nodes[current].is_prunable() {
        let value = nodes[current].value;

        match nodes[current].parent.filter(|&up| Some(up) != owner) {
            Some(up) => {
                let mut children = mem::take(&mut nodes[up].children);
                detach(nodes, &mut children, value);
                nodes[up].children = children;
                nodes.release(current);
                trace!(node = %value, "pruned node");
                current = up;
            }
            None => {
                detach(nodes, siblings, value);
                nodes.release(current);
                trace!(node = %value, "pruned node at top level");
                return;
            }
        }
    }
}

// Shifts the sibling holding `value` out of the sequence, keeping the rest in order
fn detach(nodes: &NodeArena, siblings: &mut Vec<NodeId>, value: char) {
    let location = locate(nodes, siblings, value);
    debug_assert!(
        location.node().is_some(),
        "pruned node {:?} missing from its sibling sequence",
        value
    );
    if let Location::Found { index, .. } = location {
        siblings.remove(index);
    }
}
