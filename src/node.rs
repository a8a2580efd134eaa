//! Node storage for the trie.
//!
//! Every vertex of the tree lives in a `NodeArena` slot and is addressed by a
//! `NodeId`. A node owns its children through the ordered `children` list of
//! ids; the `parent` id is a plain back-reference that never owns anything.

use std::ops::{Index, IndexMut};

/// Index of a node slot inside a `NodeArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

/// A single trie vertex.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// The code point this vertex branches on
    pub value: char,

    /// The node one level up the same path, `None` at the root level
    pub parent: Option<NodeId>,

    /// Owned children, sorted ascending by `value` with no duplicates
    pub children: Vec<NodeId>,

    /// Whether the path from the root to this node spells a stored word
    pub end_of_word: bool,
}

impl Node {
    /// Creates a childless node that does not terminate a word
    pub fn new(value: char, parent: Option<NodeId>) -> Self {
        Node {
            value,
            parent,
            children: Vec::new(),
            end_of_word: false,
        }
    }

    /// Returns whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node that ends no word and leads nowhere is unreachable garbage
    pub fn is_prunable(&self) -> bool {
        !self.end_of_word && self.is_leaf()
    }
}

/// Slot storage for nodes with reuse of released slots.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Node>,
    free: Vec<usize>,
}

impl NodeArena {
    /// Stores a fresh node and returns its id, reusing a released slot when one exists
    pub fn alloc(&mut self, value: char, parent: Option<NodeId>) -> NodeId {
        let node = Node::new(value, parent);
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = node;
                NodeId(slot)
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Returns a slot to the free list.
    ///
    /// The caller must already have detached `id` from its sibling sequence.
    pub fn release(&mut self, id: NodeId) {
        let node = &mut self.slots[id.0];
        node.children.clear();
        node.parent = None;
        node.end_of_word = false;
        self.free.push(id.0);
    }

    /// Number of slots currently holding a live node
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Drops every node and forgets all slots
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.slots[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node() {
        let node = Node::new('f', None);

        assert_eq!(node.value, 'f');
        assert!(node.parent.is_none());
        assert!(node.is_leaf());
        assert!(!node.end_of_word);
        assert!(node.is_prunable());
    }

    #[test]
    fn test_prunable() {
        let mut arena = NodeArena::default();
        let parent = arena.alloc('a', None);
        let child = arena.alloc('b', Some(parent));
        arena[parent].children.push(child);

        assert!(!arena[parent].is_prunable());
        assert!(arena[child].is_prunable());

        arena[child].end_of_word = true;
        assert!(!arena[child].is_prunable());
    }

    #[test]
    fn test_alloc_links_parent() {
        let mut arena = NodeArena::default();
        let root = arena.alloc('a', None);
        let child = arena.alloc('b', Some(root));

        assert_eq!(arena[child].parent, Some(root));
        assert_eq!(arena[child].value, 'b');
        assert_eq!(arena.live(), 2);
    }

    #[test]
    fn test_release_reuses_slot() {
        let mut arena = NodeArena::default();
        let first = arena.alloc('a', None);
        let second = arena.alloc('b', Some(first));
        arena[second].end_of_word = true;

        arena.release(second);
        assert_eq!(arena.live(), 1);

        // The released slot comes back clean
        let third = arena.alloc('c', None);
        assert_eq!(third, second);
        assert_eq!(arena[third].value, 'c');
        assert!(arena[third].parent.is_none());
        assert!(!arena[third].end_of_word);
        assert_eq!(arena.live(), 2);
    }

    #[test]
    fn test_release_many() {
        let mut arena = NodeArena::default();
        let ids: Vec<NodeId> = (0..10_000u32)
            .filter_map(char::from_u32)
            .map(|c| arena.alloc(c, None))
            .collect();

        for &id in &ids {
            arena.release(id);
        }
        assert_eq!(arena.live(), 0);

        // Every slot is handed out again before the arena grows
        for c in "abc".chars() {
            let id = arena.alloc(c, None);
            assert!(ids.contains(&id));
        }
        assert_eq!(arena.live(), 3);
    }

    #[test]
    fn test_clear() {
        let mut arena = NodeArena::default();
        let a = arena.alloc('a', None);
        arena.alloc('b', Some(a));
        arena.release(a);

        arena.clear();
        assert_eq!(arena.live(), 0);
    }
}
