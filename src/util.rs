use crate::node::{NodeArena, NodeId};

/// Where a code point sits, or would sit, in a sibling sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    /// A sibling with the value exists at `index`
    Found { index: usize, id: NodeId },
    /// No such sibling; inserting at `index` keeps the sequence sorted
    Vacant { index: usize },
}

impl Location {
    /// The matching node, if there is one
    pub fn node(self) -> Option<NodeId> {
        match self {
            Location::Found { id, .. } => Some(id),
            Location::Vacant { .. } => None,
        }
    }
}

/// Binary searches a sorted sibling sequence for the node holding `value`.
pub(crate) fn locate(nodes: &NodeArena, siblings: &[NodeId], value: char) -> Location {
    match siblings.binary_search_by_key(&value, |&id| nodes[id].value) {
        Ok(index) => Location::Found {
            index,
            id: siblings[index],
        },
        Err(index) => Location::Vacant { index },
    }
}

/// Lowercases a word and splits it into the code points the tree branches on.
///
/// Each character is lowercased on its own, so a letter maps the same way
/// wherever it sits in the word and a prefix lowercases like the word it begins.
pub(crate) fn code_points(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_lowercase).collect()
}

/// Returns whether a sibling sequence is strictly ascending by value.
pub(crate) fn is_ordered(nodes: &NodeArena, siblings: &[NodeId]) -> bool {
    siblings
        .windows(2)
        .all(|pair| nodes[pair[0]].value < nodes[pair[1]].value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(nodes: &mut NodeArena, values: &str) -> Vec<NodeId> {
        values.chars().map(|c| nodes.alloc(c, None)).collect()
    }

    #[test]
    fn test_locate_found() {
        let mut nodes = NodeArena::default();
        let siblings = level(&mut nodes, "bdf");

        assert_eq!(
            locate(&nodes, &siblings, 'd'),
            Location::Found {
                index: 1,
                id: siblings[1]
            }
        );
        assert_eq!(locate(&nodes, &siblings, 'f').node(), Some(siblings[2]));
    }

    #[test]
    fn test_locate_vacant() {
        let mut nodes = NodeArena::default();
        let siblings = level(&mut nodes, "bdf");

        assert_eq!(locate(&nodes, &siblings, 'a'), Location::Vacant { index: 0 });
        assert_eq!(locate(&nodes, &siblings, 'c'), Location::Vacant { index: 1 });
        assert_eq!(locate(&nodes, &siblings, 'z'), Location::Vacant { index: 3 });
        assert_eq!(locate(&nodes, &[], 'a'), Location::Vacant { index: 0 });
        assert!(locate(&nodes, &siblings, 'e').node().is_none());
    }

    #[test]
    fn test_code_points_lowercase() {
        assert_eq!(code_points("FooBar"), vec!['f', 'o', 'o', 'b', 'a', 'r']);
        assert_eq!(code_points("ÉTÉ"), vec!['é', 't', 'é']);
        assert!(code_points("").is_empty());
    }

    #[test]
    fn test_code_points_ignore_position() {
        // Sigma lowercases the same at the end of a word as inside it
        assert_eq!(code_points("ΑΣ"), vec!['α', 'σ']);
        assert_eq!(code_points("ΑΣΑ"), vec!['α', 'σ', 'α']);
    }

    #[test]
    fn test_is_ordered() {
        let mut nodes = NodeArena::default();
        let sorted = level(&mut nodes, "abz");
        let unsorted = level(&mut nodes, "ba");
        let duplicated = level(&mut nodes, "aa");

        assert!(is_ordered(&nodes, &sorted));
        assert!(is_ordered(&nodes, &[]));
        assert!(!is_ordered(&nodes, &unsorted));
        assert!(!is_ordered(&nodes, &duplicated));
    }
}
