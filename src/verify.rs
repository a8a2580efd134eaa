//! Structural audit of a whole tree.

use crate::node::{NodeArena, NodeId};
use crate::util::is_ordered;
use crate::Error;

/// Checks every node reachable from `roots` and returns the number of stored words.
///
/// Fails on the first broken invariant: unordered or duplicated siblings, a
/// wrong parent link, a garbage node, or arena slots nothing can reach.
pub(crate) fn audit(nodes: &NodeArena, roots: &[NodeId]) -> Result<usize, Error> {
    let mut words = 0;
    let mut reachable = 0;
    let mut stack: Vec<(Option<NodeId>, &[NodeId], String)> = vec![(None, roots, String::new())];

    while let Some((owner, siblings, path)) = stack.pop() {
        if !is_ordered(nodes, siblings) {
            return Err(Error::Unordered { path });
        }

        for &id in siblings {
            let node = &nodes[id];
            reachable += 1;

            let mut here = path.clone();
            here.push(node.value);

            if node.parent != owner {
                return Err(Error::BrokenParent { path: here });
            }
            if node.is_prunable() {
                return Err(Error::Garbage { path: here });
            }
            if node.end_of_word {
                words += 1;
            }
            if !node.is_leaf() {
                stack.push((Some(id), &node.children, here));
            }
        }
    }

    if reachable != nodes.live() {
        return Err(Error::Leaked {
            live: nodes.live(),
            reachable,
        });
    }

    Ok(words)
}
