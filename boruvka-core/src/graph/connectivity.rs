//! Union-find connectivity check used before contraction.
//!
//! Union by rank with path halving; ties pick the smaller index as root so
//! the structure is deterministic for a given edge order.

use super::WeightedEdge;

/// Returns the number of connected components induced by `edges` over
/// `node_count` nodes. Out-of-range endpoints are ignored.
pub(crate) fn count_components(node_count: usize, edges: &[WeightedEdge]) -> usize {
    let mut sets = DisjointSet::new(node_count);
    for edge in edges {
        if edge.source() < node_count && edge.target() < node_count {
            sets.union(edge.source(), edge.target());
        }
    }
    sets.components
}

struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        loop {
            let parent = self.parent_of(node);
            if parent == node {
                return node;
            }
            let grandparent = self.parent_of(parent);
            if let Some(slot) = self.parent.get_mut(node) {
                *slot = grandparent;
            }
            node = grandparent;
        }
    }

    fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank_of(left_root);
        let right_rank = self.rank_of(right_root);
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
        if left_rank == right_rank
            && let Some(rank) = self.rank.get_mut(parent)
        {
            *rank = rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    // Unknown nodes act as their own singleton roots.
    fn parent_of(&self, node: usize) -> usize {
        self.parent.get(node).copied().unwrap_or(node)
    }

    fn rank_of(&self, node: usize) -> u8 {
        self.rank.get(node).copied().unwrap_or(0)
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }
    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
