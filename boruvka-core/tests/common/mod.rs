use boruvka_core::{InputGraph, WeightedEdge};

/// Builds a graph from `(source, target, weight)` triples.
#[must_use]
pub fn graph(node_count: usize, edges: &[(usize, usize, f64)]) -> InputGraph {
    InputGraph::new(
        node_count,
        edges
            .iter()
            .map(|&(source, target, weight)| WeightedEdge::new(source, target, weight))
            .collect(),
    )
}

/// The four-node cycle 0-1 (1), 1-2 (2), 2-3 (1), 3-0 (3).
#[must_use]
pub fn square() -> InputGraph {
    graph(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (3, 0, 3.0)])
}
