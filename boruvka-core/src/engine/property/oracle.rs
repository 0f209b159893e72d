//! Sequential Kruskal oracle for contraction property verification.
//!
//! Provides a simple, trusted implementation of Kruskal's algorithm used as
//! the reference in property tests. Ties are broken by input position; any
//! tie-breaking yields the same total weight.

use crate::{InputGraph, WeightedEdge};

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct KruskalResult {
    /// Total weight of the spanning forest.
    pub total_weight: f64,
    /// Number of edges in the spanning forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal.
///
/// Self-loops are skipped. The graph is assumed valid.
pub(super) fn sequential_kruskal(graph: &InputGraph) -> KruskalResult {
    let node_count = graph.node_count();
    let mut edges: Vec<&WeightedEdge> = graph
        .edges()
        .iter()
        .filter(|edge| edge.source() != edge.target())
        .collect();
    edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for edge in edges {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra != rb {
            parent[rb] = ra;
            total_weight += edge.weight();
            edge_count += 1;
            components -= 1;
        }
    }

    KruskalResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}
