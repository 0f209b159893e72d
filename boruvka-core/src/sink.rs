//! Receivers for the final contracted component.

use std::sync::OnceLock;

use tracing::warn;

use crate::{
    component::Contraction,
    graph::{ComponentId, WeightedEdge},
};

/// Receives the single surviving component once contraction completes.
///
/// Implementations are shared by every worker. The engine guarantees at most
/// one `publish` call per run.
pub trait SolutionSink<C: Contraction>: Sync {
    /// Records `component` as the solution.
    fn publish(&self, component: &C);
}

/// The minimum spanning tree recovered from the final component.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningTree {
    root: ComponentId,
    total_weight: f64,
    total_edge_count: usize,
    edges: Vec<WeightedEdge>,
}

impl MinimumSpanningTree {
    /// Captures the totals and contracted edges of `component`.
    ///
    /// Edges are ordered by weight, then by endpoints.
    #[must_use]
    pub fn from_component<C: Contraction>(component: &C) -> Self {
        let mut edges = component.tree_edges().to_vec();
        edges.sort_by(|a, b| {
            a.weight()
                .total_cmp(&b.weight())
                .then_with(|| a.source().cmp(&b.source()))
                .then_with(|| a.target().cmp(&b.target()))
        });
        Self {
            root: component.id(),
            total_weight: component.total_weight(),
            total_edge_count: component.total_edge_count(),
            edges,
        }
    }

    /// Returns the id of the component that absorbed every other one.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> ComponentId { self.root }

    /// Returns the total tree weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of contracted edges (`N - 1` for a connected graph).
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_edge_count(&self) -> usize { self.total_edge_count }

    /// Returns the tree edges by their input endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }
}

/// A [`SolutionSink`] that keeps the first published tree.
///
/// # Examples
/// ```
/// use boruvka_core::{ComponentId, SolutionSink, SpanningTreeSink, Supernode};
///
/// let sink = SpanningTreeSink::new();
/// sink.publish(&Supernode::new(ComponentId::new(0)));
/// let tree = sink.into_tree().expect("published");
/// assert_eq!(tree.total_edge_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct SpanningTreeSink {
    tree: OnceLock<MinimumSpanningTree>,
}

impl SpanningTreeSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: OnceLock::new(),
        }
    }

    /// Returns the published tree, if any.
    #[must_use]
    pub fn tree(&self) -> Option<&MinimumSpanningTree> {
        self.tree.get()
    }

    /// Consumes the sink and returns the published tree, if any.
    #[must_use]
    pub fn into_tree(self) -> Option<MinimumSpanningTree> {
        self.tree.into_inner()
    }
}

impl<C: Contraction> SolutionSink<C> for SpanningTreeSink {
    fn publish(&self, component: &C) {
        let tree = MinimumSpanningTree::from_component(component);
        if self.tree.set(tree).is_err() {
            warn!(
                component = %component.id(),
                "solution already recorded; ignoring duplicate publish"
            );
        }
    }
}
