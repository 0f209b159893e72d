//! Graph components (supernodes) and the contraction contract.
//!
//! A component owns a weight-sorted list of outgoing [`Edge`]s and the
//! running totals of the edges contracted into it. Both engines drive
//! components exclusively through the [`Contraction`] trait; the concurrent
//! engine adds locking and tombstones around it in the arena, the
//! sequential engine uses it as-is.

use std::{
    hash::{Hash, Hasher},
    mem,
    sync::Arc,
};

use crate::graph::{ComponentId, Edge, WeightedEdge};

/// Operations a contraction engine needs from a graph component.
pub trait Contraction {
    /// Returns the component's stable identity.
    fn id(&self) -> ComponentId;

    /// Returns the summed weight of every edge contracted into this
    /// component.
    fn total_weight(&self) -> f64;

    /// Returns how many input edges were contracted into this component.
    fn total_edge_count(&self) -> usize;

    /// Inserts `edge` into the outgoing list, keeping it sorted by weight.
    fn insert_edge(&mut self, edge: Arc<Edge>);

    /// Returns the lowest-weight outgoing edge, or `None` when the component
    /// has no neighbours left.
    fn min_edge(&self) -> Option<&Arc<Edge>>;

    /// Absorbs `other` across `via`, which connects the two components.
    ///
    /// Afterwards `self` lists every edge that leaves the combined
    /// component, still sorted by weight, and `other` lists nothing.
    fn merge(&mut self, other: &mut Self, via: &Edge);

    /// Returns the number of outgoing edges still listed.
    fn edge_count(&self) -> usize;

    /// Returns the input edges contracted into this component, reported by
    /// their original endpoints.
    fn tree_edges(&self) -> &[WeightedEdge];
}

/// A graph supernode: one or more input nodes contracted together.
///
/// Equality and hashing use the id alone.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use boruvka_core::{ComponentId, Contraction, Edge, EdgeId, Supernode};
///
/// let mut left = Supernode::new(ComponentId::new(0));
/// let mut right = Supernode::new(ComponentId::new(1));
/// let edge = Arc::new(Edge::new(EdgeId::new(0), left.id(), right.id(), 5.0));
/// left.insert_edge(Arc::clone(&edge));
/// right.insert_edge(Arc::clone(&edge));
///
/// left.merge(&mut right, &edge);
/// assert_eq!(left.total_weight(), 5.0);
/// assert_eq!(left.total_edge_count(), 1);
/// assert!(left.min_edge().is_none());
/// ```
#[derive(Debug)]
pub struct Supernode {
    id: ComponentId,
    edges: Vec<Arc<Edge>>,
    total_weight: f64,
    total_edge_count: usize,
    tree: Vec<WeightedEdge>,
}

impl Supernode {
    /// Creates a singleton component with no edges.
    #[must_use]
    pub const fn new(id: ComponentId) -> Self {
        Self {
            id,
            edges: Vec::new(),
            total_weight: 0.0,
            total_edge_count: 0,
            tree: Vec::new(),
        }
    }

    /// Returns the outgoing edges in ascending weight order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Arc<Edge>] { &self.edges }
}

impl Contraction for Supernode {
    #[rustfmt::skip]
    fn id(&self) -> ComponentId { self.id }

    #[rustfmt::skip]
    fn total_weight(&self) -> f64 { self.total_weight }

    #[rustfmt::skip]
    fn total_edge_count(&self) -> usize { self.total_edge_count }

    fn insert_edge(&mut self, edge: Arc<Edge>) {
        // Equal weights keep insertion order.
        let at = self
            .edges
            .partition_point(|listed| listed.weight() <= edge.weight());
        self.edges.insert(at, edge);
    }

    fn min_edge(&self) -> Option<&Arc<Edge>> {
        self.edges.first()
    }

    fn merge(&mut self, other: &mut Self, via: &Edge) {
        self.total_weight += other.total_weight + via.weight();
        self.total_edge_count += other.total_edge_count + 1;

        if other.tree.len() > self.tree.len() {
            mem::swap(&mut self.tree, &mut other.tree);
        }
        self.tree.append(&mut other.tree);
        let (source, target) = via.origin();
        self.tree
            .push(WeightedEdge::new(source.get(), target.get(), via.weight()));

        let mine = mem::take(&mut self.edges);
        let theirs = mem::take(&mut other.edges);
        self.edges = merge_sorted(mine, theirs, self.id, other.id);
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn tree_edges(&self) -> &[WeightedEdge] {
        &self.tree
    }
}

impl PartialEq for Supernode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Supernode {}

impl Hash for Supernode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Two-pointer merge of two weight-sorted edge lists.
///
/// Edges internal to `{keep, absorbed}` are dropped; every retained edge is
/// redirected from `absorbed` to `keep`. On equal weights `keep`'s edge goes
/// first.
fn merge_sorted(
    keep_edges: Vec<Arc<Edge>>,
    absorbed_edges: Vec<Arc<Edge>>,
    keep: ComponentId,
    absorbed: ComponentId,
) -> Vec<Arc<Edge>> {
    let mut merged = Vec::with_capacity(keep_edges.len() + absorbed_edges.len());
    let external = |edge: &Arc<Edge>| !edge.is_internal_to(keep, absorbed);
    let mut left = keep_edges.into_iter().filter(external).peekable();
    let mut right = absorbed_edges.into_iter().filter(external).peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r.weight() < l.weight(),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        if let Some(edge) = next {
            edge.redirect_endpoint(absorbed, keep);
            merged.push(edge);
        }
    }

    merged
}
