//! Input graph description, identifiers, and the shared edge type.
//!
//! An [`InputGraph`] is the undirected, weighted edge list handed to the
//! driver. Validation turns it into [`Edge`] records that the component
//! arena shares between the two endpoint components.

mod connectivity;
mod edge;

use std::fmt;

use crate::error::{BoruvkaError, Result};

pub(crate) use self::connectivity::count_components;
pub use self::edge::Edge;

/// Stable identity of a graph component.
///
/// Component ids coincide with the input node ids and with the component's
/// slot in the arena. A merge never changes the surviving component's id.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Wraps a raw node index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw node index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an edge in the validated input edge list.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Wraps a raw edge index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw edge index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

/// An undirected, weighted input edge between two node ids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    source: usize,
    target: usize,
    weight: f64,
}

impl WeightedEdge {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::WeightedEdge;
    ///
    /// let edge = WeightedEdge::new(0, 1, 2.5);
    /// assert_eq!(edge.source(), 0);
    /// assert_eq!(edge.target(), 1);
    /// assert_eq!(edge.weight(), 2.5);
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// A weighted undirected graph expressed as a node count and an edge list.
///
/// Parallel edges are permitted. Self-loops are accepted but ignored when the
/// graph is contracted.
///
/// # Examples
/// ```
/// use boruvka_core::{InputGraph, WeightedEdge};
///
/// let graph = InputGraph::new(3, vec![
///     WeightedEdge::new(0, 1, 1.0),
///     WeightedEdge::new(1, 2, 4.0),
/// ]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputGraph {
    node_count: usize,
    edges: Vec<WeightedEdge>,
}

impl InputGraph {
    /// Creates a graph with `node_count` nodes and the supplied edges.
    #[must_use]
    pub const fn new(node_count: usize, edges: Vec<WeightedEdge>) -> Self {
        Self { node_count, edges }
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the input edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Checks the graph against the contraction preconditions.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - `node_count == 0`
    /// - an edge references a node id `>= node_count`
    /// - an edge weight is NaN, infinite, or negative
    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(BoruvkaError::EmptyGraph);
        }
        self.edges
            .iter()
            .try_for_each(|edge| validate_edge(edge, self.node_count))
    }

    /// Counts connected components, treating every node as reachable from
    /// itself.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{InputGraph, WeightedEdge};
    ///
    /// let graph = InputGraph::new(4, vec![WeightedEdge::new(0, 1, 1.0)]);
    /// assert_eq!(graph.connected_components(), 3);
    /// ```
    #[must_use]
    pub fn connected_components(&self) -> usize {
        count_components(self.node_count, &self.edges)
    }

    /// Validates the graph and builds the shared [`Edge`] records, skipping
    /// self-loops.
    ///
    /// Returned edges keep their position in the input list as [`EdgeId`]
    /// so that contracted trees can be reported against the input.
    pub(crate) fn to_edges(&self) -> Result<Vec<Edge>> {
        self.validate()?;
        Ok(self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.source != edge.target)
            .map(|(index, edge)| {
                Edge::new(
                    EdgeId::new(index),
                    ComponentId::new(edge.source),
                    ComponentId::new(edge.target),
                    edge.weight,
                )
            })
            .collect())
    }
}

fn validate_edge(edge: &WeightedEdge, node_count: usize) -> Result<()> {
    for node in [edge.source, edge.target] {
        if node >= node_count {
            return Err(BoruvkaError::InvalidNodeId { node, node_count });
        }
    }

    if !edge.weight.is_finite() {
        return Err(BoruvkaError::NonFiniteWeight {
            source_node: edge.source,
            target_node: edge.target,
        });
    }

    if edge.weight < 0.0 {
        return Err(BoruvkaError::NegativeWeight {
            source_node: edge.source,
            target_node: edge.target,
            weight: edge.weight,
        });
    }

    Ok(())
}
