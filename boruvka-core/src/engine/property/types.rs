//! Type definitions for contraction property tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use test_strategy::Arbitrary;

use crate::InputGraph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different parts of the lock protocol. Sampling is
/// biased towards `ManyIdentical`, the heaviest stress case for ties.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing ties.
    #[weight(3)]
    ManyIdentical,
    /// Sparse graph with approximately `1.5n` to `2n` edges.
    #[weight(2)]
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    #[weight(2)]
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    #[weight(2)]
    Disconnected,
}

impl WeightDistribution {
    /// Returns `true` when generated weights are continuous, making the
    /// minimum spanning tree unique.
    pub(super) fn has_unique_tree(self) -> bool {
        matches!(self, Self::Unique | Self::Sparse | Self::Dense)
    }
}

/// Fixture for contraction property tests.
///
/// Captures the generated graph and the weight distribution used during
/// generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct ContractionFixture {
    /// Generated input graph.
    pub graph: InputGraph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl ContractionFixture {
    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.graph.node_count(),
            self.graph.edges().len(),
        )
    }
}
