//! Synthetic graph generation for benchmarking.
//!
//! Provides [`SyntheticGraph`], a seeded generator of connected weighted
//! graphs. Every graph contains a random spanning path so the connectivity
//! check always passes, plus a configurable number of extra edges that
//! drive contention between workers.

use boruvka_core::{InputGraph, WeightedEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Number of random edges drawn on top of the spanning path. Draws that
    /// land on a single node are discarded.
    pub extra_edges: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generator for connected random graphs with weights in `[0, 1)`.
///
/// # Examples
///
/// ```
/// use boruvka_benches::source::{SyntheticConfig, SyntheticGraph};
///
/// let config = SyntheticConfig { node_count: 10, extra_edges: 20, seed: 42 };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.node_count(), 10);
/// assert!(graph.edges().len() >= 9);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraph;

impl SyntheticGraph {
    /// Generates a connected graph from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<InputGraph, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut order: Vec<usize> = (0..config.node_count).collect();
        order.shuffle(&mut rng);

        let capacity = config
            .node_count
            .saturating_sub(1)
            .saturating_add(config.extra_edges);
        let mut edges = Vec::with_capacity(capacity);
        for pair in order.windows(2) {
            if let [source, target] = *pair {
                edges.push(WeightedEdge::new(source, target, rng.gen_range(0.0..1.0)));
            }
        }

        for _ in 0..config.extra_edges {
            let source = rng.gen_range(0..config.node_count);
            let target = rng.gen_range(0..config.node_count);
            if source != target {
                edges.push(WeightedEdge::new(source, target, rng.gen_range(0.0..1.0)));
            }
        }

        Ok(InputGraph::new(config.node_count, edges))
    }
}
