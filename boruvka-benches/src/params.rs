//! Benchmark parameter types.

use std::fmt;

/// Parameters for a contraction benchmark run.
#[derive(Clone, Debug)]
pub struct ContractionBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of worker threads; `None` for the sequential engine.
    pub workers: Option<usize>,
}

impl fmt::Display for ContractionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.workers {
            Some(workers) => write!(f, "n={},workers={workers}", self.node_count),
            None => write!(f, "n={},sequential", self.node_count),
        }
    }
}
