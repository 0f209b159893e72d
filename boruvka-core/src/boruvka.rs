//! Minimum spanning tree driver for the Borůvka library.
//!
//! Provides the [`Boruvka`] entry point: validate the input, optionally
//! reject disconnected graphs, seed the components, and hand them to the
//! selected engine.

use std::num::NonZeroUsize;

use tracing::{info, instrument, warn};

use crate::{
    Result,
    arena::{ComponentArena, singletons_from_graph},
    builder::ExecutionStrategy,
    engine::{ContractionReport, EngineConfig, contract, contract_sequential},
    error::BoruvkaError,
    graph::InputGraph,
    sink::{MinimumSpanningTree, SpanningTreeSink},
};

/// Entry point for computing minimum spanning trees.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, InputGraph, WeightedEdge};
///
/// let boruvka = BoruvkaBuilder::new().with_workers(2).build()?;
/// let graph = InputGraph::new(4, vec![
///     WeightedEdge::new(0, 1, 1.0),
///     WeightedEdge::new(1, 2, 2.0),
///     WeightedEdge::new(2, 3, 1.0),
///     WeightedEdge::new(3, 0, 3.0),
/// ]);
/// let tree = boruvka.run(&graph)?;
/// assert_eq!(tree.total_weight(), 4.0);
/// assert_eq!(tree.total_edge_count(), 3);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Boruvka {
    config: EngineConfig,
    execution_strategy: ExecutionStrategy,
    connectivity_check: bool,
}

impl Boruvka {
    pub(crate) fn new(
        config: EngineConfig,
        execution_strategy: ExecutionStrategy,
        connectivity_check: bool,
    ) -> Self {
        Self {
            config,
            execution_strategy,
            connectivity_check,
        }
    }

    /// Returns the number of workers used by the concurrent engine.
    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.config.workers()
    }

    /// Returns the execution strategy that will be used when running.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns whether disconnected graphs are rejected before contraction.
    #[must_use]
    pub fn connectivity_check(&self) -> bool {
        self.connectivity_check
    }

    /// Computes the minimum spanning tree of `graph`.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`InputGraph::validate`],
    /// [`BoruvkaError::Disconnected`] when the connectivity check is enabled
    /// and the graph has several components, and any engine failure.
    pub fn run(&self, graph: &InputGraph) -> Result<MinimumSpanningTree> {
        self.run_with_report(graph).map(|(tree, _)| tree)
    }

    /// Computes the minimum spanning tree of `graph` together with the
    /// engine's run counters.
    ///
    /// # Errors
    ///
    /// As for [`Boruvka::run`]. [`BoruvkaError::NoSolution`] is returned if
    /// the engine finishes without publishing.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            edges = graph.edges().len(),
            workers = self.config.workers().get(),
            strategy = ?self.execution_strategy,
        ),
    )]
    pub fn run_with_report(
        &self,
        graph: &InputGraph,
    ) -> Result<(MinimumSpanningTree, ContractionReport)> {
        graph.validate()?;
        if self.connectivity_check {
            let components = graph.connected_components();
            if components > 1 {
                warn!(components, "graph is disconnected, returning error");
                return Err(BoruvkaError::Disconnected { components });
            }
        }

        let sink = SpanningTreeSink::new();
        let report = match self.execution_strategy {
            ExecutionStrategy::Concurrent => {
                let (arena, queue) = ComponentArena::from_graph(graph)?;
                contract(&arena, &queue, &sink, &self.config)?
            }
            ExecutionStrategy::Sequential => {
                contract_sequential(singletons_from_graph(graph)?, &sink)?
            }
        };

        let tree = sink.into_tree().ok_or(BoruvkaError::NoSolution)?;
        info!(
            total_weight = tree.total_weight(),
            total_edge_count = tree.total_edge_count(),
            merges = report.stats().merges,
            "spanning tree computed"
        );
        Ok((tree, report))
    }
}
