//! Contraction engines.
//!
//! [`contract`] runs the concurrent, lock-based contraction: a fixed pool of
//! workers repeatedly pops a component, try-locks it and the far end of its
//! cheapest edge, and merges the pair. No worker ever blocks on a lock; a
//! failed second acquisition releases the first and requeues the component.
//! [`contract_sequential`] runs the same loop on one thread without locks
//! and serves as the reference implementation.

mod sequential;
mod worker;

use std::{
    num::NonZeroUsize,
    ops::AddAssign,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use tracing::{debug, instrument};

use crate::{
    arena::ComponentArena,
    component::Contraction,
    error::{BoruvkaError, Result},
    queue::WorkQueue,
    sink::SolutionSink,
};

pub use self::sequential::contract_sequential;

use self::worker::{Shared, run_worker};

/// Engine configuration.
///
/// # Examples
/// ```
/// use boruvka_core::EngineConfig;
///
/// let config = EngineConfig::new(4)?;
/// assert_eq!(config.workers().get(), 4);
/// assert!(EngineConfig::new(0).is_err());
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    workers: NonZeroUsize,
}

impl EngineConfig {
    /// Creates a configuration running `workers` concurrent workers.
    ///
    /// # Errors
    ///
    /// Returns [`BoruvkaError::InvalidWorkerCount`] when `workers == 0`.
    pub fn new(workers: usize) -> Result<Self> {
        NonZeroUsize::new(workers)
            .map(|workers| Self { workers })
            .ok_or(BoruvkaError::InvalidWorkerCount { got: workers })
    }

    /// Returns the number of workers.
    #[must_use]
    #[rustfmt::skip]
    pub const fn workers(&self) -> NonZeroUsize { self.workers }
}

impl Default for EngineConfig {
    /// One worker per available hardware thread.
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Counters kept by a single worker.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WorkerStats {
    /// Merges committed.
    pub merges: usize,
    /// Components requeued because their neighbour was locked.
    pub contention_requeues: usize,
    /// Popped components that were locked by another worker.
    pub self_contention: usize,
    /// Popped components that had already been absorbed.
    pub stale_entries: usize,
    /// Merge attempts abandoned because the neighbour had been absorbed.
    pub dead_neighbours: usize,
}

impl AddAssign for WorkerStats {
    fn add_assign(&mut self, other: Self) {
        self.merges += other.merges;
        self.contention_requeues += other.contention_requeues;
        self.self_contention += other.self_contention;
        self.stale_entries += other.stale_entries;
        self.dead_neighbours += other.dead_neighbours;
    }
}

/// Summary of one contraction run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContractionReport {
    workers: usize,
    stats: WorkerStats,
    published: bool,
}

impl ContractionReport {
    /// Returns the number of workers that ran.
    #[must_use]
    #[rustfmt::skip]
    pub const fn workers(&self) -> usize { self.workers }

    /// Returns the counters summed over all workers.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> WorkerStats { self.stats }

    /// Returns `true` when a solution reached the sink.
    #[must_use]
    #[rustfmt::skip]
    pub const fn published(&self) -> bool { self.published }
}

/// Contracts the components in `arena` until one remains and publishes it to
/// `sink`.
///
/// `queue` must initially hold every live component id exactly once. Each
/// component must list only edges whose endpoints are live components in the
/// same arena.
///
/// The sink is invoked at most once. With a connected graph it receives the
/// minimum spanning tree. With a disconnected graph it receives whichever
/// fully contracted component a worker reaches first; callers wanting a
/// guarantee should check connectivity beforehand, as [`crate::Boruvka`]
/// does.
///
/// # Errors
///
/// Returns [`BoruvkaError::ThreadPool`] when the worker pool cannot be
/// created, and the first [`BoruvkaError::InvariantViolation`] or
/// [`BoruvkaError::LockPoisoned`] raised by any worker. The remaining
/// workers stop at their next iteration.
///
/// # Examples
/// ```
/// use boruvka_core::{
///     ComponentArena, EngineConfig, InputGraph, SpanningTreeSink, WeightedEdge, contract,
/// };
///
/// let graph = InputGraph::new(4, vec![
///     WeightedEdge::new(0, 1, 1.0),
///     WeightedEdge::new(1, 2, 2.0),
///     WeightedEdge::new(2, 3, 1.0),
///     WeightedEdge::new(3, 0, 3.0),
/// ]);
/// let (arena, queue) = ComponentArena::from_graph(&graph)?;
/// let sink = SpanningTreeSink::new();
/// let report = contract(&arena, &queue, &sink, &EngineConfig::new(2)?)?;
/// assert!(report.published());
///
/// let tree = sink.into_tree().expect("connected graph publishes");
/// assert_eq!(tree.total_weight(), 4.0);
/// assert_eq!(tree.total_edge_count(), 3);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[instrument(
    name = "boruvka.contract",
    err,
    skip(arena, queue, sink),
    fields(
        components = arena.len(),
        queued = queue.len(),
        workers = config.workers().get(),
    ),
)]
pub fn contract<C, S>(
    arena: &ComponentArena<C>,
    queue: &WorkQueue,
    sink: &S,
    config: &EngineConfig,
) -> Result<ContractionReport>
where
    C: Contraction + Send,
    S: SolutionSink<C> + ?Sized,
{
    let workers = config.workers().get();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("boruvka-worker-{index}"))
        .build()
        .map_err(|err| BoruvkaError::ThreadPool {
            reason: err.to_string(),
        })?;

    let published = AtomicBool::new(false);
    let halted = AtomicBool::new(false);
    let shared = Shared {
        arena,
        queue,
        sink,
        published: &published,
        halted: &halted,
    };

    let outcomes = pool.broadcast(|ctx| run_worker(&shared, ctx.index()));

    let mut stats = WorkerStats::default();
    for outcome in outcomes {
        stats += outcome?;
    }

    let report = ContractionReport {
        workers,
        stats,
        published: published.load(Ordering::Acquire),
    };
    debug!(
        merges = stats.merges,
        contention_requeues = stats.contention_requeues,
        self_contention = stats.self_contention,
        stale_entries = stats.stale_entries,
        dead_neighbours = stats.dead_neighbours,
        published = report.published,
        "contraction finished"
    );
    Ok(report)
}


#[cfg(test)]
mod property;
