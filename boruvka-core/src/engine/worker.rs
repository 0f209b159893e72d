//! The per-worker contraction loop.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, trace, warn};

use super::WorkerStats;
use crate::{
    arena::ComponentArena,
    component::Contraction,
    error::{BoruvkaError, Result},
    graph::ComponentId,
    queue::WorkQueue,
    sink::SolutionSink,
};

/// State shared by every worker of one run.
pub(super) struct Shared<'a, C, S: ?Sized> {
    pub(super) arena: &'a ComponentArena<C>,
    pub(super) queue: &'a WorkQueue,
    pub(super) sink: &'a S,
    /// Set once the solution has been handed to the sink.
    pub(super) published: &'a AtomicBool,
    /// Set when any worker hits a fatal error.
    pub(super) halted: &'a AtomicBool,
}

impl<C, S: ?Sized> Shared<'_, C, S> {
    fn finished(&self) -> bool {
        self.published.load(Ordering::Acquire) || self.halted.load(Ordering::Acquire)
    }
}

pub(super) enum Step {
    Continue,
    Published,
}

/// Drains the queue until it is empty, the solution is published, or
/// another worker failed.
pub(super) fn run_worker<C, S>(shared: &Shared<'_, C, S>, worker: usize) -> Result<WorkerStats>
where
    C: Contraction + Send,
    S: SolutionSink<C> + ?Sized,
{
    let mut stats = WorkerStats::default();
    while !shared.finished() {
        let Some(id) = shared.queue.pop() else {
            break;
        };
        match step(shared, id, &mut stats) {
            Ok(Step::Continue) => {}
            Ok(Step::Published) => break,
            Err(err) => {
                shared.halted.store(true, Ordering::Release);
                warn!(worker, component = %id, error = %err, "worker aborted");
                return Err(err);
            }
        }
    }
    trace!(worker, merges = stats.merges, "worker exiting");
    Ok(stats)
}

pub(super) fn step<C, S>(
    shared: &Shared<'_, C, S>,
    id: ComponentId,
    stats: &mut WorkerStats,
) -> Result<Step>
where
    C: Contraction + Send,
    S: SolutionSink<C> + ?Sized,
{
    // Whoever holds our lock took us as its neighbour and will absorb us,
    // so the entry is dropped rather than requeued.
    let Some(mut this) = shared.arena.try_lock(id)? else {
        stats.self_contention += 1;
        record_self_contention();
        return Ok(Step::Continue);
    };

    if this.is_dead() {
        stats.stale_entries += 1;
        record_stale_entry();
        return Ok(Step::Continue);
    }

    let Some(edge) = this.min_edge().cloned() else {
        publish(shared, &*this);
        return Ok(Step::Published);
    };

    let neighbour_id = edge.other(id)?;
    if neighbour_id == id {
        return Err(BoruvkaError::InvariantViolation {
            invariant: "listed edges never loop back to their component",
            component: id.get(),
        });
    }

    let Some(mut neighbour) = shared.arena.try_lock(neighbour_id)? else {
        drop(this);
        shared.queue.push(id);
        stats.contention_requeues += 1;
        record_contention_requeue();
        trace!(component = %id, neighbour = %neighbour_id, "neighbour busy; requeued");
        return Ok(Step::Continue);
    };

    if neighbour.is_dead() {
        stats.dead_neighbours += 1;
        record_dead_neighbour();
        trace!(component = %id, neighbour = %neighbour_id, "neighbour already absorbed");
        return Ok(Step::Continue);
    }

    neighbour.bury()?;
    this.merge(&mut *neighbour, &edge);
    drop(neighbour);
    drop(this);

    shared.queue.push(id);
    stats.merges += 1;
    record_merge();
    Ok(Step::Continue)
}

fn publish<C, S>(shared: &Shared<'_, C, S>, component: &C)
where
    C: Contraction,
    S: SolutionSink<C> + ?Sized,
{
    if shared
        .published
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
    {
        shared.sink.publish(component);
        info!(
            component = %component.id(),
            total_weight = component.total_weight(),
            total_edge_count = component.total_edge_count(),
            "solution published"
        );
    } else {
        warn!(
            component = %component.id(),
            "second fully contracted component found; graph is disconnected"
        );
    }
}

#[cfg(feature = "metrics")]
fn record_merge() {
    metrics::counter!("boruvka_merges").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_merge() {}

#[cfg(feature = "metrics")]
fn record_contention_requeue() {
    metrics::counter!("boruvka_contention_requeues").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_contention_requeue() {}

#[cfg(feature = "metrics")]
fn record_self_contention() {
    metrics::counter!("boruvka_self_contention").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_self_contention() {}

#[cfg(feature = "metrics")]
fn record_stale_entry() {
    metrics::counter!("boruvka_stale_entries").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_stale_entry() {}

#[cfg(feature = "metrics")]
fn record_dead_neighbour() {
    metrics::counter!("boruvka_dead_neighbours").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_dead_neighbour() {}
