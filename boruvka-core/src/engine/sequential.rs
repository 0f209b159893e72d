//! Single-threaded reference engine.

use std::collections::VecDeque;

use tracing::{debug, info, instrument};

use super::{ContractionReport, WorkerStats};
use crate::{
    component::Contraction,
    error::{BoruvkaError, Result},
    graph::ComponentId,
    sink::SolutionSink,
};

/// Contracts `components` on the calling thread and publishes the survivor
/// to `sink`.
///
/// Runs the same pop, pick-cheapest-edge, merge, requeue loop as
/// [`super::contract`] but without locks. Component `i` must carry id `i`.
/// An empty input publishes nothing.
///
/// # Errors
///
/// Returns [`BoruvkaError::InvariantViolation`] when a component id does not
/// match its position or when an edge leads to an absorbed or unknown
/// component.
///
/// # Examples
/// ```
/// use boruvka_core::{ComponentId, SpanningTreeSink, Supernode, contract_sequential};
///
/// let sink = SpanningTreeSink::new();
/// let report = contract_sequential(vec![Supernode::new(ComponentId::new(0))], &sink)?;
/// assert!(report.published());
/// assert_eq!(sink.into_tree().map(|tree| tree.total_edge_count()), Some(0));
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[instrument(
    name = "boruvka.contract_sequential",
    err,
    skip_all,
    fields(components = components.len()),
)]
pub fn contract_sequential<C, S>(mut components: Vec<C>, sink: &S) -> Result<ContractionReport>
where
    C: Contraction,
    S: SolutionSink<C> + ?Sized,
{
    if let Some(component) = components
        .iter()
        .enumerate()
        .find_map(|(index, component)| (component.id().get() != index).then_some(component))
    {
        return Err(BoruvkaError::InvariantViolation {
            invariant: "arena slot index must equal component id",
            component: component.id().get(),
        });
    }

    let mut queue: VecDeque<ComponentId> = components.iter().map(Contraction::id).collect();
    let mut dead = vec![false; components.len()];
    let mut stats = WorkerStats::default();
    let mut published = false;

    while let Some(id) = queue.pop_front() {
        if is_dead(&dead, id)? {
            stats.stale_entries += 1;
            continue;
        }

        let current = components.get(id.get()).ok_or_else(|| outside_arena(id))?;
        let Some(edge) = current.min_edge().cloned() else {
            sink.publish(current);
            published = true;
            info!(
                component = %id,
                total_weight = current.total_weight(),
                total_edge_count = current.total_edge_count(),
                "solution published"
            );
            break;
        };

        let neighbour = edge.other(id)?;
        if neighbour == id || is_dead(&dead, neighbour)? {
            return Err(BoruvkaError::InvariantViolation {
                invariant: "listed edges lead to live neighbours",
                component: id.get(),
            });
        }

        let [this, other] = components
            .get_disjoint_mut([id.get(), neighbour.get()])
            .map_err(|_| outside_arena(neighbour))?;
        this.merge(other, &edge);
        if let Some(flag) = dead.get_mut(neighbour.get()) {
            *flag = true;
        }
        queue.push_back(id);
        stats.merges += 1;
    }

    debug!(
        merges = stats.merges,
        stale_entries = stats.stale_entries,
        published,
        "sequential contraction finished"
    );
    Ok(ContractionReport {
        workers: 1,
        stats,
        published,
    })
}

fn is_dead(dead: &[bool], id: ComponentId) -> Result<bool> {
    dead.get(id.get()).copied().ok_or_else(|| outside_arena(id))
}

const fn outside_arena(id: ComponentId) -> BoruvkaError {
    BoruvkaError::InvariantViolation {
        invariant: "component id must be within the arena",
        component: id.get(),
    }
}
