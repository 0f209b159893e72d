//! Component arena with per-slot locks and tombstones.
//!
//! Components live in a vector addressed by [`ComponentId`]; edges refer to
//! components by id, never by reference. Each slot carries its own mutex so
//! workers lock components independently, a [`Tombstone`] marking absorbed
//! components, and a holder counter that double-checks mutual exclusion on
//! every acquisition.

use std::{
    ops::{Deref, DerefMut},
    sync::{
        Arc, Mutex, MutexGuard, TryLockError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use crate::{
    component::{Contraction, Supernode},
    error::{BoruvkaError, Result},
    graph::{ComponentId, InputGraph},
    queue::WorkQueue,
};

/// Monotonic "absorbed" flag.
///
/// Once buried a tombstone never reads `false` again.
#[derive(Debug, Default)]
pub struct Tombstone(AtomicBool);

impl Tombstone {
    /// Returns `true` once the component has been absorbed.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Marks the component as absorbed.
    ///
    /// Returns `true` when this call performed the transition and `false`
    /// when the component was already dead.
    pub fn bury(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }
}

/// One arena entry: a component plus its synchronisation state.
#[derive(Debug)]
pub struct ComponentSlot<C> {
    id: ComponentId,
    tombstone: Tombstone,
    holders: AtomicUsize,
    cell: Mutex<C>,
}

impl<C> ComponentSlot<C> {
    fn new(id: ComponentId, component: C) -> Self {
        Self {
            id,
            tombstone: Tombstone::default(),
            holders: AtomicUsize::new(0),
            cell: Mutex::new(component),
        }
    }

    /// Returns the slot's component id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> ComponentId { self.id }

    /// Returns the slot's tombstone.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tombstone(&self) -> &Tombstone { &self.tombstone }
}

/// Exclusive access to one component, released on drop.
#[derive(Debug)]
pub struct SlotGuard<'a, C> {
    slot: &'a ComponentSlot<C>,
    guard: MutexGuard<'a, C>,
}

impl<C> SlotGuard<'_, C> {
    /// Returns `true` when the guarded component has been absorbed.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.slot.tombstone.is_dead()
    }

    /// Tombstones the guarded component.
    ///
    /// # Errors
    ///
    /// Returns [`BoruvkaError::InvariantViolation`] if it was already dead;
    /// a component must never be absorbed twice.
    pub fn bury(&self) -> Result<()> {
        if self.slot.tombstone.bury() {
            Ok(())
        } else {
            Err(BoruvkaError::InvariantViolation {
                invariant: "a component is absorbed at most once",
                component: self.slot.id.get(),
            })
        }
    }
}

impl<C> Deref for SlotGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.guard
    }
}

impl<C> DerefMut for SlotGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.guard
    }
}

impl<C> Drop for SlotGuard<'_, C> {
    fn drop(&mut self) {
        self.slot.holders.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Fixed-size collection of components indexed by [`ComponentId`].
#[derive(Debug)]
pub struct ComponentArena<C> {
    slots: Vec<ComponentSlot<C>>,
}

impl<C> ComponentArena<C> {
    /// Wraps components whose ids match their positions.
    ///
    /// # Errors
    ///
    /// Returns [`BoruvkaError::InvariantViolation`] when a component's id
    /// differs from its index.
    pub fn from_components(components: Vec<C>) -> Result<Self>
    where
        C: Contraction,
    {
        let slots = components
            .into_iter()
            .enumerate()
            .map(|(index, component)| {
                if component.id().get() == index {
                    Ok(ComponentSlot::new(component.id(), component))
                } else {
                    Err(BoruvkaError::InvariantViolation {
                        invariant: "arena slot index must equal component id",
                        component: component.id().get(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { slots })
    }

    /// Returns the number of slots, dead or alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when the arena has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the slot for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoruvkaError::InvariantViolation`] for an id outside the
    /// arena.
    pub fn slot(&self, id: ComponentId) -> Result<&ComponentSlot<C>> {
        self.slots
            .get(id.get())
            .ok_or(BoruvkaError::InvariantViolation {
                invariant: "component id must be within the arena",
                component: id.get(),
            })
    }

    /// Returns the number of components not yet absorbed.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !slot.tombstone.is_dead())
            .count()
    }

    /// Attempts to lock `id` without blocking.
    ///
    /// Returns `Ok(None)` when another worker holds the lock.
    ///
    /// # Errors
    ///
    /// Returns [`BoruvkaError::LockPoisoned`] when a worker panicked while
    /// holding the lock, and [`BoruvkaError::InvariantViolation`] for an
    /// unknown id or when a second holder is detected.
    pub fn try_lock(&self, id: ComponentId) -> Result<Option<SlotGuard<'_, C>>> {
        let slot = self.slot(id)?;
        let guard = match slot.cell.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => return Ok(None),
            Err(TryLockError::Poisoned(_)) => {
                return Err(BoruvkaError::LockPoisoned {
                    resource: "component slot",
                });
            }
        };

        let previous = slot.holders.fetch_add(1, Ordering::AcqRel);
        let guard = SlotGuard { slot, guard };
        if previous != 0 {
            return Err(BoruvkaError::InvariantViolation {
                invariant: "a component lock has at most one holder",
                component: id.get(),
            });
        }
        Ok(Some(guard))
    }

    /// Consumes the arena and returns the components in id order.
    ///
    /// # Errors
    ///
    /// Returns [`BoruvkaError::LockPoisoned`] if any slot is poisoned.
    pub fn into_components(self) -> Result<Vec<C>> {
        self.slots
            .into_iter()
            .map(|slot| {
                slot.cell.into_inner().map_err(|_| BoruvkaError::LockPoisoned {
                    resource: "component slot",
                })
            })
            .collect()
    }
}

impl ComponentArena<Supernode> {
    /// Builds one singleton supernode per input node and lists every
    /// non-loop edge under both of its endpoints.
    ///
    /// Returns the arena together with a work queue holding every component.
    ///
    /// # Errors
    ///
    /// Propagates [`InputGraph::validate`] failures.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{ComponentArena, InputGraph, WeightedEdge};
    ///
    /// let graph = InputGraph::new(2, vec![WeightedEdge::new(0, 1, 5.0)]);
    /// let (arena, queue) = ComponentArena::from_graph(&graph)?;
    /// assert_eq!(arena.len(), 2);
    /// assert_eq!(queue.len(), 2);
    /// # Ok::<(), boruvka_core::BoruvkaError>(())
    /// ```
    pub fn from_graph(graph: &InputGraph) -> Result<(Self, WorkQueue)> {
        let components = singletons_from_graph(graph)?;
        let queue = components.iter().map(Contraction::id).collect();
        Ok((Self::from_components(components)?, queue))
    }
}

/// Builds singleton supernodes for `graph`, with edges inserted under both
/// endpoints.
pub(crate) fn singletons_from_graph(graph: &InputGraph) -> Result<Vec<Supernode>> {
    let edges = graph.to_edges()?;
    let mut components: Vec<Supernode> = (0..graph.node_count())
        .map(|index| Supernode::new(ComponentId::new(index)))
        .collect();

    for edge in edges {
        let edge = Arc::new(edge);
        let (a, b) = edge.origin();
        for endpoint in [a, b] {
            let component = components.get_mut(endpoint.get()).ok_or(
                BoruvkaError::InvalidNodeId {
                    node: endpoint.get(),
                    node_count: graph.node_count(),
                },
            )?;
            component.insert_edge(Arc::clone(&edge));
        }
    }

    Ok(components)
}
