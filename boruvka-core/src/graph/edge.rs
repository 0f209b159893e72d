//! Shared edge records with redirectable endpoints.
//!
//! An [`Edge`] is listed by both of its current endpoint components. When a
//! merge absorbs one endpoint, the absorbing worker rewrites that endpoint in
//! place while it holds both component locks. The other endpoint's worker
//! may concurrently read the endpoints under its own lock, so they are stored
//! as atomics with acquire/release ordering. The weight never changes.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ComponentId, EdgeId};
use crate::error::{BoruvkaError, Result};

/// A weighted connector between two components.
#[derive(Debug)]
pub struct Edge {
    id: EdgeId,
    origin: (ComponentId, ComponentId),
    endpoints: [AtomicUsize; 2],
    weight: f64,
}

impl Edge {
    /// Creates an edge between `a` and `b`.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{ComponentId, Edge, EdgeId};
    ///
    /// let edge = Edge::new(EdgeId::new(0), ComponentId::new(3), ComponentId::new(7), 1.5);
    /// assert_eq!(edge.weight(), 1.5);
    /// assert_eq!(edge.other(ComponentId::new(3))?, ComponentId::new(7));
    /// # Ok::<(), boruvka_core::BoruvkaError>(())
    /// ```
    #[must_use]
    pub fn new(id: EdgeId, a: ComponentId, b: ComponentId, weight: f64) -> Self {
        Self {
            id,
            origin: (a, b),
            endpoints: [AtomicUsize::new(a.get()), AtomicUsize::new(b.get())],
            weight,
        }
    }

    /// Returns the edge's position in the input edge list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the endpoints the edge was created with, before any
    /// redirection.
    #[must_use]
    #[rustfmt::skip]
    pub const fn origin(&self) -> (ComponentId, ComponentId) { self.origin }

    /// Returns the current pair of endpoints.
    #[must_use]
    pub fn endpoints(&self) -> (ComponentId, ComponentId) {
        let [a, b] = &self.endpoints;
        (load_endpoint(a), load_endpoint(b))
    }

    /// Returns the endpoint opposite `from`.
    ///
    /// # Errors
    ///
    /// Returns [`BoruvkaError::InvariantViolation`] when `from` is neither
    /// endpoint. Callers hold `from`'s lock, so this means a merge left a
    /// stale endpoint behind.
    pub fn other(&self, from: ComponentId) -> Result<ComponentId> {
        let (a, b) = self.endpoints();
        if a == from {
            return Ok(b);
        }
        if b == from {
            return Ok(a);
        }
        Err(BoruvkaError::InvariantViolation {
            invariant: "edge endpoint lookup must start from one of its endpoints",
            component: from.get(),
        })
    }

    /// Rewrites every occurrence of `from` among the endpoints to `to`.
    pub fn redirect_endpoint(&self, from: ComponentId, to: ComponentId) {
        for slot in &self.endpoints {
            // A failed exchange means the slot names the other endpoint.
            let _ = slot.compare_exchange(from.get(), to.get(), Ordering::AcqRel, Ordering::Acquire);
        }
    }

    /// Returns `true` when both endpoints lie in `{a, b}`.
    #[must_use]
    pub fn is_internal_to(&self, a: ComponentId, b: ComponentId) -> bool {
        let (left, right) = self.endpoints();
        (left == a || left == b) && (right == a || right == b)
    }
}

fn load_endpoint(slot: &AtomicUsize) -> ComponentId {
    ComponentId::new(slot.load(Ordering::Acquire))
}
