//! Shared queue of components awaiting a merge attempt.

use crossbeam::queue::SegQueue;

use crate::graph::ComponentId;

/// Lock-free multi-producer, multi-consumer queue of component ids.
///
/// Entries may go stale while queued (their component gets absorbed); the
/// engine discards those when it pops them.
///
/// # Examples
/// ```
/// use boruvka_core::{ComponentId, WorkQueue};
///
/// let queue: WorkQueue = (0..3).map(ComponentId::new).collect();
/// assert_eq!(queue.pop(), Some(ComponentId::new(0)));
/// queue.push(ComponentId::new(0));
/// assert_eq!(queue.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct WorkQueue {
    inner: SegQueue<ComponentId>,
}

impl WorkQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SegQueue::new(),
        }
    }

    /// Appends `id` to the back of the queue.
    pub fn push(&self, id: ComponentId) {
        self.inner.push(id);
    }

    /// Removes the id at the front of the queue, if any.
    pub fn pop(&self) -> Option<ComponentId> {
        self.inner.pop()
    }

    /// Returns the number of queued ids. Only a snapshot under concurrency.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<ComponentId> for WorkQueue {
    fn from_iter<I: IntoIterator<Item = ComponentId>>(iter: I) -> Self {
        let queue = Self::new();
        for id in iter {
            queue.push(id);
        }
        queue
    }
}
