//! Externally serialized access to one history graph.
//!
//! [`HistoryGraph`] has no interior locking. When several workers must record
//! into the same graph, wrap it in [`SharedHistory`]: every mutation takes the
//! lock for its whole duration, so each call stays all-or-nothing.

use parking_lot::Mutex;

use super::graph::HistoryGraph;
use super::options::HistoryOptions;
use crate::history_error::HistoryError;
use crate::topology::identity::Identified;
use crate::topology::shape::Shape;

#[derive(Debug)]
pub struct SharedHistory<S: Identified = Shape> {
    inner: Mutex<HistoryGraph<S>>,
}

impl<S: Identified + Clone> Default for SharedHistory<S> {
    fn default() -> Self {
        Self::new(HistoryGraph::default())
    }
}

impl<S: Identified + Clone> SharedHistory<S> {
    pub fn new(graph: HistoryGraph<S>) -> Self {
        Self {
            inner: Mutex::new(graph),
        }
    }

    pub fn with_options(options: HistoryOptions) -> Self {
        Self::new(HistoryGraph::with_options(options))
    }

    pub fn add_modified_with(&self, before: &S, after: &S, create: bool, op: i32) -> bool {
        self.inner.lock().add_modified_with(before, after, create, op)
    }

    pub fn add_generated_with(&self, source: &S, creation: &S, create: bool, op: i32) -> bool {
        self.inner
            .lock()
            .add_generated_with(source, creation, create, op)
    }

    pub fn set_deleted_with(&self, shape: &S, create: bool, op: i32) -> bool {
        self.inner.lock().set_deleted_with(shape, create, op)
    }

    pub fn add_modified(&self, before: &S, after: &S) -> bool {
        self.inner.lock().add_modified(before, after)
    }

    pub fn add_generated(&self, source: &S, creation: &S) -> bool {
        self.inner.lock().add_generated(source, creation)
    }

    pub fn set_deleted(&self, shape: &S) -> bool {
        self.inner.lock().set_deleted(shape)
    }

    /// Merge a worker's private graph under the lock.
    pub fn absorb(&self, other: &HistoryGraph<S>) -> Result<(), HistoryError> {
        self.inner.lock().absorb(other)
    }

    /// Run a read-only closure against the graph while holding the lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&HistoryGraph<S>) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn into_inner(self) -> HistoryGraph<S> {
        self.inner.into_inner()
    }
}
