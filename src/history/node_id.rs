//! `NodeId`: a strong, zero-cost handle for history nodes
//!
//! Nodes live in an insertion-ordered arena. A `NodeId` is the node's 1-based
//! position in that arena, which is also the index reported by the graph
//! iterator. `NodeId` wraps a `NonZeroUsize`, reserving 0 as invalid, so
//! `Option<NodeId>` costs nothing extra.
//!
//! Nodes are never removed individually, so a `NodeId` stays valid for the
//! lifetime of the graph that issued it (until [`clear`](super::HistoryGraph::clear)).

use std::{fmt, num::NonZeroUsize};

use crate::history_error::HistoryError;

#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Creates a `NodeId` from a 1-based index.
    ///
    /// # Errors
    /// Returns [`HistoryError::InvalidNodeId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use topo_history::history::NodeId;
    /// let n = NodeId::new(1).unwrap();
    /// assert_eq!(n.get(), 1);
    /// assert!(NodeId::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: usize) -> Result<Self, HistoryError> {
        NonZeroUsize::new(raw)
            .map(NodeId)
            .ok_or(HistoryError::InvalidNodeId)
    }

    /// Handle for the arena slot at 0-based `pos`.
    #[inline]
    pub(crate) fn from_slot(pos: usize) -> Self {
        NodeId(NonZeroUsize::MIN.saturating_add(pos))
    }

    /// The 1-based index.
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based arena slot.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.get()).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.get())
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(NodeId, usize);
    assert_eq_size!(Option<NodeId>, usize);
    assert_eq_align!(NodeId, usize);
}
