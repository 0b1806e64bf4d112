//! Folding one history graph into another.
//!
//! Parallel editing algorithms give each worker a private graph and merge the
//! results afterwards under a single writer. [`HistoryGraph::absorb`] replays
//! another graph's records into `self` and is all-or-nothing.

use super::graph::HistoryGraph;
use super::node::EdgeKind;
use super::node_id::NodeId;
use crate::debug_invariants::DebugInvariants;
use crate::history_error::HistoryError;
use crate::topology::identity::Identified;

impl<S: Identified + Clone> HistoryGraph<S> {
    /// Replay every node and edge of `other` into `self`.
    ///
    /// - nodes are matched by identity key; unmatched ones are appended in
    ///   `other`'s order with `other`'s op ids,
    /// - a node stays a root only if it is a root on both sides,
    /// - edges are appended in `other`'s order, skipping ones already present,
    /// - deleted flags are OR-ed, after all edges are in.
    ///
    /// # Errors
    /// [`HistoryError::DeletedSubject`] if `other` adds a new edge out of a
    /// node that `self` has retired (edges `self` already holds are fine), [`HistoryError::CycleDetected`] if an edge would close a
    /// cycle. `self` is unchanged on error.
    pub fn absorb(&mut self, other: &HistoryGraph<S>) -> Result<(), HistoryError> {
        let mut merged = self.clone();
        let mut remap: Vec<NodeId> = Vec::with_capacity(other.node_count());

        for (oid, key, onode) in other.store.entries() {
            let other_root = other.store.is_root(oid);
            let id = match merged.store.find_by_key(key) {
                Some(id) => {
                    if !other_root {
                        merged.store.unmark_root(id);
                    }
                    id
                }
                None if other_root => {
                    let Some(id) = merged
                        .store
                        .find_or_create_node(onode.shape(), onode.op(), true)
                    else {
                        return Err(HistoryError::MissingSubject);
                    };
                    id
                }
                None => merged.store.make_child_node(onode.shape(), onode.op()),
            };
            remap.push(id);
        }

        for (oid, _, onode) in other.store.entries() {
            let subject = remap[oid.slot()];
            let edges = onode
                .modified()
                .iter()
                .map(|&c| (EdgeKind::Modified, c))
                .chain(onode.generated().iter().map(|&c| (EdgeKind::Generated, c)));
            for (kind, child) in edges {
                let target = remap[child.slot()];
                let node = merged.store.node(subject);
                if node.has_edge(kind, target) {
                    continue;
                }
                if node.is_deleted() {
                    return Err(HistoryError::DeletedSubject {
                        index: subject.get(),
                    });
                }
                if merged.reaches(target, subject) {
                    return Err(HistoryError::CycleDetected {
                        from: subject.get(),
                        to: target.get(),
                    });
                }
                merged.store.node_mut(subject).link(kind, target);
            }
        }

        for (oid, _, onode) in other.store.entries() {
            if onode.is_deleted() {
                merged.store.node_mut(remap[oid.slot()]).deleted = true;
            }
        }

        crate::debug_invariants!(merged.validate_invariants(), "absorb");
        log::debug!(
            "history: absorbed {} nodes ({} -> {})",
            other.node_count(),
            self.node_count(),
            merged.node_count()
        );
        *self = merged;
        Ok(())
    }
}
