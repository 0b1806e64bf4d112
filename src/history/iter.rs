//! Insertion-ordered traversal over a history graph.

use std::iter::FusedIterator;

use super::graph::HistoryGraph;
use super::node::HistoryNode;
use super::node_id::NodeId;
use crate::topology::identity::Identified;

/// Yields `(index, node, reference)` for every node, 1-based, in the order the
/// nodes were first created.
///
/// The iterator borrows the graph, so the graph cannot change underneath it.
/// Calling [`HistoryGraph::iter`] again restarts from index 1.
#[derive(Clone)]
pub struct Iter<'a, S: Identified> {
    graph: &'a HistoryGraph<S>,
    next: usize,
    end: usize,
}

impl<'a, S: Identified + Clone> Iter<'a, S> {
    pub(crate) fn new(graph: &'a HistoryGraph<S>) -> Self {
        Self {
            graph,
            next: 0,
            end: graph.node_count(),
        }
    }
}

impl<'a, S: Identified + Clone> Iterator for Iter<'a, S> {
    type Item = (NodeId, &'a HistoryNode<S>, &'a S);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let id = NodeId::from_slot(self.next);
        self.next += 1;
        let node = self.graph.node(id);
        Some((id, node, node.shape()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }
}

impl<S: Identified + Clone> ExactSizeIterator for Iter<'_, S> {}

impl<S: Identified + Clone> FusedIterator for Iter<'_, S> {}
