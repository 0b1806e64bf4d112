//! Serializable, index-based snapshot of a history graph.
//!
//! References themselves are not serializable (their definitions live in the
//! modelling kernel), so a snapshot records each node's `Display` label and
//! refers to other nodes by 1-based index. Suitable for JSON or bincode dumps
//! and for diffing two sessions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::history::HistoryGraph;
use crate::topology::identity::Identified;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    /// 1-based position in the node store.
    pub index: usize,
    pub op: i32,
    pub label: String,
    pub modified: Vec<usize>,
    pub generated: Vec<usize>,
    pub deleted: bool,
    pub active: bool,
    pub root: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub nodes: Vec<SnapshotNode>,
}

impl HistorySnapshot {
    pub fn from_graph<S>(graph: &HistoryGraph<S>) -> Self
    where
        S: Identified + Clone + Display,
    {
        let nodes = graph
            .iter()
            .map(|(id, node, shape)| SnapshotNode {
                index: id.get(),
                op: node.op(),
                label: shape.to_string(),
                modified: node.modified().iter().map(|c| c.get()).collect(),
                generated: node.generated().iter().map(|c| c.get()).collect(),
                deleted: node.is_deleted(),
                active: node.is_active(),
                root: graph.store().is_root(id),
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at 1-based `index`.
    pub fn get(&self, index: usize) -> Option<&SnapshotNode> {
        index.checked_sub(1).and_then(|i| self.nodes.get(i))
    }

    /// Labels of the nodes that are active in this snapshot.
    pub fn active_labels(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.active)
            .map(|n| n.label.as_str())
            .collect()
    }
}
