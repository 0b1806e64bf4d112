//! HistoryError: Unified error type for topo-history public APIs
//!
//! Mutations on the history graph never panic. The fallible `try_*` entry points
//! report why a record was refused through this type; the boolean entry points
//! collapse it to `false`.

use thiserror::Error;

/// Unified error type for history graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Attempted to construct a NodeId with a zero value (indices are 1-based).
    #[error("NodeId must be non-zero (indices are 1-based)")]
    InvalidNodeId,
    /// The subject of a mutation has no node and creation was disallowed.
    #[error("no history node for subject and creation is disabled")]
    MissingSubject,
    /// The subject of a mutation is already retired.
    #[error("history node #{index} is deleted and cannot take new lineage")]
    DeletedSubject { index: usize },
    /// "Before" and "after" are partners: the entity would succeed itself.
    #[error("an entity cannot be recorded as its own successor")]
    SelfLineage,
    /// The "after" endpoint already exists and reaches the "before" node.
    #[error("lineage #{from} -> #{to} would close a cycle")]
    CycleDetected { from: usize, to: usize },
    /// A positional index past the end of the node store.
    #[error("node index {index} out of range (store holds {len} nodes)")]
    NodeOutOfRange { index: usize, len: usize },
    /// A child edge references a node that is not in the store.
    #[error("node #{parent} references missing child #{child}")]
    DanglingChild { parent: usize, child: usize },
    /// A node registered as a root has an incoming edge.
    #[error("root node #{index} has an incoming lineage edge")]
    RootWithParent { index: usize },
    /// A non-root node has no incoming edge.
    #[error("node #{index} is neither a root nor the target of any edge")]
    OrphanNode { index: usize },
    /// The key a node is filed under disagrees with its reference's identity.
    #[error("node #{index} is filed under a key that differs from its reference identity")]
    KeyMismatch { index: usize },
    /// I/O failure while dumping the graph.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Io(e.to_string())
    }
}
