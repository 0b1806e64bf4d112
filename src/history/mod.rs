//! Topological-modification history.
//!
//! A [`HistoryGraph`] records, across a sequence of shape-editing operations,
//! how each sub-shape was carried forward (`modified`), what new sub-shapes it
//! produced (`generated`), and whether it was retired (`deleted`).
//!
//! - [`NodeStore`]: arena of [`HistoryNode`]s keyed by partner identity, plus the root set
//! - [`HistoryGraph`]: fallible mutation API and one-step query API
//! - [`Iter`]: insertion-ordered `(index, node, reference)` traversal
//! - [`SharedHistory`]: mutex-serialized writers
//!
//! # Example
//! ```rust
//! use topo_history::history::HistoryGraph;
//! use topo_history::topology::{Shape, ShapeKind};
//!
//! let f1 = Shape::tagged(ShapeKind::Face, "F1");
//! let f2 = Shape::tagged(ShapeKind::Face, "F2");
//! let f3 = Shape::tagged(ShapeKind::Face, "F3");
//!
//! let mut history = HistoryGraph::new();
//! assert!(history.add_modified_with(&f1, &f2, true, 1));
//! assert!(history.add_generated_with(&f1, &f3, true, 1));
//! assert!(history.set_deleted_with(&f2, true, 2));
//!
//! assert!(!history.is_active(&f1));
//! assert!(!history.is_active(&f2));
//! assert!(history.is_active(&f3));
//! // Partners resolve to the same node.
//! assert!(history.is_modified(&f1.reversed()));
//! ```

pub mod graph;
pub mod iter;
pub mod merge;
pub mod node;
pub mod node_id;
pub mod options;
pub mod shared;
pub mod store;

pub use graph::HistoryGraph;
pub use iter::Iter;
pub use node::{EdgeKind, HistoryNode};
pub use node_id::NodeId;
pub use options::HistoryOptions;
pub use shared::SharedHistory;
pub use store::NodeStore;

#[cfg(test)]
mod tests;
