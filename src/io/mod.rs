//! Dump helpers for history graphs.
//!
//! Both dumpers walk the graph through its insertion-ordered iterator, so
//! node numbering in the output matches [`NodeId`](crate::history::NodeId).

pub mod dot;
pub mod snapshot;

pub use dot::{DotOptions, DotWriter};
pub use snapshot::{HistorySnapshot, SnapshotNode};
