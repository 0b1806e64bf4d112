#![cfg_attr(docsrs, feature(doc_cfg))]
//! # topo-history
//!
//! topo-history records the lineage of topological entities (faces, edges,
//! vertices, ...) across a sequence of BREP editing operations. Editing
//! algorithms report, one step at a time, which sub-shapes they carried
//! forward, split, merged, created, or destroyed; naming, feature-tracking and
//! visualization layers then query that record to re-map stored identifiers
//! onto the current model.
//!
//! ## Features
//! - Partner-level identity: references that differ only by placement or
//!   orientation resolve to one history node
//! - Arena-backed DAG: children are indices, so shared children are never
//!   double-owned
//! - Fallible, all-or-nothing mutations with a boolean or `Result` surface
//! - One-step queries on the graph, multi-hop lineage in [`algs::lineage`]
//! - Graphviz and serde snapshot dumps
//!
//! ## Concurrency
//!
//! [`history::HistoryGraph`] is a plain single-writer structure. Parallel
//! producers either record into private graphs merged with
//! [`history::HistoryGraph::absorb`], or share one graph through
//! [`history::SharedHistory`].
//!
//! ## Invariant checks
//! Every mutation re-validates the graph under `debug_assertions`; enable the
//! `strict-invariants` or `check-invariants` feature to keep the checks in
//! release builds.

pub mod algs;
pub mod debug_invariants;
pub mod history;
pub mod history_error;
pub mod io;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::lineage::{LineageBuilder, ancestors, descendants, last_images};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::history::{
        EdgeKind, HistoryGraph, HistoryNode, HistoryOptions, NodeId, SharedHistory,
    };
    pub use crate::history_error::HistoryError;
    pub use crate::io::{DotOptions, DotWriter, HistorySnapshot};
    pub use crate::topology::{
        Identified, Location, Orientation, Shape, ShapeKey, ShapeKind,
    };
}
