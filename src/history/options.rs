//! Run-time configuration of a history graph.

/// Defaults applied by the short-form mutation calls
/// ([`add_modified`](super::HistoryGraph::add_modified) and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryOptions {
    /// Create the subject node when it has never been mentioned.
    pub create_missing: bool,
    /// Operation id recorded on nodes created by short-form calls.
    pub default_op: i32,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            create_missing: true,
            default_op: 0,
        }
    }
}

impl HistoryOptions {
    /// Options for a single editing operation with id `op`.
    pub fn for_op(op: i32) -> Self {
        Self {
            default_op: op,
            ..Self::default()
        }
    }

    /// Only record lineage for subjects that are already known.
    pub fn strict() -> Self {
        Self {
            create_missing: false,
            ..Self::default()
        }
    }
}
