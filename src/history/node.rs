//! History node: one record per logical topological entity.

use super::node_id::NodeId;

/// Lineage record for one entity.
///
/// Children are stored as [`NodeId`]s into the owning graph's arena; a node
/// never owns its children, so a child reachable from several parents is torn
/// down exactly once, together with the arena.
#[derive(Clone, Debug)]
pub struct HistoryNode<S> {
    pub(crate) op: i32,
    pub(crate) shape: S,
    pub(crate) generated: Vec<NodeId>,
    pub(crate) modified: Vec<NodeId>,
    pub(crate) deleted: bool,
}

impl<S> HistoryNode<S> {
    pub(crate) fn new(shape: S, op: i32) -> Self {
        Self {
            op,
            shape,
            generated: Vec::new(),
            modified: Vec::new(),
            deleted: false,
        }
    }

    /// Id of the editing operation that first recorded this entity.
    #[inline]
    pub fn op(&self) -> i32 {
        self.op
    }

    /// The reference this node was created from (its first mention).
    #[inline]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Entities created from this one, in recording order.
    #[inline]
    pub fn generated(&self) -> &[NodeId] {
        &self.generated
    }

    /// Entities that replace this one, in recording order.
    #[inline]
    pub fn modified(&self) -> &[NodeId] {
        &self.modified
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Whether the node has any outgoing lineage edge.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.generated.is_empty() || !self.modified.is_empty()
    }

    /// A surviving, unsuperseded leaf. Derived from the edge lists and the
    /// deleted flag; there is no separately maintained state.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.deleted && !self.has_children()
    }

    /// All children, `modified` first, then `generated`.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.modified.iter().chain(self.generated.iter()).copied()
    }

    /// Whether `child` is already in the list selected by `kind`.
    pub(crate) fn has_edge(&self, kind: EdgeKind, child: NodeId) -> bool {
        match kind {
            EdgeKind::Modified => self.modified.contains(&child),
            EdgeKind::Generated => self.generated.contains(&child),
        }
    }

    /// Append `child` to the list selected by `kind` unless already present.
    /// Returns whether an edge was added.
    pub(crate) fn link(&mut self, kind: EdgeKind, child: NodeId) -> bool {
        let list = match kind {
            EdgeKind::Modified => &mut self.modified,
            EdgeKind::Generated => &mut self.generated,
        };
        if list.contains(&child) {
            return false;
        }
        list.push(child);
        true
    }
}

/// Which of the two lineage relations an edge records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EdgeKind {
    /// The child replaces the parent in the same role.
    Modified,
    /// The child is new geometry created from the parent.
    Generated,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Modified => "modified",
            EdgeKind::Generated => "generated",
        }
    }
}
