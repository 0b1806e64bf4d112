//! Node store: insertion-ordered arena of history nodes keyed by identity.
//!
//! The store is the single owner of every [`HistoryNode`]. Nodes are filed under
//! the identity key of the reference that first mentioned them, and their
//! position in the arena (1-based, see [`NodeId`]) is fixed at insertion.
//! The separate root set records the nodes that were first mentioned as a
//! "before"/subject endpoint rather than as the result of an operation.

use indexmap::{IndexMap, IndexSet};

use super::node::HistoryNode;
use super::node_id::NodeId;
use crate::history_error::HistoryError;
use crate::topology::identity::Identified;

#[derive(Clone, Debug)]
pub struct NodeStore<S: Identified> {
    nodes: IndexMap<S::Key, HistoryNode<S>>,
    roots: IndexSet<NodeId>,
}

impl<S: Identified> Default for NodeStore<S> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
            roots: IndexSet::new(),
        }
    }
}

impl<S: Identified> NodeStore<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup only.
    #[inline]
    pub fn find_node(&self, shape: &S) -> Option<NodeId> {
        self.find_by_key(&shape.identity_key())
    }

    #[inline]
    pub fn find_by_key(&self, key: &S::Key) -> Option<NodeId> {
        self.nodes.get_index_of(key).map(NodeId::from_slot)
    }

    /// Return the node for `shape`, allocating it as a root when absent and
    /// `create` is set.
    pub fn find_or_create_node(&mut self, shape: &S, op: i32, create: bool) -> Option<NodeId>
    where
        S: Clone,
    {
        let key = shape.identity_key();
        if let Some(id) = self.find_by_key(&key) {
            return Some(id);
        }
        if !create {
            return None;
        }
        let id = self.insert_new(key, shape.clone(), op);
        self.roots.insert(id);
        Some(id)
    }

    /// Allocate a node for an "after"/"created" endpoint. It never enters the
    /// root set. If a partner is already filed, that node is returned and,
    /// being about to receive an incoming edge, leaves the root set.
    pub fn make_child_node(&mut self, shape: &S, op: i32) -> NodeId
    where
        S: Clone,
    {
        let key = shape.identity_key();
        match self.find_by_key(&key) {
            Some(id) => {
                self.roots.shift_remove(&id);
                id
            }
            None => self.insert_new(key, shape.clone(), op),
        }
    }

    fn insert_new(&mut self, key: S::Key, shape: S, op: i32) -> NodeId {
        let (slot, _) = self.nodes.insert_full(key, HistoryNode::new(shape, op));
        NodeId::from_slot(slot)
    }

    /// Positional access, 1-based through [`NodeId`].
    ///
    /// Ids are only minted by this store, so a foreign id is the caller's bug;
    /// use [`NodeStore::try_node`] for ids of unknown provenance.
    #[inline]
    pub fn node(&self, id: NodeId) -> &HistoryNode<S> {
        &self.nodes[id.slot()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut HistoryNode<S> {
        &mut self.nodes[id.slot()]
    }

    pub fn try_node(&self, id: NodeId) -> Result<&HistoryNode<S>, HistoryError> {
        self.nodes
            .get_index(id.slot())
            .map(|(_, n)| n)
            .ok_or(HistoryError::NodeOutOfRange {
                index: id.get(),
                len: self.nodes.len(),
            })
    }

    /// Key the node at `id` is filed under.
    pub fn key_of(&self, id: NodeId) -> Option<&S::Key> {
        self.nodes.get_index(id.slot()).map(|(k, _)| k)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn is_root(&self, id: NodeId) -> bool {
        self.roots.contains(&id)
    }

    /// Root ids in the order they were registered.
    pub fn roots(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.roots.iter().copied()
    }

    pub(crate) fn unmark_root(&mut self, id: NodeId) {
        self.roots.shift_remove(&id);
    }

    /// `(id, key, node)` in insertion order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (NodeId, &S::Key, &HistoryNode<S>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(slot, (k, n))| (NodeId::from_slot(slot), k, n))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }
}
