//! The history graph: mutation and one-step query API.
//!
//! Editing algorithms report each direct before→after relationship as they
//! apply it ([`HistoryGraph::add_modified`], [`HistoryGraph::add_generated`],
//! [`HistoryGraph::set_deleted`]). Downstream consumers then ask one-step
//! questions about any reference ([`HistoryGraph::get_modified`],
//! [`HistoryGraph::is_active`], ...). Multi-hop traversal lives in
//! [`crate::algs::lineage`].
//!
//! Every mutation either fully applies or leaves the graph untouched.

use hashbrown::HashSet;

use super::iter::Iter;
use super::node::{EdgeKind, HistoryNode};
use super::node_id::NodeId;
use super::options::HistoryOptions;
use super::store::NodeStore;
use crate::debug_invariants::DebugInvariants;
use crate::history_error::HistoryError;
use crate::topology::identity::Identified;
use crate::topology::shape::Shape;

/// Provenance DAG over topological entities.
///
/// # Type Parameters
/// - `S`: the topological reference type. Nodes are resolved through
///   [`Identified::identity_key`], so partners share a node. Defaults to [`Shape`].
#[derive(Clone, Debug)]
pub struct HistoryGraph<S: Identified = Shape> {
    pub(crate) store: NodeStore<S>,
    options: HistoryOptions,
}

impl<S: Identified + Clone> Default for HistoryGraph<S> {
    fn default() -> Self {
        Self::with_options(HistoryOptions::default())
    }
}

impl<S: Identified + Clone> HistoryGraph<S> {
    /// Creates an empty graph with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: HistoryOptions) -> Self {
        Self {
            store: NodeStore::new(),
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> HistoryOptions {
        self.options
    }

    pub fn set_options(&mut self, options: HistoryOptions) {
        self.options = options;
    }

    /// Read access to the underlying node store.
    #[inline]
    pub fn store(&self) -> &NodeStore<S> {
        &self.store
    }

    // ------------------------------------------------------------------
    // Node access
    // ------------------------------------------------------------------

    #[inline]
    pub fn find_node(&self, shape: &S) -> Option<NodeId> {
        self.store.find_node(shape)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &HistoryNode<S> {
        self.store.node(id)
    }

    #[inline]
    pub fn try_node(&self, id: NodeId) -> Result<&HistoryNode<S>, HistoryError> {
        self.store.try_node(id)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Root ids in registration order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.store.roots().collect()
    }

    /// Whether `shape` has a node that was never the result of a mutation.
    pub fn is_root(&self, shape: &S) -> bool {
        self.find_node(shape).is_some_and(|id| self.store.is_root(id))
    }

    /// Ids of nodes first recorded by operation `op`, in insertion order.
    pub fn nodes_by_op(&self, op: i32) -> Vec<NodeId> {
        self.store
            .entries()
            .filter(|(_, _, n)| n.op() == op)
            .map(|(id, _, _)| id)
            .collect()
    }

    /// Direct predecessors of `shape` with the relation that links them.
    ///
    /// Edges are stored parent→child only, so this scans the store.
    pub fn parents_of(&self, shape: &S) -> Vec<(NodeId, EdgeKind)> {
        let Some(target) = self.find_node(shape) else {
            return Vec::new();
        };
        let mut parents = Vec::new();
        for (id, _, node) in self.store.entries() {
            if node.modified().contains(&target) {
                parents.push((id, EdgeKind::Modified));
            }
            if node.generated().contains(&target) {
                parents.push((id, EdgeKind::Generated));
            }
        }
        parents
    }

    /// Insertion-ordered traversal of `(index, node, reference)`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(self)
    }

    /// Drop every node; options are kept.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // ------------------------------------------------------------------
    // Mutation API
    // ------------------------------------------------------------------

    /// Record that `before` was replaced by `after`, using the graph's options.
    pub fn add_modified(&mut self, before: &S, after: &S) -> bool {
        let HistoryOptions {
            create_missing,
            default_op,
        } = self.options;
        self.add_modified_with(before, after, create_missing, default_op)
    }

    pub fn add_modified_with(&mut self, before: &S, after: &S, create: bool, op: i32) -> bool {
        report(
            "add_modified",
            self.try_add_modified_with(before, after, create, op),
        )
    }

    /// Record that `creation` was generated from `source`, using the graph's options.
    pub fn add_generated(&mut self, source: &S, creation: &S) -> bool {
        let HistoryOptions {
            create_missing,
            default_op,
        } = self.options;
        self.add_generated_with(source, creation, create_missing, default_op)
    }

    pub fn add_generated_with(&mut self, source: &S, creation: &S, create: bool, op: i32) -> bool {
        report(
            "add_generated",
            self.try_add_generated_with(source, creation, create, op),
        )
    }

    /// Retire `shape` with no replacement, using the graph's options.
    pub fn set_deleted(&mut self, shape: &S) -> bool {
        let HistoryOptions {
            create_missing,
            default_op,
        } = self.options;
        self.set_deleted_with(shape, create_missing, default_op)
    }

    pub fn set_deleted_with(&mut self, shape: &S, create: bool, op: i32) -> bool {
        report("set_deleted", self.try_set_deleted_with(shape, create, op))
    }

    /// Fallible form of [`HistoryGraph::add_modified_with`]; returns the `after` node.
    pub fn try_add_modified_with(
        &mut self,
        before: &S,
        after: &S,
        create: bool,
        op: i32,
    ) -> Result<NodeId, HistoryError> {
        self.try_link(EdgeKind::Modified, before, after, create, op)
    }

    /// Fallible form of [`HistoryGraph::add_generated_with`]; returns the created node.
    pub fn try_add_generated_with(
        &mut self,
        source: &S,
        creation: &S,
        create: bool,
        op: i32,
    ) -> Result<NodeId, HistoryError> {
        self.try_link(EdgeKind::Generated, source, creation, create, op)
    }

    /// Fallible form of [`HistoryGraph::set_deleted_with`]; returns the retired node.
    ///
    /// Retiring an already retired node succeeds. Earlier edges out of the node
    /// are kept: the flag marks the node as the terminal record of its branch.
    pub fn try_set_deleted_with(
        &mut self,
        shape: &S,
        create: bool,
        op: i32,
    ) -> Result<NodeId, HistoryError> {
        let Some(id) = self.store.find_or_create_node(shape, op, create) else {
            return Err(HistoryError::MissingSubject);
        };
        self.store.node_mut(id).deleted = true;
        log::trace!("history: {id} deleted (op {op})");
        crate::debug_invariants!(self.validate_invariants(), "set_deleted");
        Ok(id)
    }

    fn try_link(
        &mut self,
        kind: EdgeKind,
        before: &S,
        after: &S,
        create: bool,
        op: i32,
    ) -> Result<NodeId, HistoryError> {
        let before_key = before.identity_key();
        let subject = self.store.find_by_key(&before_key);

        // Everything that can fail is decided before the store is touched.
        match subject {
            None if !create => return Err(HistoryError::MissingSubject),
            Some(id) if self.store.node(id).is_deleted() => {
                return Err(HistoryError::DeletedSubject { index: id.get() });
            }
            _ => {}
        }
        let after_key = after.identity_key();
        if after_key == before_key {
            return Err(HistoryError::SelfLineage);
        }
        if let (Some(from), Some(to)) = (subject, self.store.find_by_key(&after_key)) {
            if self.reaches(to, from) {
                return Err(HistoryError::CycleDetected {
                    from: from.get(),
                    to: to.get(),
                });
            }
        }

        let Some(subject) = self.store.find_or_create_node(before, op, create) else {
            return Err(HistoryError::MissingSubject);
        };
        let target = self.store.make_child_node(after, op);
        if self.store.node_mut(subject).link(kind, target) {
            log::trace!("history: {subject} -{}-> {target} (op {op})", kind.as_str());
        }
        crate::debug_invariants!(self.validate_invariants(), "link");
        Ok(target)
    }

    /// Whether `to` is reachable from `from` along child edges (`from == to` counts).
    pub(crate) fn reaches(&self, from: NodeId, to: NodeId) -> bool {
        let mut seen = HashSet::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if id == to {
                return true;
            }
            if seen.insert(id) {
                stack.extend(self.store.node(id).children());
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Query API (one step, never transitive)
    // ------------------------------------------------------------------

    /// Append the direct successors of `shape` to `out`.
    ///
    /// Returns `!out.is_empty()`. A never-seen `shape` leaves `out` unchanged
    /// and returns `false`.
    pub fn get_modified(&self, shape: &S, out: &mut Vec<S>) -> bool {
        self.collect_children(shape, EdgeKind::Modified, out)
    }

    /// Append the entities generated from `shape` to `out`.
    ///
    /// Same contract as [`HistoryGraph::get_modified`].
    pub fn get_generated(&self, shape: &S, out: &mut Vec<S>) -> bool {
        self.collect_children(shape, EdgeKind::Generated, out)
    }

    /// Owned convenience form of [`HistoryGraph::get_modified`].
    pub fn modified_of(&self, shape: &S) -> Vec<S> {
        let mut out = Vec::new();
        self.get_modified(shape, &mut out);
        out
    }

    /// Owned convenience form of [`HistoryGraph::get_generated`].
    pub fn generated_of(&self, shape: &S) -> Vec<S> {
        let mut out = Vec::new();
        self.get_generated(shape, &mut out);
        out
    }

    fn collect_children(&self, shape: &S, kind: EdgeKind, out: &mut Vec<S>) -> bool {
        let Some(id) = self.find_node(shape) else {
            return false;
        };
        let node = self.store.node(id);
        let children = match kind {
            EdgeKind::Modified => node.modified(),
            EdgeKind::Generated => node.generated(),
        };
        out.extend(children.iter().map(|&c| self.store.node(c).shape().clone()));
        !out.is_empty()
    }

    pub fn is_modified(&self, shape: &S) -> bool {
        self.with_node(shape, |n| !n.modified().is_empty())
    }

    pub fn has_generated(&self, shape: &S) -> bool {
        self.with_node(shape, |n| !n.generated().is_empty())
    }

    /// `false` for never-seen references: the recorded operations did not delete them.
    pub fn is_deleted(&self, shape: &S) -> bool {
        self.with_node(shape, HistoryNode::is_deleted)
    }

    /// A recorded, surviving, unsuperseded leaf. `false` for never-seen references.
    pub fn is_active(&self, shape: &S) -> bool {
        self.with_node(shape, HistoryNode::is_active)
    }

    #[inline]
    fn with_node(&self, shape: &S, f: impl FnOnce(&HistoryNode<S>) -> bool) -> bool {
        self.find_node(shape).is_some_and(|id| f(self.store.node(id)))
    }
}

fn report(what: &str, result: Result<NodeId, HistoryError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log::debug!("history: {what} rejected: {e}");
            false
        }
    }
}

impl<'a, S: Identified + Clone> IntoIterator for &'a HistoryGraph<S> {
    type Item = (NodeId, &'a HistoryNode<S>, &'a S);
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Identified + Clone> DebugInvariants for HistoryGraph<S> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "HistoryGraph");
    }

    /// Checks, in order: keys agree with node identities, child ids are in
    /// range and not self edges, root membership matches incoming edges, and
    /// the whole graph is acyclic.
    fn validate_invariants(&self) -> Result<(), HistoryError> {
        let len = self.store.node_count();
        let mut in_degree = vec![0usize; len];

        for (id, key, node) in self.store.entries() {
            if node.shape().identity_key() != *key {
                return Err(HistoryError::KeyMismatch { index: id.get() });
            }
            for child in node.children() {
                if child.slot() >= len {
                    return Err(HistoryError::DanglingChild {
                        parent: id.get(),
                        child: child.get(),
                    });
                }
                if child == id {
                    return Err(HistoryError::CycleDetected {
                        from: id.get(),
                        to: id.get(),
                    });
                }
                in_degree[child.slot()] += 1;
            }
        }

        for root in self.store.roots() {
            if root.slot() >= len {
                return Err(HistoryError::NodeOutOfRange {
                    index: root.get(),
                    len,
                });
            }
        }
        for (slot, &deg) in in_degree.iter().enumerate() {
            let id = NodeId::from_slot(slot);
            match (self.store.is_root(id), deg > 0) {
                (true, true) => return Err(HistoryError::RootWithParent { index: id.get() }),
                (false, false) => return Err(HistoryError::OrphanNode { index: id.get() }),
                _ => {}
            }
        }

        // Kahn: anything left with incoming edges sits on a cycle.
        let mut ready: Vec<NodeId> = (0..len)
            .filter(|&s| in_degree[s] == 0)
            .map(NodeId::from_slot)
            .collect();
        let mut visited = 0usize;
        while let Some(id) = ready.pop() {
            visited += 1;
            for child in self.store.node(id).children() {
                in_degree[child.slot()] -= 1;
                if in_degree[child.slot()] == 0 {
                    ready.push(child);
                }
            }
        }
        if visited != len {
            let stuck = in_degree.iter().position(|&d| d > 0).unwrap_or(0);
            let id = NodeId::from_slot(stuck);
            return Err(HistoryError::CycleDetected {
                from: id.get(),
                to: id.get(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{Location, ShapeKind};

    fn face(tag: &str) -> Shape {
        Shape::tagged(ShapeKind::Face, tag)
    }

    #[test]
    fn modified_then_query() {
        let (a, b) = (face("A"), face("B"));
        let mut g = HistoryGraph::new();
        assert!(g.add_modified(&a, &b));
        let got = g.modified_of(&a);
        assert_eq!(got.len(), 1);
        assert!(got[0].is_partner(&b));
        assert!(g.is_modified(&a));
        assert!(!g.is_modified(&b));
        assert!(g.is_root(&a));
        assert!(!g.is_root(&b));
    }

    #[test]
    fn missing_subject_without_create() {
        let (a, b) = (face("A"), face("B"));
        let mut g = HistoryGraph::new();
        assert_eq!(
            g.try_add_modified_with(&a, &b, false, 0),
            Err(HistoryError::MissingSubject)
        );
        assert!(g.is_empty());
    }

    #[test]
    fn deleted_subject_rejects_every_edge_kind() {
        let (a, b, c) = (face("A"), face("B"), face("C"));
        let mut g = HistoryGraph::new();
        assert!(g.set_deleted(&a));
        assert_eq!(
            g.try_add_generated_with(&a, &b, true, 0),
            Err(HistoryError::DeletedSubject { index: 1 })
        );
        assert!(!g.add_modified(&a, &c));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn self_lineage_is_refused() {
        let a = face("A");
        let mut g = HistoryGraph::new();
        let moved = a.moved(&Location::translation(1.0, 0.0, 0.0));
        assert_eq!(
            g.try_add_modified_with(&a, &moved, true, 0),
            Err(HistoryError::SelfLineage)
        );
        assert!(g.is_empty());
    }

    #[test]
    fn closing_a_cycle_is_refused() {
        let (a, b, c) = (face("A"), face("B"), face("C"));
        let mut g = HistoryGraph::new();
        assert!(g.add_modified(&a, &b));
        assert!(g.add_modified(&b, &c));
        assert_eq!(
            g.try_add_generated_with(&c, &a, true, 0),
            Err(HistoryError::CycleDetected { from: 3, to: 1 })
        );
        assert!(g.generated_of(&c).is_empty());
        assert!(g.validate_invariants().is_ok());
    }

    #[test]
    fn shared_child_from_two_parents() {
        let (a, b, m) = (face("A"), face("B"), face("M"));
        let mut g = HistoryGraph::new();
        assert!(g.add_modified(&a, &m));
        assert!(g.add_modified(&b, &m));
        assert_eq!(g.node_count(), 3);
        let parents: Vec<_> = g.parents_of(&m).into_iter().map(|(id, _)| id.get()).collect();
        assert_eq!(parents, vec![1, 3]);
        assert!(g.validate_invariants().is_ok());
    }

    #[test]
    fn repeated_edge_is_recorded_once() {
        let (a, b) = (face("A"), face("B"));
        let mut g = HistoryGraph::new();
        assert!(g.add_modified(&a, &b));
        assert!(g.add_modified(&a, &b.reversed()));
        assert_eq!(g.modified_of(&a).len(), 1);
    }

    #[test]
    fn get_modified_appends_and_reports_out() {
        let (a, b, z) = (face("A"), face("B"), face("Z"));
        let mut g = HistoryGraph::new();
        g.add_modified(&a, &b);
        let mut out = vec![z.clone()];
        assert!(g.get_modified(&a, &mut out));
        assert_eq!(out.len(), 2);
        assert!(out[0].is_partner(&z));
        assert!(out[1].is_partner(&b));

        let mut untouched = vec![z.clone()];
        assert!(!g.get_modified(&face("never"), &mut untouched));
        assert_eq!(untouched.len(), 1);
    }

    #[test]
    fn options_drive_short_form_calls() {
        let (a, b) = (face("A"), face("B"));
        let mut g = HistoryGraph::with_options(HistoryOptions::for_op(7));
        assert!(g.add_generated(&a, &b));
        assert_eq!(g.nodes_by_op(7).len(), 2);

        g.set_options(HistoryOptions::strict());
        assert!(!g.set_deleted(&face("unknown")));
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn deleting_a_parent_keeps_its_edges() {
        let (a, b) = (face("A"), face("B"));
        let mut g = HistoryGraph::new();
        g.add_modified(&a, &b);
        assert!(g.set_deleted(&a));
        assert!(g.is_deleted(&a));
        assert!(g.is_modified(&a));
        assert!(g.set_deleted(&a));
    }

    #[test]
    fn clear_resets_store() {
        let mut g = HistoryGraph::new();
        g.add_modified(&face("A"), &face("B"));
        g.clear();
        assert!(g.is_empty());
        assert!(g.roots().is_empty());
    }
}
