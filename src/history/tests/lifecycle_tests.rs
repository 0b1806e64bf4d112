use crate::debug_invariants::DebugInvariants;
use crate::history::{HistoryGraph, NodeId};
use crate::history_error::HistoryError;
use crate::topology::{Shape, ShapeKind};

fn face(tag: &str) -> Shape {
    Shape::tagged(ShapeKind::Face, tag)
}

#[test]
fn fillet_like_sequence() {
    // op 1 rounds an edge: the two adjacent faces are trimmed, a blend face appears
    let (e, f1, f2) = (
        Shape::tagged(ShapeKind::Edge, "E"),
        face("F1"),
        face("F2"),
    );
    let (f1t, f2t, blend) = (face("F1'"), face("F2'"), face("B"));
    let mut g = HistoryGraph::new();
    assert!(g.add_modified_with(&f1, &f1t, true, 1));
    assert!(g.add_modified_with(&f2, &f2t, true, 1));
    assert!(g.add_generated_with(&e, &blend, true, 1));
    assert!(g.set_deleted_with(&e, true, 1));

    assert!(g.is_deleted(&e));
    assert!(g.has_generated(&e));
    assert!(!g.is_active(&e));
    for s in [&f1t, &f2t, &blend] {
        assert!(g.is_active(s));
    }
    assert_eq!(g.roots(), vec![NodeId::new(1).unwrap(), NodeId::new(3).unwrap(), NodeId::new(5).unwrap()]);
    assert_eq!(g.nodes_by_op(1).len(), 6);
    assert!(g.validate_invariants().is_ok());
}

#[test]
fn deleted_then_more_lineage_is_refused_without_side_effects() {
    let (a, b, c) = (face("A"), face("B"), face("C"));
    let mut g = HistoryGraph::new();
    g.add_modified(&a, &b);
    g.set_deleted(&a);

    let count = g.node_count();
    assert_eq!(
        g.try_add_modified_with(&a, &c, true, 0),
        Err(HistoryError::DeletedSubject { index: 1 })
    );
    assert_eq!(g.node_count(), count);
    assert!(g.find_node(&c).is_none());
    let kept = g.modified_of(&a);
    assert_eq!(kept.len(), 1);
    assert!(kept[0].is_partner(&b));
}

#[test]
fn target_of_deleted_is_still_usable() {
    let (a, b, c) = (face("A"), face("B"), face("C"));
    let mut g = HistoryGraph::new();
    g.add_modified(&a, &b);
    g.set_deleted(&b);
    // an edge into a retired node is allowed; out of it is not
    assert!(g.add_generated(&c, &b));
    assert!(!g.add_generated(&b, &c));
    assert!(!g.is_root(&b));
    assert!(g.validate_invariants().is_ok());
}

#[test]
fn root_becomes_child_when_targeted_later() {
    let (a, b) = (face("A"), face("B"));
    let mut g = HistoryGraph::new();
    g.set_deleted_with(&b, true, 0);
    assert!(g.is_root(&b));
    assert!(g.add_modified(&a, &b));
    assert!(!g.is_root(&b));
    assert!(g.is_root(&a));
    assert_eq!(g.node_count(), 2);
    assert!(g.validate_invariants().is_ok());
}

#[test]
fn node_access_by_index() {
    let (a, b) = (face("A"), face("B"));
    let mut g = HistoryGraph::new();
    let b_id = g.try_add_modified_with(&a, &b, true, 9).unwrap();
    assert_eq!(b_id.get(), 2);
    assert!(g.node(b_id).shape().is_partner(&b));
    assert_eq!(g.node(b_id).op(), 9);
    assert!(g.try_node(NodeId::new(3).unwrap()).is_err());
}
