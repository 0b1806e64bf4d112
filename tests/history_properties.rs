mod util;
use util::*;

use topo_history::prelude::*;

#[test]
fn unseen_entity_has_no_history() {
    let (a, b, c) = (face("A"), face("B"), face("C"));
    let mut g = HistoryGraph::new();
    g.add_modified(&a, &b);

    assert!(!g.is_modified(&c));
    assert!(!g.has_generated(&c));
    assert!(!g.is_deleted(&c));
    assert!(!g.is_active(&c));
    assert!(g.iter().all(|(_, _, s)| !s.is_partner(&c)));
}

#[test]
fn one_step_modification() {
    let (a, b) = (face("A"), face("B"));
    let mut g = HistoryGraph::new();
    assert!(g.add_modified(&a, &b));
    let mut out = Vec::new();
    assert!(g.get_modified(&a, &mut out));
    assert_eq!(tags(&out), vec!["B"]);
    assert!(g.is_modified(&a));
}

#[test]
fn deleted_subject_rejects_modification() {
    let (a, b, c) = (face("A"), face("B"), face("C"));
    let mut g = HistoryGraph::new();
    g.add_modified(&a, &b);
    assert!(g.set_deleted(&a));
    let before = tags(&g.modified_of(&a));
    assert!(!g.add_modified(&a, &c));
    assert_eq!(tags(&g.modified_of(&a)), before);
}

#[test]
fn missing_subject_without_create_creates_nothing() {
    let x = face("X");
    let mut g = HistoryGraph::new();
    assert!(!g.set_deleted_with(&x, false, 0));
    assert!(!g.is_deleted(&x));
    assert!(g.find_node(&x).is_none());
    assert_eq!(g.node_count(), 0);
}

#[test]
fn queries_are_not_transitive() {
    let (a, b, c) = (face("A"), face("B"), face("C"));
    let mut g = HistoryGraph::new();
    g.add_modified(&a, &b);
    g.add_modified(&b, &c);
    assert_eq!(tags(&g.modified_of(&a)), vec!["B"]);
    assert_eq!(tags(&g.modified_of(&b)), vec!["C"]);
}

#[test]
fn partners_share_history() {
    let (a, b) = (face("A"), face("B"));
    let a_rev = a.reversed();
    let a_moved = a.moved(&Location::translation(0.0, 0.0, -2.5));
    let mut g = HistoryGraph::new();
    assert!(g.add_modified(&a, &b));
    for p in [&a_rev, &a_moved] {
        assert!(g.is_modified(p));
        assert_eq!(tags(&g.modified_of(p)), vec!["B"]);
    }
}

#[test]
fn iterator_is_complete_and_ordered() {
    let pool = faces(5);
    let g = chain_history(&pool, &[(0, 1), (2, 3), (1, 4), (0, 3)]);
    let ids: Vec<usize> = g.iter().map(|(id, _, _)| id.get()).collect();
    assert_eq!(ids, (1..=g.node_count()).collect::<Vec<_>>());
    let order = [0usize, 1, 2, 3, 4];
    for ((_, _, s), &k) in g.iter().zip(order.iter()) {
        assert!(s.is_partner(&pool[k]));
    }
}

#[test]
fn modify_generate_delete_scenario() {
    let (f1, f2, f3) = (face("F1"), face("F2"), face("F3"));
    let mut g = HistoryGraph::new();
    assert!(g.add_modified_with(&f1, &f2, true, 1));
    assert!(g.add_generated_with(&f1, &f3, true, 1));
    assert!(g.set_deleted_with(&f2, true, 2));

    assert!(!g.is_active(&f1));
    assert!(!g.is_active(&f2));
    assert!(g.is_active(&f3));
    assert_eq!(tags(&g.modified_of(&f1)), vec!["F2"]);
    assert_eq!(tags(&g.generated_of(&f1)), vec!["F3"]);
    assert!(g.validate_invariants().is_ok());
}

#[test]
fn boolean_and_result_surfaces_agree() {
    let (a, b) = (face("A"), face("B"));
    let mut g = HistoryGraph::new();
    assert_eq!(
        g.try_add_generated_with(&a, &b, false, 0),
        Err(HistoryError::MissingSubject)
    );
    assert!(!g.add_generated_with(&a, &b, false, 0));
    assert!(g.try_add_generated_with(&a, &b, true, 0).is_ok());
}
