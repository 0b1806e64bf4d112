#![allow(dead_code)]
use topo_history::history::HistoryGraph;
use topo_history::topology::{Shape, ShapeKind};

pub fn face(tag: &str) -> Shape {
    Shape::tagged(ShapeKind::Face, tag)
}

pub fn edge(tag: &str) -> Shape {
    Shape::tagged(ShapeKind::Edge, tag)
}

/// `n` fresh, untagged faces.
pub fn faces(n: usize) -> Vec<Shape> {
    (0..n).map(|_| Shape::new(ShapeKind::Face)).collect()
}

/// Tags of `shapes`, in order. Panics on untagged shapes.
pub fn tags(shapes: &[Shape]) -> Vec<String> {
    shapes
        .iter()
        .map(|s| s.tag().expect("tagged shape").to_string())
        .collect()
}

/// Build a history from `(before, after)` index pairs over `pool`, all as `modified`.
pub fn chain_history(pool: &[Shape], pairs: &[(usize, usize)]) -> HistoryGraph {
    let mut g = HistoryGraph::new();
    for &(u, v) in pairs {
        assert!(g.add_modified(&pool[u], &pool[v]), "edge {u} -> {v} refused");
    }
    g
}
