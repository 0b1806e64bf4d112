//! Multi-hop lineage traversal over a [`HistoryGraph`].
//!
//! The graph itself only answers one-step questions. This module chases those
//! steps for callers that need transitive results ("every descendant of this
//! face", "what does this edge look like now"). Children shared by several
//! parents are visited once.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::history::{EdgeKind, HistoryGraph, NodeId};
use crate::topology::identity::Identified;

/// Which lineage edges a traversal follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Follow {
    Modified,
    Generated,
    Both,
}

impl Follow {
    fn accepts(self, kind: EdgeKind) -> bool {
        matches!(
            (self, kind),
            (Follow::Both, _)
                | (Follow::Modified, EdgeKind::Modified)
                | (Follow::Generated, EdgeKind::Generated)
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Strategy {
    DFS,
    BFS,
}

pub struct LineageBuilder<'a, S: Identified> {
    graph: &'a HistoryGraph<S>,
    seeds: Vec<NodeId>,
    follow: Follow,
    strat: Strategy,
    max_depth: Option<u32>,
}

impl<'a, S: Identified + Clone> LineageBuilder<'a, S> {
    pub fn new(graph: &'a HistoryGraph<S>) -> Self {
        Self {
            graph,
            seeds: Vec::new(),
            follow: Follow::Both,
            strat: Strategy::BFS,
            max_depth: None,
        }
    }

    /// Start from these references. Never-recorded references are skipped.
    pub fn seeds<'s, I>(mut self, it: I) -> Self
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        let graph = self.graph;
        self.seeds = it.into_iter().filter_map(|s| graph.find_node(s)).collect();
        self
    }

    pub fn seed_ids<I: IntoIterator<Item = NodeId>>(mut self, it: I) -> Self {
        self.seeds = it.into_iter().collect();
        self
    }

    pub fn follow(mut self, f: Follow) -> Self {
        self.follow = f;
        self
    }
    pub fn modified(self) -> Self {
        self.follow(Follow::Modified)
    }
    pub fn generated(self) -> Self {
        self.follow(Follow::Generated)
    }
    pub fn both(self) -> Self {
        self.follow(Follow::Both)
    }
    pub fn dfs(mut self) -> Self {
        self.strat = Strategy::DFS;
        self
    }
    pub fn bfs(mut self) -> Self {
        self.strat = Strategy::BFS;
        self
    }
    /// Stop after `d` hops; `Some(1)` reproduces the one-step queries.
    pub fn max_depth(mut self, d: Option<u32>) -> Self {
        self.max_depth = d;
        self
    }

    /// Distinct descendants of the seeds, seeds excluded, in discovery order.
    pub fn run_ids(self) -> Vec<NodeId> {
        let mut seen: HashSet<NodeId> = self.seeds.iter().copied().collect();
        let mut out = Vec::new();
        let mut work: VecDeque<(NodeId, u32)> = self.seeds.iter().map(|&s| (s, 0)).collect();

        while let Some((id, depth)) = match self.strat {
            Strategy::BFS => work.pop_front(),
            Strategy::DFS => work.pop_back(),
        } {
            if self.max_depth.is_some_and(|max| depth >= max) {
                continue;
            }
            let node = self.graph.node(id);
            let next = node
                .modified()
                .iter()
                .map(|&c| (EdgeKind::Modified, c))
                .chain(node.generated().iter().map(|&c| (EdgeKind::Generated, c)));
            let mut fresh = Vec::new();
            for (kind, child) in next {
                if self.follow.accepts(kind) && seen.insert(child) {
                    out.push(child);
                    fresh.push((child, depth + 1));
                }
            }
            if let Strategy::DFS = self.strat {
                // keep recorded order when popping from the back
                fresh.reverse();
            }
            work.extend(fresh);
        }
        out
    }

    /// Like [`LineageBuilder::run_ids`], resolved to references.
    pub fn run(self) -> Vec<S> {
        let graph = self.graph;
        self.run_ids()
            .into_iter()
            .map(|id| graph.node(id).shape().clone())
            .collect()
    }
}

/// Every entity reachable from `shape` through any lineage edge.
pub fn descendants<S: Identified + Clone>(graph: &HistoryGraph<S>, shape: &S) -> Vec<S> {
    LineageBuilder::new(graph).seeds([shape]).run()
}

/// Current images of `shape`: the surviving ends of its `modified` chains.
///
/// - never recorded, or recorded but unmodified and not deleted: `[shape]`,
/// - deleted with no modification: `[]`,
/// - otherwise the non-deleted nodes without `modified` children reachable
///   through `modified` edges, in discovery order.
pub fn last_images<S: Identified + Clone>(graph: &HistoryGraph<S>, shape: &S) -> Vec<S> {
    let Some(id) = graph.find_node(shape) else {
        return vec![shape.clone()];
    };
    let node = graph.node(id);
    if node.modified().is_empty() {
        return if node.is_deleted() {
            Vec::new()
        } else {
            vec![shape.clone()]
        };
    }
    LineageBuilder::new(graph)
        .seed_ids([id])
        .modified()
        .run_ids()
        .into_iter()
        .map(|c| graph.node(c))
        .filter(|n| n.modified().is_empty() && !n.is_deleted())
        .map(|n| n.shape().clone())
        .collect()
}

/// Every entity `shape` descends from, nearest first.
///
/// The child -> parents index is built once per call, so the walk is linear in
/// the size of the graph.
pub fn ancestors<S: Identified + Clone>(graph: &HistoryGraph<S>, shape: &S) -> Vec<S> {
    let Some(start) = graph.find_node(shape) else {
        return Vec::new();
    };
    let mut parents: Vec<Vec<NodeId>> = vec![Vec::new(); graph.node_count()];
    for (id, node, _) in graph.iter() {
        for child in node.children() {
            parents[child.slot()].push(id);
        }
    }

    let mut seen: HashSet<NodeId> = HashSet::new();
    seen.insert(start);
    let mut out = Vec::new();
    let mut work = VecDeque::from([start]);
    while let Some(id) = work.pop_front() {
        for &parent in &parents[id.slot()] {
            if seen.insert(parent) {
                out.push(graph.node(parent).shape().clone());
                work.push_back(parent);
            }
        }
    }
    out
}
