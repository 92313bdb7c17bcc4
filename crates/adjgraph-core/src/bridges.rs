//! Bridge (cut-edge) detection for undirected graphs.
//!
//! # Overview
//!
//! A bridge is an edge whose removal disconnects its endpoints. One DFS pass
//! assigns every vertex a discovery index `order[v]` and a low-link
//! `low[v]`: the smallest discovery index reachable from `v`'s DFS subtree
//! using tree edges plus at most one back edge.
//!
//! - Tree edge to an undiscovered `w`: descend; when `w` finishes,
//!   `low[v] = min(low[v], low[w])`.
//! - Any other already-discovered neighbor except the tree parent is a back
//!   edge: `low[v] = min(low[v], order[w])`.
//!
//! When `v` finishes and `low[v] == order[v]`, nothing below `v` reaches
//! above it, so the tree edge `(parent, v)` is a bridge. DFS roots have no
//! parent edge and are never reported.
//!
//! # Design
//!
//! - **Iterative**: each stack frame holds the vertex, its tree parent and
//!   the live neighbor iterator, so depth is bounded by memory.
//! - **All components**: every vertex is tried as a root.
//! - **Weight-agnostic**: weighted graphs are read through their structural
//!   [`Adjacency`](crate::graph::Adjacency) view.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use crate::config::TraversalConfig;
use crate::graph::Undirected;
use crate::graph::undirected::canonical;

struct Frame<'g, V, I> {
    vertex: &'g V,
    parent: Option<&'g V>,
    neighbors: I,
}

/// Every bridge of `graph` as a canonical `(min, max)` pair.
pub fn find_bridges<G: Undirected>(graph: &G) -> BTreeSet<(G::Vertex, G::Vertex)> {
    find_bridges_with(graph, &TraversalConfig::default())
}

/// [`find_bridges`] with an explicit traversal configuration.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn find_bridges_with<G: Undirected>(
    graph: &G,
    config: &TraversalConfig,
) -> BTreeSet<(G::Vertex, G::Vertex)> {
    let mut order: BTreeMap<&G::Vertex, usize> = BTreeMap::new();
    let mut low: Vec<usize> = Vec::with_capacity(graph.num_vertices());
    let mut bridges = BTreeSet::new();
    let mut stack = Vec::with_capacity(config.stack_capacity);

    for root in graph.vertices() {
        if order.contains_key(root) {
            continue;
        }
        order.insert(root, low.len());
        low.push(low.len());
        stack.push(Frame {
            vertex: root,
            parent: None,
            neighbors: graph.adj(root),
        });

        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            let parent = frame.parent;

            if let Some(w) = frame.neighbors.next() {
                if parent == Some(w) {
                    continue;
                }
                let ov = order[v];
                if let Some(&ow) = order.get(w) {
                    low[ov] = low[ov].min(ow);
                } else {
                    order.insert(w, low.len());
                    low.push(low.len());
                    stack.push(Frame {
                        vertex: w,
                        parent: Some(v),
                        neighbors: graph.adj(w),
                    });
                }
                continue;
            }

            stack.pop();
            if let Some(p) = parent {
                let (ov, op) = (order[v], order[p]);
                low[op] = low[op].min(low[ov]);
                if low[ov] == ov {
                    bridges.insert(canonical(p, v));
                }
            }
        }
    }

    debug!(bridges = bridges.len(), "bridge detection complete");
    bridges
}
