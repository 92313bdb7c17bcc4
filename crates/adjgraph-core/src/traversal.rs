//! Iterative post-order depth-first traversal.
//!
//! # Overview
//!
//! [`PostOrder`] simulates recursive DFS with an explicit heap stack of
//! `(vertex, phase)` frames, so traversal depth is bounded by memory rather
//! than by the thread's call stack.
//!
//! A vertex is pushed in the [`Phase::Enter`] state. When it is popped for
//! the first time it is marked visited, re-pushed as [`Phase::Exit`], and its
//! unvisited neighbors are pushed above it in reverse order, so the first
//! neighbor is explored first. Popping an `Exit` frame emits the vertex.
//!
//! The emitted sequence is identical, vertex for vertex, to
//!
//! ```text
//! visit(v):
//!     mark v
//!     for w in adj(v): if w unmarked: visit(w)
//!     emit v
//! ```
//!
//! run over the same roots with the same neighbor order.
//!
//! # Usage
//!
//! ```rust,ignore
//! use adjgraph_core::graph::DirectedGraph;
//! use adjgraph_core::traversal::post_order;
//!
//! let g = DirectedGraph::from_edges([(0, 1), (1, 2)]);
//! let order: Vec<_> = post_order(&g).copied().collect();
//! assert_eq!(order, vec![2, 1, 0]);
//! ```

use std::collections::BTreeSet;

use tracing::{instrument, trace};

use crate::config::TraversalConfig;
use crate::graph::Adjacency;

/// Frame state on the explicit DFS stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Discovered; children not yet explored.
    Enter,
    /// Subtree finished; ready to emit.
    Exit,
}

/// Lazy post-order DFS over `graph`, launching from each unvisited root in
/// turn.
///
/// Roots that are not vertices of `graph` are skipped.
pub struct PostOrder<'g, G: Adjacency, R> {
    graph: &'g G,
    roots: R,
    visited: BTreeSet<&'g G::Vertex>,
    stack: Vec<(&'g G::Vertex, Phase)>,
}

impl<'g, G, R> PostOrder<'g, G, R>
where
    G: Adjacency,
    R: Iterator<Item = &'g G::Vertex>,
{
    pub fn new(graph: &'g G, roots: R) -> Self {
        Self::with_config(graph, roots, &TraversalConfig::default())
    }

    pub fn with_config(graph: &'g G, roots: R, config: &TraversalConfig) -> Self {
        Self {
            graph,
            roots,
            visited: BTreeSet::new(),
            stack: Vec::with_capacity(config.stack_capacity),
        }
    }

    /// Whether `v` has been discovered so far.
    pub fn is_visited(&self, v: &G::Vertex) -> bool {
        self.visited.contains(v)
    }

    fn next_root(&mut self) -> Option<&'g G::Vertex> {
        let graph = self.graph;
        let visited = &self.visited;
        self.roots
            .by_ref()
            .find(|root| graph.has_vertex(root) && !visited.contains(root))
    }
}

impl<'g, G, R> Iterator for PostOrder<'g, G, R>
where
    G: Adjacency,
    R: Iterator<Item = &'g G::Vertex>,
{
    type Item = &'g G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((vertex, phase)) = self.stack.pop() else {
                let root = self.next_root()?;
                trace!(?root, "launching dfs");
                self.stack.push((root, Phase::Enter));
                continue;
            };

            match phase {
                Phase::Exit => return Some(vertex),
                Phase::Enter => {
                    if !self.visited.insert(vertex) {
                        continue;
                    }
                    self.stack.push((vertex, Phase::Exit));

                    let graph = self.graph;
                    let first_child = self.stack.len();
                    for w in graph.adj(vertex) {
                        if !self.visited.contains(w) {
                            self.stack.push((w, Phase::Enter));
                        }
                    }
                    self.stack[first_child..].reverse();
                }
            }
        }
    }
}

/// Post-order over every vertex of `graph`, roots taken in
/// [`Adjacency::vertices`] order.
pub fn post_order<G: Adjacency>(
    graph: &G,
) -> PostOrder<'_, G, impl Iterator<Item = &G::Vertex>> {
    PostOrder::new(graph, graph.vertices())
}

/// Post-order restricted to what is reachable from `roots`.
pub fn post_order_from<'g, G, R>(graph: &'g G, roots: R) -> PostOrder<'g, G, R::IntoIter>
where
    G: Adjacency,
    R: IntoIterator<Item = &'g G::Vertex>,
{
    PostOrder::new(graph, roots.into_iter())
}

/// Reverse of [`post_order`], materialized.
///
/// For an acyclic directed graph this is a topological order.
#[instrument(skip_all, fields(vertices = graph.num_vertices()))]
pub fn reverse_post_order<G: Adjacency>(graph: &G) -> Vec<G::Vertex> {
    let mut order: Vec<G::Vertex> = post_order(graph).cloned().collect();
    order.reverse();
    order
}
