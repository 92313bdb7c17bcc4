//! Undirected adjacency-list graph.

use std::fmt::Debug;

use super::adjacency::{AdjacencyList, Neighbors};
use super::{Adjacency, EdgeStore, Undirected};

/// An undirected graph without parallel edges.
///
/// Each edge is stored in both endpoint sets and counted once. Edge
/// enumeration yields the canonical `(min, max)` form only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<V> {
    list: AdjacencyList<V>,
    edge_count: usize,
}

impl<V> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self {
            list: AdjacencyList::default(),
            edge_count: 0,
        }
    }
}

impl<V: Ord + Clone + Debug> UndirectedGraph<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        edges.into_iter().collect()
    }

    /// Insert the edge `{v, w}`. Returns `false` if it already existed.
    pub fn add(&mut self, v: V, w: V) -> bool {
        let inserted = self.list.link(v.clone(), w.clone());
        self.list.link(w, v);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    /// Remove the edge `{v, w}`. Returns `false` if it was absent.
    pub fn delete(&mut self, v: &V, w: &V) -> bool {
        if !self.list.unlink(v, w) {
            return false;
        }
        self.list.unlink(w, v);
        self.edge_count -= 1;
        self.list.prune_if(v, false);
        self.list.prune_if(w, false);
        true
    }

    pub fn add_vertex(&mut self, v: V) -> bool {
        self.list.ensure(v)
    }

    pub fn adj(&self, v: &V) -> Neighbors<'_, V> {
        self.list.neighbors(v)
    }
}

/// Canonical `(min, max)` key of an undirected edge.
pub fn canonical<V: Ord + Clone>(v: &V, w: &V) -> (V, V) {
    if v <= w {
        (v.clone(), w.clone())
    } else {
        (w.clone(), v.clone())
    }
}

impl<V: Ord + Clone + Debug> Adjacency for UndirectedGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.list.vertices()
    }

    fn adj(&self, v: &V) -> impl Iterator<Item = &V> {
        self.list.neighbors(v)
    }

    fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.list.iter().flat_map(|(v, neighbors)| {
            neighbors.range(v..).map(move |w| (v, w))
        })
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.list.contains_vertex(v)
    }

    fn has(&self, v: &V, w: &V) -> bool {
        self.list.contains(v, w)
    }

    fn num_vertices(&self) -> usize {
        self.list.len()
    }

    fn num_edges(&self) -> usize {
        self.edge_count
    }

    fn degree(&self, v: &V) -> usize {
        self.list.degree(v)
    }
}

impl<V: Ord + Clone + Debug> EdgeStore for UndirectedGraph<V> {
    fn add(&mut self, v: V, w: V) -> bool {
        Self::add(self, v, w)
    }

    fn delete(&mut self, v: &V, w: &V) -> bool {
        Self::delete(self, v, w)
    }

    fn add_vertex(&mut self, v: V) -> bool {
        Self::add_vertex(self, v)
    }

    fn edge_key(v: &V, w: &V) -> (V, V) {
        canonical(v, w)
    }
}

impl<V: Ord + Clone + Debug> Undirected for UndirectedGraph<V> {}

impl<V: Ord + Clone + Debug> FromIterator<(V, V)> for UndirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V: Ord + Clone + Debug> Extend<(V, V)> for UndirectedGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (v, w) in iter {
            self.add(v, w);
        }
    }
}
