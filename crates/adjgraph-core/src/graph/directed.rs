//! Directed adjacency-list graph.

use std::collections::BTreeMap;
use std::fmt::Debug;

use super::adjacency::{AdjacencyList, Neighbors};
use super::{Adjacency, Directed, EdgeStore};

/// A directed graph without parallel arcs.
///
/// Adding an arc `(v, w)` registers both endpoints, so sinks enumerate even
/// though they have no outgoing arcs. A vertex is dropped once no arc touches
/// it any more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<V> {
    out: AdjacencyList<V>,
    /// Incoming arc count per vertex; absent means zero.
    incoming: BTreeMap<V, usize>,
    edge_count: usize,
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            out: AdjacencyList::default(),
            incoming: BTreeMap::new(),
            edge_count: 0,
        }
    }
}

impl<V: Ord + Clone + Debug> DirectedGraph<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a list of arcs.
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        edges.into_iter().collect()
    }

    /// Insert the arc `v → w`. Returns `false` if it already existed.
    pub fn add(&mut self, v: V, w: V) -> bool {
        let inserted = self.out.link(v, w.clone());
        if inserted {
            *self.incoming.entry(w.clone()).or_insert(0) += 1;
            self.edge_count += 1;
        }
        self.out.ensure(w);
        inserted
    }

    /// Remove the arc `v → w`. Returns `false` if it was absent.
    pub fn delete(&mut self, v: &V, w: &V) -> bool {
        if !self.out.unlink(v, w) {
            return false;
        }
        self.edge_count -= 1;
        if let Some(count) = self.incoming.get_mut(w) {
            *count -= 1;
            if *count == 0 {
                self.incoming.remove(w);
            }
        }
        self.prune(v);
        self.prune(w);
        true
    }

    /// Register `v` without arcs. Returns `false` if already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        self.out.ensure(v)
    }

    /// Successors of `v`; empty for unknown vertices.
    pub fn adj(&self, v: &V) -> Neighbors<'_, V> {
        self.out.neighbors(v)
    }

    fn prune(&mut self, v: &V) {
        let has_incoming = self.incoming.contains_key(v);
        self.out.prune_if(v, has_incoming);
    }
}

impl<V: Ord + Clone + Debug> Adjacency for DirectedGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> impl Iterator<Item = &V> {
        self.out.vertices()
    }

    fn adj(&self, v: &V) -> impl Iterator<Item = &V> {
        self.out.neighbors(v)
    }

    fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.out
            .iter()
            .flat_map(|(v, targets)| targets.iter().map(move |w| (v, w)))
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.out.contains_vertex(v)
    }

    fn has(&self, v: &V, w: &V) -> bool {
        self.out.contains(v, w)
    }

    fn num_vertices(&self) -> usize {
        self.out.len()
    }

    fn num_edges(&self) -> usize {
        self.edge_count
    }

    fn degree(&self, v: &V) -> usize {
        self.out.degree(v)
    }
}

impl<V: Ord + Clone + Debug> EdgeStore for DirectedGraph<V> {
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
        (v.clone(), w.clone())
    }
}

impl<V: Ord + Clone + Debug> Directed for DirectedGraph<V> {
    fn reverse(&self) -> Self {
        let mut reversed = Self::new();
        for v in self.out.vertices() {
            reversed.add_vertex(v.clone());
        }
        for (v, w) in self.edges() {
            reversed.add(w.clone(), v.clone());
        }
        reversed
    }

    fn in_degree(&self, v: &V) -> usize {
        self.incoming.get(v).copied().unwrap_or(0)
    }
}

impl<V: Ord + Clone + Debug> FromIterator<(V, V)> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V: Ord + Clone + Debug> Extend<(V, V)> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (v, w) in iter {
            self.add(v, w);
        }
    }
}
