//! Weight side-table layered over an unweighted graph.
//!
//! [`WeightedGraph`] owns a structural graph plus a map from canonical edge
//! key to weight and a running total. Structural edits go to the inner graph
//! first and the weight map follows in lockstep, so the two never disagree
//! about which edges exist.

use std::collections::BTreeMap;

use crate::error::GraphError;

use super::{
    Adjacency, Directed, DirectedGraph, EdgeStore, Undirected, UndirectedGraph, Weighted,
};

pub type WeightedDirectedGraph<V> = WeightedGraph<DirectedGraph<V>>;
pub type WeightedUndirectedGraph<V> = WeightedGraph<UndirectedGraph<V>>;

/// A graph with one `f64` weight per edge.
///
/// Reads through the [`Adjacency`] impl ignore weights, which is how
/// weight-agnostic algorithms (traversal, bridges) consume weighted graphs.
#[derive(Debug, Clone)]
pub struct WeightedGraph<G: EdgeStore> {
    graph: G,
    weights: BTreeMap<(G::Vertex, G::Vertex), f64>,
    total: f64,
}

impl<G: EdgeStore> Default for WeightedGraph<G> {
    fn default() -> Self {
        Self {
            graph: G::default(),
            weights: BTreeMap::new(),
            total: 0.0,
        }
    }
}

impl<G: EdgeStore> WeightedGraph<G> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I: IntoIterator<Item = (G::Vertex, G::Vertex, f64)>>(edges: I) -> Self {
        edges.into_iter().collect()
    }

    /// Insert `(v, w)` or overwrite its weight.
    ///
    /// Returns `true` if the edge is new. Either way the total moves by the
    /// difference between the new and the previous weight.
    pub fn add(&mut self, v: G::Vertex, w: G::Vertex, weight: f64) -> bool {
        let key = G::edge_key(&v, &w);
        let inserted = self.graph.add(v, w);
        let previous = self.weights.insert(key, weight).unwrap_or(0.0);
        self.total += weight - previous;
        inserted
    }

    /// Remove `(v, w)` and its weight. Returns `false` if absent.
    pub fn delete(&mut self, v: &G::Vertex, w: &G::Vertex) -> bool {
        if !self.graph.delete(v, w) {
            return false;
        }
        if let Some(weight) = self.weights.remove(&G::edge_key(v, w)) {
            self.total -= weight;
        }
        if self.weights.is_empty() {
            self.total = 0.0;
        }
        true
    }

    /// Change the weight of an existing edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] without touching the graph if the
    /// edge is absent.
    pub fn update_weight(
        &mut self,
        v: &G::Vertex,
        w: &G::Vertex,
        weight: f64,
    ) -> Result<(), GraphError> {
        let slot = self
            .weights
            .get_mut(&G::edge_key(v, w))
            .ok_or_else(|| GraphError::edge_not_found(v, w))?;
        self.total += weight - *slot;
        *slot = weight;
        Ok(())
    }

    pub fn add_vertex(&mut self, v: G::Vertex) -> bool {
        self.graph.add_vertex(v)
    }

    /// The structural graph without weights.
    pub const fn graph(&self) -> &G {
        &self.graph
    }

    fn stored_weight(&self, v: &G::Vertex, w: &G::Vertex) -> f64 {
        self.weights
            .get(&G::edge_key(v, w))
            .copied()
            .unwrap_or_default()
    }
}

impl<G: EdgeStore> Adjacency for WeightedGraph<G> {
    type Vertex = G::Vertex;

    fn vertices(&self) -> impl Iterator<Item = &G::Vertex> {
        self.graph.vertices()
    }

    fn adj(&self, v: &G::Vertex) -> impl Iterator<Item = &G::Vertex> {
        self.graph.adj(v)
    }

    fn edges(&self) -> impl Iterator<Item = (&G::Vertex, &G::Vertex)> {
        self.graph.edges()
    }

    fn has_vertex(&self, v: &G::Vertex) -> bool {
        self.graph.has_vertex(v)
    }

    fn has(&self, v: &G::Vertex, w: &G::Vertex) -> bool {
        self.graph.has(v, w)
    }

    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn degree(&self, v: &G::Vertex) -> usize {
        self.graph.degree(v)
    }
}

impl<G: EdgeStore> Weighted for WeightedGraph<G> {
    fn weighted_adj(&self, v: &G::Vertex) -> impl Iterator<Item = (&G::Vertex, f64)> {
        self.graph
            .adj(v)
            .map(move |w| (w, self.stored_weight(v, w)))
    }

    fn weighted_edges(&self) -> impl Iterator<Item = (&G::Vertex, &G::Vertex, f64)> {
        self.graph
            .edges()
            .map(|(v, w)| (v, w, self.stored_weight(v, w)))
    }

    fn weight(&self, v: &G::Vertex, w: &G::Vertex) -> Result<f64, GraphError> {
        self.weights
            .get(&G::edge_key(v, w))
            .copied()
            .ok_or_else(|| GraphError::edge_not_found(v, w))
    }

    fn total_weight(&self) -> f64 {
        self.total
    }
}

impl<G: EdgeStore + Directed> Directed for WeightedGraph<G> {
    fn reverse(&self) -> Self {
        let mut reversed = Self::new();
        for v in self.graph.vertices() {
            reversed.add_vertex(v.clone());
        }
        for (v, w, weight) in self.weighted_edges() {
            reversed.add(w.clone(), v.clone(), weight);
        }
        reversed
    }

    fn in_degree(&self, v: &G::Vertex) -> usize {
        self.graph.in_degree(v)
    }
}

impl<G: EdgeStore + Undirected> Undirected for WeightedGraph<G> {}

impl<G: EdgeStore> FromIterator<(G::Vertex, G::Vertex, f64)> for WeightedGraph<G> {
    fn from_iter<I: IntoIterator<Item = (G::Vertex, G::Vertex, f64)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<G: EdgeStore> Extend<(G::Vertex, G::Vertex, f64)> for WeightedGraph<G> {
    fn extend<I: IntoIterator<Item = (G::Vertex, G::Vertex, f64)>>(&mut self, iter: I) {
        for (v, w, weight) in iter {
            self.add(v, w, weight);
        }
    }
}
