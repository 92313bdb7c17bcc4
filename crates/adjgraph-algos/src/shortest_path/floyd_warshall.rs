use std::collections::BTreeMap;

use adjgraph_core::graph::{Adjacency, Weighted};
use tracing::{debug, instrument, warn};

use crate::error::AlgoError;

/// All-pairs shortest paths.
///
/// Vertices are numbered in ascending order; distances and successor links
/// live in dense `n × n` tables.
#[derive(Debug, Clone)]
pub struct FloydWarshall<V> {
    vertices: Vec<V>,
    index: BTreeMap<V, usize>,
    dist: Vec<f64>,
    /// `next[i * n + j]`: the vertex after `i` on a shortest `i → j` path.
    next: Vec<Option<usize>>,
}

impl<V: Ord + Clone + std::fmt::Debug> FloydWarshall<V> {
    /// Solve every pair.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::NegativeCycle`] if any vertex reaches itself at
    /// negative cost.
    #[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
    pub fn run<G: Weighted<Vertex = V>>(graph: &G) -> Result<Self, AlgoError> {
        let vertices: Vec<V> = graph.vertices().cloned().collect();
        let index: BTreeMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let n = vertices.len();

        let mut dist = vec![f64::INFINITY; n * n];
        let mut next = vec![None; n * n];
        for i in 0..n {
            dist[i * n + i] = 0.0;
            next[i * n + i] = Some(i);
        }
        for (i, v) in vertices.iter().enumerate() {
            for (w, weight) in graph.weighted_adj(v) {
                let j = index[w];
                if weight < dist[i * n + j] {
                    dist[i * n + j] = weight;
                    next[i * n + j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let ik = dist[i * n + k];
                if ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = ik + dist[k * n + j];
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        if let Some(i) = (0..n).find(|&i| dist[i * n + i] < 0.0) {
            warn!(vertex = ?vertices[i], "negative cycle through vertex");
            return Err(AlgoError::NegativeCycle);
        }

        debug!(pairs = n * n, "floyd-warshall complete");
        Ok(Self {
            vertices,
            index,
            dist,
            next,
        })
    }

    fn slot(&self, v: &V, w: &V) -> Option<(usize, usize)> {
        Some((*self.index.get(v)?, *self.index.get(w)?))
    }

    /// Shortest distance from `v` to `w`; `f64::INFINITY` when either is
    /// unknown or `w` is unreachable.
    #[must_use]
    pub fn distance(&self, v: &V, w: &V) -> f64 {
        let n = self.vertices.len();
        self.slot(v, w)
            .map_or(f64::INFINITY, |(i, j)| self.dist[i * n + j])
    }

    /// Vertices of a shortest `v → w` path inclusive; empty when unreachable.
    #[must_use]
    pub fn path(&self, v: &V, w: &V) -> Vec<V> {
        let n = self.vertices.len();
        let Some((mut i, j)) = self.slot(v, w) else {
            return Vec::new();
        };
        if self.next[i * n + j].is_none() {
            return Vec::new();
        }

        let mut path = vec![self.vertices[i].clone()];
        while i != j {
            let Some(step) = self.next[i * n + j] else {
                return Vec::new();
            };
            i = step;
            path.push(self.vertices[i].clone());
        }
        path
    }

    /// Vertices in table order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }
}
