use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use adjgraph_core::graph::{Adjacency, Weighted};
use tracing::{debug, instrument, warn};

use super::unwind;
use crate::error::AlgoError;
use crate::ordered::OrderedWeight;

/// Single-source shortest paths for non-negative weights.
///
/// Uses a lazy-deletion binary heap: stale entries are skipped on pop
/// instead of being decreased in place.
#[derive(Debug, Clone)]
pub struct Dijkstra<V> {
    source: V,
    dist: BTreeMap<V, f64>,
    parent: BTreeMap<V, V>,
}

impl<V: Ord + Clone + std::fmt::Debug> Dijkstra<V> {
    /// Solve from `source`.
    ///
    /// # Errors
    ///
    /// - [`AlgoError::MissingSource`] if `source` is not in `graph`.
    /// - [`AlgoError::NegativeWeight`] if any edge weight is negative.
    #[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
    pub fn run<G: Weighted<Vertex = V>>(graph: &G, source: &V) -> Result<Self, AlgoError> {
        if !graph.has_vertex(source) {
            return Err(AlgoError::missing_source(source));
        }
        if let Some((v, w, weight)) = graph.weighted_edges().find(|(_, _, x)| *x < 0.0) {
            warn!(from = ?v, to = ?w, weight, "negative edge weight");
            return Err(AlgoError::negative_weight(v, w, weight));
        }

        let mut dist: BTreeMap<&V, f64> = BTreeMap::from([(source, 0.0)]);
        let mut parent: BTreeMap<&V, &V> = BTreeMap::new();
        let mut heap = BinaryHeap::from([Reverse((OrderedWeight(0.0), source))]);

        while let Some(Reverse((OrderedWeight(d), v))) = heap.pop() {
            if dist.get(v).is_some_and(|&best| d > best) {
                continue;
            }
            for (w, weight) in graph.weighted_adj(v) {
                let candidate = d + weight;
                if dist.get(w).is_none_or(|&best| candidate < best) {
                    dist.insert(w, candidate);
                    parent.insert(w, v);
                    heap.push(Reverse((OrderedWeight(candidate), w)));
                }
            }
        }

        debug!(reached = dist.len(), "dijkstra complete");
        Ok(Self {
            source: source.clone(),
            dist: dist.into_iter().map(|(v, d)| (v.clone(), d)).collect(),
            parent: parent
                .into_iter()
                .map(|(w, v)| (w.clone(), v.clone()))
                .collect(),
        })
    }

    pub const fn source(&self) -> &V {
        &self.source
    }

    /// Shortest distance to `target`; `f64::INFINITY` when unknown or
    /// unreachable.
    #[must_use]
    pub fn distance_to(&self, target: &V) -> f64 {
        self.dist.get(target).copied().unwrap_or(f64::INFINITY)
    }

    #[must_use]
    pub fn has_path_to(&self, target: &V) -> bool {
        self.dist.contains_key(target)
    }

    /// Vertices from the source to `target` inclusive; empty when unreachable.
    #[must_use]
    pub fn path_to(&self, target: &V) -> Vec<V> {
        unwind(&self.parent, &self.source, target)
    }
}
