use std::collections::BTreeMap;

use adjgraph_core::graph::{Adjacency, Weighted};
use tracing::{debug, instrument, trace, warn};

use super::unwind;
use crate::error::AlgoError;

/// Single-source shortest paths allowing negative weights.
///
/// Relaxes every edge once per round. A path has at most `|V| - 1` edges, so
/// distances settle within that many rounds unless a negative cycle is
/// reachable from the source; one extra round detects that case. Stops early
/// when a round changes nothing.
#[derive(Debug, Clone)]
pub struct BellmanFord<V> {
    source: V,
    dist: BTreeMap<V, f64>,
    parent: BTreeMap<V, V>,
    rounds: usize,
}

impl<V: Ord + Clone + std::fmt::Debug> BellmanFord<V> {
    /// Solve from `source`.
    ///
    /// # Errors
    ///
    /// - [`AlgoError::MissingSource`] if `source` is not in `graph`.
    /// - [`AlgoError::NegativeCycle`] if a negative cycle is reachable from
    ///   `source`.
    #[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
    pub fn run<G: Weighted<Vertex = V>>(graph: &G, source: &V) -> Result<Self, AlgoError> {
        let Some(source) = graph.vertices().find(|v| *v == source) else {
            return Err(AlgoError::missing_source(source));
        };

        let mut dist: BTreeMap<&V, f64> = BTreeMap::from([(source, 0.0)]);
        let mut parent: BTreeMap<&V, &V> = BTreeMap::new();
        let limit = graph.num_vertices();
        let mut rounds = 0;
        let mut stable = false;

        while rounds < limit {
            rounds += 1;
            stable = true;
            for v in graph.vertices() {
                let Some(&dv) = dist.get(v) else {
                    continue;
                };
                for (w, weight) in graph.weighted_adj(v) {
                    let candidate = dv + weight;
                    if dist.get(w).is_none_or(|&best| candidate < best) {
                        dist.insert(w, candidate);
                        parent.insert(w, v);
                        stable = false;
                    }
                }
            }
            trace!(round = rounds, stable, "relaxation round");
            if stable {
                break;
            }
        }

        if !stable {
            warn!(source = ?source, rounds, "distances did not settle");
            return Err(AlgoError::NegativeCycle);
        }

        debug!(reached = dist.len(), rounds, "bellman-ford complete");
        Ok(Self {
            source: source.clone(),
            dist: dist.into_iter().map(|(v, d)| (v.clone(), d)).collect(),
            parent: parent
                .into_iter()
                .map(|(w, v)| (w.clone(), v.clone()))
                .collect(),
            rounds,
        })
    }

    pub const fn source(&self) -> &V {
        &self.source
    }

    /// Relaxation rounds performed, including the final unchanged one.
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Shortest distance to `target`; `f64::INFINITY` when unknown or
    /// unreachable.
    #[must_use]
    pub fn distance_to(&self, target: &V) -> f64 {
        self.dist.get(target).copied().unwrap_or(f64::INFINITY)
    }

    /// Vertices from the source to `target` inclusive; empty when unreachable.
    #[must_use]
    pub fn path_to(&self, target: &V) -> Vec<V> {
        unwind(&self.parent, &self.source, target)
    }
}
