//! Shortest paths over weighted graphs.
//!
//! | solver            | weights            | scope         | time       |
//! |-------------------|--------------------|---------------|------------|
//! | [`Dijkstra`]      | non-negative       | single source | O(E log V) |
//! | [`BellmanFord`]   | any, no neg. cycle | single source | O(V · E)   |
//! | [`FloydWarshall`] | any, no neg. cycle | all pairs     | O(V³)      |
//!
//! Every solver walks [`Weighted::weighted_adj`](adjgraph_core::graph::Weighted),
//! so directed and undirected graphs are both accepted. An undirected edge
//! with negative weight is a negative cycle of length two.
//!
//! Distances to unknown or unreachable vertices are `f64::INFINITY`; paths to
//! them are empty.

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;

use std::collections::BTreeMap;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::FloydWarshall;

/// Walk `parent` links back from `target` to `source`.
fn unwind<V: Ord + Clone>(parent: &BTreeMap<V, V>, source: &V, target: &V) -> Vec<V> {
    if target != source && !parent.contains_key(target) {
        return Vec::new();
    }
    let mut path = vec![target.clone()];
    let mut at = target;
    while at != source {
        let Some(prev) = parent.get(at) else {
            return Vec::new();
        };
        path.push(prev.clone());
        at = prev;
    }
    path.reverse();
    path
}
