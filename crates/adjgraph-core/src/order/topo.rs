//! Topological ordering via reverse post-order.

use std::collections::BTreeMap;

use tracing::{debug, instrument, warn};

use crate::error::GraphError;
use crate::graph::Directed;
use crate::traversal::reverse_post_order;

/// Reverse post-order of `graph`.
///
/// Every arc `(v, w)` satisfies `pos(v) < pos(w)` when `graph` is acyclic.
/// On a cyclic graph the result is still a total order over all vertices, but
/// arcs inside a cycle may point backwards.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn topological_sort<G: Directed>(graph: &G) -> Vec<G::Vertex> {
    let order = reverse_post_order(graph);
    debug!(len = order.len(), "topological sort complete");
    order
}

/// Like [`topological_sort`] but verifies the order against every arc.
///
/// # Errors
///
/// Returns [`GraphError::CycleDetected`] naming the first arc (in
/// [`edges`](crate::graph::Adjacency::edges) order) that points backwards.
/// Self-loops count as cycles.
pub fn strict_topological_sort<G: Directed>(graph: &G) -> Result<Vec<G::Vertex>, GraphError> {
    let order = topological_sort(graph);
    {
        let position: BTreeMap<&G::Vertex, usize> =
            order.iter().enumerate().map(|(i, v)| (v, i)).collect();

        for (v, w) in graph.edges() {
            if position[v] >= position[w] {
                warn!(from = ?v, to = ?w, "arc violates topological order");
                return Err(GraphError::cycle(v, w));
            }
        }
    }
    Ok(order)
}

/// `true` if `graph` has no directed cycle (self-loops included).
pub fn is_acyclic<G: Directed>(graph: &G) -> bool {
    strict_topological_sort(graph).is_ok()
}
