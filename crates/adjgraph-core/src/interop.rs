//! Export to [`petgraph`].
//!
//! # Overview
//!
//! [`PetgraphExport`] copies a graph into a `petgraph::Graph` so that
//! petgraph's algorithm library can run on it. Vertices become node weights
//! and are inserted in ascending order, so node indices are stable for a given
//! vertex set. Weighted graphs carry their `f64` weights onto the edges;
//! unweighted graphs use `()`.
//!
//! Undirected edges are added once, in canonical form.

use std::collections::BTreeMap;
use std::fmt::Debug;

use petgraph::EdgeType;
use petgraph::graph::{Graph, NodeIndex};
use tracing::instrument;

use crate::graph::{
    Adjacency, DirectedGraph, UndirectedGraph, Weighted, WeightedDirectedGraph,
    WeightedUndirectedGraph,
};

// ---------------------------------------------------------------------------
// PetgraphExport
// ---------------------------------------------------------------------------

/// A petgraph copy of a graph plus the vertex → `NodeIndex` mapping.
#[derive(Debug, Clone)]
pub struct PetgraphExport<V, E, Ty: EdgeType> {
    pub graph: Graph<V, E, Ty>,
    /// Node index of every exported vertex.
    pub index: BTreeMap<V, NodeIndex>,
}

impl<V: Ord, E, Ty: EdgeType> PetgraphExport<V, E, Ty> {
    /// Look up the `NodeIndex` of `v`.
    #[must_use]
    pub fn node(&self, v: &V) -> Option<NodeIndex> {
        self.index.get(v).copied()
    }

    /// The vertex stored at `ix`.
    #[must_use]
    pub fn vertex(&self, ix: NodeIndex) -> Option<&V> {
        self.graph.node_weight(ix)
    }
}

#[instrument(skip_all, fields(vertices = source.num_vertices(), edges = source.num_edges()))]
fn export<G, E, Ty, F>(source: &G, mut edge_weight: F) -> PetgraphExport<G::Vertex, E, Ty>
where
    G: Adjacency,
    Ty: EdgeType,
    F: FnMut(&G::Vertex, &G::Vertex) -> E,
{
    let mut graph = Graph::with_capacity(source.num_vertices(), source.num_edges());
    let mut index = BTreeMap::new();

    for v in source.vertices() {
        let ix = graph.add_node(v.clone());
        index.insert(v.clone(), ix);
    }

    for (v, w) in source.edges() {
        if let (Some(&a), Some(&b)) = (index.get(v), index.get(w)) {
            graph.add_edge(a, b, edge_weight(v, w));
        }
    }

    PetgraphExport { graph, index }
}

fn weighted_export<G, Ty>(source: &G) -> PetgraphExport<G::Vertex, f64, Ty>
where
    G: Weighted,
    Ty: EdgeType,
{
    export(source, |v, w| source.weight_or(v, w, 0.0))
}

// ---------------------------------------------------------------------------
// Per-flavour conversions
// ---------------------------------------------------------------------------

impl<V: Ord + Clone + Debug> DirectedGraph<V> {
    #[must_use]
    pub fn to_petgraph(&self) -> PetgraphExport<V, (), petgraph::Directed> {
        export(self, |_, _| ())
    }
}

impl<V: Ord + Clone + Debug> UndirectedGraph<V> {
    #[must_use]
    pub fn to_petgraph(&self) -> PetgraphExport<V, (), petgraph::Undirected> {
        export(self, |_, _| ())
    }
}

impl<V: Ord + Clone + Debug> WeightedDirectedGraph<V> {
    #[must_use]
    pub fn to_petgraph(&self) -> PetgraphExport<V, f64, petgraph::Directed> {
        weighted_export(self)
    }
}

impl<V: Ord + Clone + Debug> WeightedUndirectedGraph<V> {
    #[must_use]
    pub fn to_petgraph(&self) -> PetgraphExport<V, f64, petgraph::Undirected> {
        weighted_export(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::algo::{kosaraju_scc, toposort};

    #[test]
    fn directed_export_preserves_structure() {
        let mut g = DirectedGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
        g.add_vertex(9);
        let export = g.to_petgraph();

        assert_eq!(export.graph.node_count(), 4);
        assert_eq!(export.graph.edge_count(), 3);
        let (a, b) = (export.node(&1).expect("node"), export.node(&2).expect("node"));
        assert!(export.graph.contains_edge(a, b));
        assert!(!export.graph.contains_edge(b, a));
        assert_eq!(export.vertex(a), Some(&1));
        assert_eq!(export.node(&42), None);
    }

    #[test]
    fn petgraph_agrees_on_component_count() {
        let g = DirectedGraph::from_edges([(0, 1), (1, 0), (1, 2), (3, 3)]);
        let export = g.to_petgraph();
        assert_eq!(kosaraju_scc(&export.graph).len(), 3);
    }

    #[test]
    fn undirected_edges_are_exported_once() {
        let g = UndirectedGraph::from_edges([("a", "b"), ("b", "c")]);
        let export = g.to_petgraph();
        assert_eq!(export.graph.edge_count(), 2);
        let (b, a) = (export.node(&"b").expect("b"), export.node(&"a").expect("a"));
        assert!(export.graph.contains_edge(b, a));
    }

    #[test]
    fn weights_become_edge_weights() {
        let g = WeightedDirectedGraph::from_edges([("a", "b", 2.5), ("b", "c", -1.0)]);
        let export = g.to_petgraph();
        let total: f64 = export.graph.edge_weights().sum();
        assert!((total - 1.5).abs() < f64::EPSILON);
        assert!(toposort(&export.graph, None).is_ok());
    }

    #[test]
    fn weighted_undirected_export() {
        let g = WeightedUndirectedGraph::from_edges([(1, 2, 4.0), (2, 3, 1.0)]);
        let export = g.to_petgraph();
        let (x, y) = (export.node(&3).expect("3"), export.node(&2).expect("2"));
        let edge = export.graph.find_edge(x, y).expect("edge");
        assert!((export.graph[edge] - 1.0).abs() < f64::EPSILON);
    }
}
