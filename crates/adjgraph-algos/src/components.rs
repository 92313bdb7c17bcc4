//! Connected components of undirected graphs via union-find.
//!
//! Groups are listed in order of their first edge (or vertex) in the graph's
//! enumeration order, and members keep that order within a group.

use std::collections::BTreeMap;

use adjgraph_core::graph::{Undirected, Weighted};
use tracing::{debug, instrument};

use crate::union_find::UnionFind;

type Edge<V> = (V, V);
type WeightedEdge<V> = (V, V, f64);

fn partition<G: Undirected>(graph: &G) -> UnionFind<&G::Vertex> {
    let mut uf: UnionFind<&G::Vertex> = graph.vertices().collect();
    for (v, w) in graph.edges() {
        uf.union(v, w);
    }
    uf
}

fn group<T, K: Ord>(items: impl Iterator<Item = (K, T)>) -> Vec<Vec<T>> {
    let mut slot: BTreeMap<K, usize> = BTreeMap::new();
    let mut groups: Vec<Vec<T>> = Vec::new();
    for (key, item) in items {
        let i = *slot.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[i].push(item);
    }
    groups
}

/// Edges grouped by connected component. Isolated vertices contribute nothing.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn edge_components<G: Undirected>(graph: &G) -> Vec<Vec<Edge<G::Vertex>>> {
    let mut uf = partition(graph);
    let groups = group(
        graph
            .edges()
            .map(|(v, w)| (uf.find(&v), (v.clone(), w.clone()))),
    );
    debug!(components = groups.len(), "edge components");
    groups
}

/// [`edge_components`] with each edge's weight attached.
pub fn weighted_edge_components<G: Undirected + Weighted>(
    graph: &G,
) -> Vec<Vec<WeightedEdge<G::Vertex>>> {
    let mut uf = partition(graph);
    group(
        graph
            .weighted_edges()
            .map(|(v, w, x)| (uf.find(&v), (v.clone(), w.clone(), x))),
    )
}

/// Vertices grouped by connected component, including isolated vertices.
pub fn vertex_components<G: Undirected>(graph: &G) -> Vec<Vec<G::Vertex>> {
    let mut uf = partition(graph);
    group(graph.vertices().map(|v| (uf.find(&v), v.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adjgraph_core::graph::{UndirectedGraph, WeightedUndirectedGraph};

    #[test]
    fn edges_grouped_in_first_seen_order() {
        let mut g = UndirectedGraph::new();
        g.add(1, 2);
        g.add(1, 2);
        g.add(3, 4);
        g.add(1, 3);
        g.delete(&1, &3);
        g.add(5, 6);
        g.add(6, 7);
        g.add(5, 7);

        assert_eq!(
            edge_components(&g),
            vec![vec![(1, 2)], vec![(3, 4)], vec![(5, 6), (5, 7), (6, 7)]]
        );
    }

    #[test]
    fn weighted_components_carry_weights() {
        let mut g = WeightedUndirectedGraph::new();
        g.add(1, 2, 1.0);
        g.add(1, 2, 2.0);
        g.add(3, 4, 3.0);
        g.add(1, 3, 4.0);
        g.add(1, 2, 0.0);
        g.delete(&1, &3);
        g.add(5, 6, 1.0);
        g.add(6, 7, 2.0);
        g.add(5, 7, 3.0);

        assert_eq!(
            weighted_edge_components(&g),
            vec![
                vec![(1, 2, 0.0)],
                vec![(3, 4, 3.0)],
                vec![(5, 6, 1.0), (5, 7, 3.0), (6, 7, 2.0)],
            ]
        );
    }

    #[test]
    fn vertex_components_include_isolated_vertices() {
        let mut g = UndirectedGraph::from_edges([("a", "b"), ("c", "d"), ("b", "e")]);
        g.add_vertex("z");
        assert_eq!(
            vertex_components(&g),
            vec![vec!["a", "b", "e"], vec!["c", "d"], vec!["z"]]
        );
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g: UndirectedGraph<u8> = UndirectedGraph::new();
        assert!(edge_components(&g).is_empty());
        assert!(vertex_components(&g).is_empty());
    }
}
