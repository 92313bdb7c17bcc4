//! Minimum spanning trees of weighted undirected graphs.
//!
//! # Algorithms
//!
//! | function    | grows the tree by                                   | time        |
//! |-------------|-----------------------------------------------------|-------------|
//! | [`kruskal`] | globally lightest edge joining two components       | O(E log E)  |
//! | [`prim`]    | lightest edge leaving the tree around `start`       | O(E log E)  |
//! | [`boruvka`] | lightest edge leaving every component, per round    | O(E log V)  |
//!
//! Edges are compared by weight, then by canonical `(min, max)` key, so the
//! order is strict and all three produce the same tree on a connected graph.
//! Kruskal, Boruvka and [`prim_forest`] return a spanning forest for
//! disconnected input; [`prim`] only spans the component of `start`.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use adjgraph_core::graph::{Adjacency, Undirected, Weighted, WeightedUndirectedGraph};
use tracing::{debug, instrument, trace};

use crate::error::AlgoError;
use crate::ordered::OrderedWeight;
use crate::union_find::UnionFind;

/// Strict edge order: weight, then canonical endpoints.
type EdgeKey<'g, V> = (OrderedWeight, &'g V, &'g V);

fn edge_key<'g, V: Ord>(v: &'g V, w: &'g V, weight: f64) -> EdgeKey<'g, V> {
    if v <= w {
        (OrderedWeight(weight), v, w)
    } else {
        (OrderedWeight(weight), w, v)
    }
}

/// Selects a spanning-tree algorithm at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MstStrategy {
    #[default]
    Kruskal,
    /// [`prim_forest`]: Prim restarted in every component.
    Prim,
    Boruvka,
}

impl MstStrategy {
    /// Run the selected algorithm on `graph`.
    pub fn run<G: Undirected + Weighted>(self, graph: &G) -> WeightedUndirectedGraph<G::Vertex> {
        match self {
            Self::Kruskal => kruskal(graph),
            Self::Boruvka => boruvka(graph),
            Self::Prim => prim_forest(graph),
        }
    }
}

/// Kruskal: scan edges lightest first, keep those that join two components.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn kruskal<G: Undirected + Weighted>(graph: &G) -> WeightedUndirectedGraph<G::Vertex> {
    let mut edges: Vec<EdgeKey<'_, G::Vertex>> = graph
        .weighted_edges()
        .map(|(v, w, weight)| edge_key(v, w, weight))
        .collect();
    edges.sort_unstable();

    let mut uf: UnionFind<&G::Vertex> = graph.vertices().collect();
    let mut tree = WeightedUndirectedGraph::new();
    let target = graph.num_vertices().saturating_sub(1);

    for (weight, v, w) in edges {
        if tree.num_edges() >= target {
            break;
        }
        if uf.union(v, w) {
            trace!(?v, ?w, weight = weight.0, "kruskal accepts edge");
            tree.add(v.clone(), w.clone(), weight.0);
        }
    }

    debug!(edges = tree.num_edges(), total = tree.total_weight(), "kruskal complete");
    tree
}

/// Prim: grow one tree outward from `start`.
///
/// # Errors
///
/// Returns [`AlgoError::MissingSource`] if `start` is not a vertex of `graph`.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn prim<G: Undirected + Weighted>(
    graph: &G,
    start: &G::Vertex,
) -> Result<WeightedUndirectedGraph<G::Vertex>, AlgoError> {
    let Some(root) = graph.vertices().find(|v| *v == start) else {
        return Err(AlgoError::missing_source(start));
    };

    let mut tree = WeightedUndirectedGraph::new();
    grow(graph, root, &mut BTreeSet::new(), &mut tree);

    debug!(edges = tree.num_edges(), total = tree.total_weight(), "prim complete");
    Ok(tree)
}

/// Prim over every component: restart from the smallest vertex not yet
/// spanned until none is left. Returns the same forest as [`kruskal`].
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn prim_forest<G: Undirected + Weighted>(graph: &G) -> WeightedUndirectedGraph<G::Vertex> {
    let mut tree = WeightedUndirectedGraph::new();
    let mut seen: BTreeSet<&G::Vertex> = BTreeSet::new();
    let mut trees = 0_usize;

    for root in graph.vertices() {
        if !seen.contains(root) {
            grow(graph, root, &mut seen, &mut tree);
            trees += 1;
        }
    }

    debug!(
        trees,
        edges = tree.num_edges(),
        total = tree.total_weight(),
        "prim forest complete"
    );
    tree
}

/// Grow one tree from `root`, skipping vertices already in `seen`.
fn grow<'g, G: Weighted>(
    graph: &'g G,
    root: &'g G::Vertex,
    seen: &mut BTreeSet<&'g G::Vertex>,
    tree: &mut WeightedUndirectedGraph<G::Vertex>,
) {
    seen.insert(root);
    let mut heap = BinaryHeap::new();
    push_frontier(graph, root, seen, &mut heap);

    while let Some(Reverse(((weight, _, _), from, to))) = heap.pop() {
        if !seen.insert(to) {
            continue;
        }
        trace!(?from, ?to, weight = weight.0, "prim accepts edge");
        tree.add(from.clone(), to.clone(), weight.0);
        push_frontier(graph, to, seen, &mut heap);
    }
}

/// Heap entry: edge key, tree endpoint, new endpoint.
type Crossing<'g, V> = Reverse<(EdgeKey<'g, V>, &'g V, &'g V)>;

fn push_frontier<'g, G: Weighted>(
    graph: &'g G,
    v: &'g G::Vertex,
    seen: &BTreeSet<&'g G::Vertex>,
    heap: &mut BinaryHeap<Crossing<'g, G::Vertex>>,
) {
    for (w, weight) in graph.weighted_adj(v) {
        if !seen.contains(w) {
            heap.push(Reverse((edge_key(v, w, weight), v, w)));
        }
    }
}

/// Boruvka: each round, every component adds its lightest outgoing edge.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn boruvka<G: Undirected + Weighted>(graph: &G) -> WeightedUndirectedGraph<G::Vertex> {
    let mut uf: UnionFind<&G::Vertex> = graph.vertices().collect();
    let mut tree = WeightedUndirectedGraph::new();
    let mut rounds = 0_usize;

    loop {
        let mut cheapest: BTreeMap<usize, EdgeKey<'_, G::Vertex>> = BTreeMap::new();
        for (v, w, weight) in graph.weighted_edges() {
            let (Some(rv), Some(rw)) = (uf.find(&v), uf.find(&w)) else {
                continue;
            };
            if rv == rw {
                continue;
            }
            let key = edge_key(v, w, weight);
            for root in [rv, rw] {
                cheapest
                    .entry(root)
                    .and_modify(|best| {
                        if key < *best {
                            *best = key;
                        }
                    })
                    .or_insert(key);
            }
        }

        if cheapest.is_empty() {
            break;
        }
        rounds += 1;

        for (weight, v, w) in cheapest.into_values() {
            if uf.union(v, w) {
                tree.add(v.clone(), w.clone(), weight.0);
            }
        }
    }

    debug!(
        rounds,
        edges = tree.num_edges(),
        total = tree.total_weight(),
        "boruvka complete"
    );
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeightedUndirectedGraph<&'static str> {
        WeightedUndirectedGraph::from_edges([
            ("a", "b", 3.0),
            ("a", "c", 4.0),
            ("b", "c", 3.0),
            ("c", "d", 2.0),
        ])
    }

    fn edge_list(
        tree: &WeightedUndirectedGraph<&'static str>,
    ) -> Vec<(&'static str, &'static str, f64)> {
        tree.weighted_edges().map(|(v, w, x)| (*v, *w, x)).collect()
    }

    #[test]
    fn every_strategy_finds_the_same_tree() {
        let g = sample();
        let expected = vec![("a", "b", 3.0), ("b", "c", 3.0), ("c", "d", 2.0)];

        for tree in [
            kruskal(&g),
            boruvka(&g),
            prim(&g, &"a").expect("start exists"),
            prim(&g, &"d").expect("start exists"),
        ] {
            assert_eq!(edge_list(&tree), expected);
            assert!((tree.total_weight() - 8.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn strategy_enum_dispatches() {
        let g = sample();
        for strategy in [MstStrategy::Kruskal, MstStrategy::Prim, MstStrategy::Boruvka] {
            assert_eq!(strategy.run(&g).num_edges(), 3);
        }
        assert_eq!(MstStrategy::default(), MstStrategy::Kruskal);
    }

    #[test]
    fn prim_rejects_unknown_start() {
        let err = prim(&sample(), &"zz").expect_err("missing start");
        assert!(matches!(err, AlgoError::MissingSource(_)));
    }

    #[test]
    fn forest_for_disconnected_input() {
        let g = WeightedUndirectedGraph::from_edges([
            (1, 2, 1.0),
            (2, 3, 5.0),
            (1, 3, 2.0),
            (10, 11, 7.0),
        ]);
        let k = kruskal(&g);
        let b = boruvka(&g);
        assert_eq!(k.num_edges(), 3);
        assert!((k.total_weight() - 10.0).abs() < f64::EPSILON);
        assert!((b.total_weight() - 10.0).abs() < f64::EPSILON);

        let p = prim(&g, &10).expect("start exists");
        assert_eq!(p.num_edges(), 1);

        let forest = MstStrategy::Prim.run(&g);
        assert_eq!(
            forest.weighted_edges().collect::<Vec<_>>(),
            k.weighted_edges().collect::<Vec<_>>()
        );
        assert!((prim_forest(&g).total_weight() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn equal_weights_break_ties_by_key() {
        let g = WeightedUndirectedGraph::from_edges([(1, 2, 1.0), (2, 3, 1.0), (1, 3, 1.0)]);
        let expected = vec![(1, 2, 1.0), (1, 3, 1.0)];
        for tree in [kruskal(&g), boruvka(&g), prim(&g, &3).expect("start exists")] {
            let edges: Vec<_> = tree.weighted_edges().map(|(v, w, x)| (*v, *w, x)).collect();
            assert_eq!(edges, expected);
        }
    }

    #[test]
    fn self_loops_never_enter_the_tree() {
        let g = WeightedUndirectedGraph::from_edges([(1, 1, -5.0), (1, 2, 4.0)]);
        for tree in [kruskal(&g), boruvka(&g), prim(&g, &1).expect("start exists")] {
            assert_eq!(tree.num_edges(), 1);
            assert!(!tree.has(&1, &1));
        }
    }

    #[test]
    fn empty_graph_gives_empty_tree() {
        let g: WeightedUndirectedGraph<u8> = WeightedUndirectedGraph::new();
        assert_eq!(kruskal(&g).num_edges(), 0);
        assert_eq!(boruvka(&g).num_edges(), 0);
        assert_eq!(MstStrategy::Prim.run(&g).num_edges(), 0);
    }
}
