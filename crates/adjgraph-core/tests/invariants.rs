//! Property tests for structural invariants and algorithm contracts.

use std::collections::BTreeSet;

use adjgraph_core::bridges::find_bridges;
use adjgraph_core::graph::{
    Adjacency, Directed, DirectedGraph, UndirectedGraph, Weighted, WeightedDirectedGraph,
    WeightedUndirectedGraph,
};
use adjgraph_core::order::{
    Component, Condensation, strongly_connected_components, topological_sort,
};
use proptest::prelude::*;

use generators::*;

fn reachable(g: &DirectedGraph<u8>, from: u8) -> BTreeSet<u8> {
    let mut seen = BTreeSet::from([from]);
    let mut stack = vec![from];
    while let Some(v) = stack.pop() {
        for &w in g.adj(&v) {
            if seen.insert(w) {
                stack.push(w);
            }
        }
    }
    seen
}

fn is_connected_without(g: &UndirectedGraph<u8>, skip: (u8, u8)) -> bool {
    let (a, b) = skip;
    let mut seen = BTreeSet::from([a]);
    let mut stack = vec![a];
    while let Some(v) = stack.pop() {
        for &w in g.adj(&v) {
            let key = (v.min(w), v.max(w));
            if key == skip {
                continue;
            }
            if seen.insert(w) {
                stack.push(w);
            }
        }
    }
    seen.contains(&b)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    // Structure

    #[test]
    fn directed_edge_count_matches_enumeration(ops in arb_ops(12, 60)) {
        let mut g = WeightedDirectedGraph::new();
        for op in &ops {
            apply_directed(&mut g, op);
        }
        prop_assert_eq!(g.num_edges(), g.edges().count());
        for v in g.vertices() {
            prop_assert!(g.degree(v) > 0 || g.in_degree(v) > 0);
        }
    }

    #[test]
    fn undirected_edge_count_matches_enumeration(ops in arb_ops(12, 60)) {
        let mut g = WeightedUndirectedGraph::new();
        for op in &ops {
            apply_undirected(&mut g, op);
        }
        prop_assert_eq!(g.num_edges(), g.edges().count());
        for (v, w) in g.edges() {
            prop_assert!(v <= w);
            prop_assert!(g.has(w, v));
        }
    }

    #[test]
    fn weighted_total_matches_sum(ops in arb_ops(10, 80)) {
        let mut directed = WeightedDirectedGraph::new();
        let mut undirected = WeightedUndirectedGraph::new();
        for op in &ops {
            apply_directed(&mut directed, op);
            apply_undirected(&mut undirected, op);
        }
        let d_sum: f64 = directed.weighted_edges().map(|(_, _, x)| x).sum();
        let u_sum: f64 = undirected.weighted_edges().map(|(_, _, x)| x).sum();
        prop_assert_eq!(directed.total_weight(), d_sum);
        prop_assert_eq!(undirected.total_weight(), u_sum);
    }

    #[test]
    fn fractional_total_matches_sum_within_rounding(ops in arb_fractional_ops(10, 80)) {
        let mut directed = WeightedDirectedGraph::new();
        let mut undirected = WeightedUndirectedGraph::new();
        for op in &ops {
            apply_directed(&mut directed, op);
            apply_undirected(&mut undirected, op);
        }
        let d_sum: f64 = directed.weighted_edges().map(|(_, _, x)| x).sum();
        let u_sum: f64 = undirected.weighted_edges().map(|(_, _, x)| x).sum();
        prop_assert!((directed.total_weight() - d_sum).abs() < 1e-9);
        prop_assert!((undirected.total_weight() - u_sum).abs() < 1e-9);
    }

    #[test]
    fn double_reverse_is_identity(g in arb_digraph(16, 60)) {
        let rr = g.reverse().reverse();
        prop_assert_eq!(
            rr.edges().collect::<Vec<_>>(),
            g.edges().collect::<Vec<_>>()
        );
        prop_assert_eq!(
            rr.vertices().collect::<Vec<_>>(),
            g.vertices().collect::<Vec<_>>()
        );
    }

    // Orderings

    #[test]
    fn topological_sort_respects_arcs_on_dags(g in arb_dag(20, 60)) {
        let order = topological_sort(&g);
        prop_assert_eq!(order.len(), g.num_vertices());
        let pos = |x: u8| order.iter().position(|&y| y == x);
        for (v, w) in g.edges() {
            prop_assert!(pos(*v) < pos(*w));
        }
    }

    #[test]
    fn scc_is_a_partition(g in arb_digraph(16, 50)) {
        let sccs = strongly_connected_components(&g);
        let mut seen = BTreeSet::new();
        for c in &sccs {
            for v in c.members() {
                prop_assert!(seen.insert(*v), "vertex {} appears twice", v);
            }
        }
        let all: BTreeSet<u8> = g.vertices().copied().collect();
        prop_assert_eq!(seen, all);
    }

    #[test]
    fn scc_members_reach_each_other(g in arb_digraph(14, 40)) {
        for c in strongly_connected_components(&g) {
            if let Component::Cycle(members) = c {
                for &a in &members {
                    let from_a = reachable(&g, a);
                    for b in &members {
                        prop_assert!(from_a.contains(b));
                    }
                }
            }
        }
    }

    #[test]
    fn scc_vertices_do_not_share_a_cycle(g in arb_digraph(14, 40)) {
        for c in strongly_connected_components(&g) {
            if let Component::Vertex(v) = c {
                let onward = reachable(&g, v);
                for w in onward.iter().filter(|&&w| w != v) {
                    prop_assert!(!reachable(&g, *w).contains(&v));
                }
            }
        }
    }

    #[test]
    fn arcs_between_components_point_forward(g in arb_digraph(16, 50)) {
        let cond = Condensation::new(&g);
        for (v, w) in g.edges() {
            let (cv, cw) = (cond.component_of(v), cond.component_of(w));
            prop_assert!(cv.is_some() && cw.is_some());
            prop_assert!(cv <= cw, "arc {} -> {} points backwards", v, w);
        }
    }

    // Bridges

    #[test]
    fn bridges_are_exactly_the_cut_edges(g in arb_undirected(12, 24)) {
        let bridges = find_bridges(&g);
        for (v, w) in g.edges() {
            if v == w {
                continue;
            }
            let cut = !is_connected_without(&g, (*v, *w));
            prop_assert_eq!(bridges.contains(&(*v, *w)), cut, "edge ({}, {})", v, w);
        }
    }
}
