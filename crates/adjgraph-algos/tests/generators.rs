#![allow(dead_code)]

use adjgraph_core::graph::{WeightedDirectedGraph, WeightedUndirectedGraph};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Whole-number weights so path sums compare exactly.
pub fn arb_weight(min: i32, max: i32) -> impl Strategy<Value = f64> + Clone {
    (min..max).prop_map(f64::from)
}

pub fn arb_weighted_edges(
    max_vertex: u8,
    max_len: usize,
    min_weight: i32,
) -> impl Strategy<Value = Vec<(u8, u8, f64)>> + Clone {
    prop::collection::vec(
        (0..max_vertex, 0..max_vertex, arb_weight(min_weight, 40)),
        0..max_len,
    )
}

/// Undirected graph whose vertices `0..n` hang off a random spanning tree,
/// plus extra edges among them. Always connected.
pub fn arb_connected(
    max_vertex: u8,
    extra: usize,
) -> impl Strategy<Value = WeightedUndirectedGraph<u8>> {
    (
        prop::collection::vec((any::<u8>(), arb_weight(-20, 40)), 1..usize::from(max_vertex)),
        prop::collection::vec((any::<u8>(), any::<u8>(), arb_weight(-20, 40)), 0..extra),
    )
        .prop_map(|(spine, extra)| {
            let mut g = WeightedUndirectedGraph::new();
            let mut n = 1u8;
            for (seed, x) in spine {
                g.add(seed % n, n, x);
                n += 1;
            }
            for (v, w, x) in extra {
                g.add(v % n, w % n, x);
            }
            g
        })
}

pub fn arb_undirected(
    max_vertex: u8,
    max_len: usize,
) -> impl Strategy<Value = WeightedUndirectedGraph<u8>> {
    arb_weighted_edges(max_vertex, max_len, -20).prop_map(WeightedUndirectedGraph::from_edges)
}

/// Directed graph with non-negative weights.
pub fn arb_nonnegative_digraph(
    max_vertex: u8,
    max_len: usize,
) -> impl Strategy<Value = WeightedDirectedGraph<u8>> {
    arb_weighted_edges(max_vertex, max_len, 0).prop_map(WeightedDirectedGraph::from_edges)
}

/// Seeded weighted digraph with `vertices` vertices and about `edges` arcs.
pub fn random_weighted(seed: u64, vertices: u32, edges: usize) -> WeightedDirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = WeightedDirectedGraph::new();
    for v in 0..vertices {
        g.add_vertex(v);
    }
    for _ in 0..edges {
        let v = rng.gen_range(0..vertices);
        let w = rng.gen_range(0..vertices);
        g.add(v, w, f64::from(rng.gen_range(0..100u32)));
    }
    g
}

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
