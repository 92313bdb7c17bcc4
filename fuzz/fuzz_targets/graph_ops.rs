#![no_main]

use adjgraph_core::graph::{Adjacency, Weighted, WeightedDirectedGraph, WeightedUndirectedGraph};
use libfuzzer_sys::fuzz_target;

const VERTICES: u8 = 24;

fn check<G: Weighted>(g: &G) {
    assert_eq!(g.num_edges(), g.edges().count());
    assert_eq!(g.num_edges(), g.weighted_edges().count());
    let sum: f64 = g.weighted_edges().map(|(_, _, x)| x).sum();
    assert!((g.total_weight() - sum).abs() < 1e-6, "{} != {sum}", g.total_weight());
    for (v, w) in g.edges() {
        assert!(g.has(v, w));
        assert!(g.has_vertex(v) && g.has_vertex(w));
    }
}

// Each 4-byte chunk is one operation: kind, endpoints, signed weight.
fuzz_target!(|data: &[u8]| {
    let mut directed = WeightedDirectedGraph::new();
    let mut undirected = WeightedUndirectedGraph::new();

    for chunk in data.chunks_exact(4) {
        let (v, w) = (chunk[1] % VERTICES, chunk[2] % VERTICES);
        let weight = f64::from(i8::from_ne_bytes([chunk[3]]));
        match chunk[0] % 3 {
            0 => {
                directed.add(v, w, weight);
                undirected.add(v, w, weight);
            }
            1 => {
                directed.delete(&v, &w);
                undirected.delete(&v, &w);
                assert!(!directed.has(&v, &w));
                assert!(!undirected.has(&w, &v));
            }
            _ => {
                let had = directed.has(&v, &w);
                assert_eq!(directed.update_weight(&v, &w, weight).is_ok(), had);
                let _ = undirected.update_weight(&v, &w, weight);
            }
        }
    }

    check(&directed);
    check(&undirected);
});
