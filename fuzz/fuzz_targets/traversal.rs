#![no_main]

use std::collections::BTreeSet;

use adjgraph_algos::{kruskal, vertex_components};
use adjgraph_core::graph::{Adjacency, DirectedGraph, WeightedUndirectedGraph};
use adjgraph_core::order::{Condensation, is_acyclic, topological_sort};
use adjgraph_core::{find_bridges, post_order};
use libfuzzer_sys::fuzz_target;

// Byte pairs are arcs; the same pairs feed an undirected graph.
fuzz_target!(|data: &[u8]| {
    let arcs: Vec<(u8, u8)> = data
        .chunks_exact(2)
        .map(|pair| (pair[0] % 32, pair[1] % 32))
        .collect();

    let g = DirectedGraph::from_edges(arcs.iter().copied());
    let visited: BTreeSet<&u8> = post_order(&g).collect();
    assert_eq!(visited.len(), g.num_vertices());
    assert_eq!(topological_sort(&g).len(), g.num_vertices());

    let condensed = Condensation::new(&g);
    assert!(is_acyclic(&condensed.dag));
    let members: usize = condensed.components.iter().map(|c| c.len()).sum();
    assert_eq!(members, g.num_vertices());

    let u: WeightedUndirectedGraph<u8> = arcs.iter().map(|&(v, w)| (v, w, 1.0)).collect();
    let bridges = find_bridges(&u);
    let forest = kruskal(&u);
    for (v, w) in &bridges {
        assert!(forest.has(v, w), "bridge ({v}, {w}) missing from spanning forest");
    }
    assert_eq!(
        forest.num_edges(),
        u.num_vertices() - vertex_components(&u).len()
    );
});
