#![allow(
    dead_code,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use adjgraph_core::graph::{DirectedGraph, UndirectedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct GraphTier {
    pub name: &'static str,
    pub vertices: u32,
    pub edges: usize,
}

pub const TIER_S: GraphTier = GraphTier {
    name: "S",
    vertices: 1_000,
    edges: 500,
};

pub const TIER_M: GraphTier = GraphTier {
    name: "M",
    vertices: 10_000,
    edges: 5_000,
};

pub const TIER_L: GraphTier = GraphTier {
    name: "L",
    vertices: 100_000,
    edges: 150_000,
};

pub const TIERS: [GraphTier; 3] = [TIER_S, TIER_M, TIER_L];

#[derive(Clone, Copy, Debug)]
pub struct RunSpread {
    pub fastest: Duration,
    pub median: Duration,
    pub slowest: Duration,
}

/// Cap the tier size with `ADJGRAPH_BENCH_MAX_VERTICES` (default 10,000).
pub fn bench_tier(tier: GraphTier) -> GraphTier {
    let max_vertices = std::env::var("ADJGRAPH_BENCH_MAX_VERTICES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(10_000);
    if tier.vertices <= max_vertices {
        return tier;
    }
    let ratio = tier.edges as f64 / f64::from(tier.vertices);
    GraphTier {
        name: tier.name,
        vertices: max_vertices,
        edges: (f64::from(max_vertices) * ratio) as usize,
    }
}

pub fn directed_for_bench(tier: GraphTier, seed: u64) -> DirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = DirectedGraph::new();
    for v in 0..tier.vertices {
        g.add_vertex(v);
    }
    for _ in 0..tier.edges {
        g.add(rng.gen_range(0..tier.vertices), rng.gen_range(0..tier.vertices));
    }
    g
}

pub fn undirected_for_bench(tier: GraphTier, seed: u64) -> UndirectedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = UndirectedGraph::new();
    for v in 0..tier.vertices {
        g.add_vertex(v);
    }
    for _ in 0..tier.edges {
        g.add(rng.gen_range(0..tier.vertices), rng.gen_range(0..tier.vertices));
    }
    g
}

/// A single path `0 → 1 → … → n-1`, the worst case for DFS depth.
pub fn deep_chain(n: u32) -> DirectedGraph<u32> {
    DirectedGraph::from_edges((0..n.saturating_sub(1)).map(|i| (i, i + 1)))
}

/// Wall-clock spread of `runs` calls to `op`, for the one-line summaries the
/// benches print next to criterion's output.
pub fn time_runs(runs: usize, mut op: impl FnMut()) -> RunSpread {
    assert!(runs > 0, "need at least one run");
    let mut times: Vec<Duration> = (0..runs)
        .map(|_| {
            let t0 = Instant::now();
            op();
            t0.elapsed()
        })
        .collect();
    times.sort_unstable();
    RunSpread {
        fastest: times[0],
        median: times[times.len() / 2],
        slowest: times[times.len() - 1],
    }
}
