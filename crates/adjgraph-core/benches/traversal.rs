//! Traversal, SCC and bridge benchmarks over seeded random graphs.
//!
//! Tiers above `ADJGRAPH_BENCH_MAX_VERTICES` (default 10,000) are scaled down
//! keeping their edge/vertex ratio.
//!
//! Run with:
//! ```sh
//! cargo bench --bench traversal
//! ADJGRAPH_BENCH_MAX_VERTICES=100000 cargo bench --bench traversal  # full tier L
//! ```

mod support;

use adjgraph_core::bridges::find_bridges;
use adjgraph_core::order::{strongly_connected_components, topological_sort};
use adjgraph_core::traversal::post_order;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use support::{TIERS, bench_tier, deep_chain, directed_for_bench, time_runs, undirected_for_bench};

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal.tiered");

    for tier in TIERS.map(bench_tier) {
        let directed = directed_for_bench(tier, 0xD1_u64 + u64::from(tier.vertices));
        let undirected = undirected_for_bench(tier, 0xB2_u64 + u64::from(tier.vertices));
        group.throughput(Throughput::Elements(u64::from(tier.vertices)));

        group.bench_with_input(
            BenchmarkId::new("post_order", tier.name),
            &directed,
            |b, g| b.iter(|| black_box(post_order(g).count())),
        );

        group.bench_with_input(
            BenchmarkId::new("topological_sort", tier.name),
            &directed,
            |b, g| b.iter(|| black_box(topological_sort(g))),
        );

        group.bench_with_input(BenchmarkId::new("scc", tier.name), &directed, |b, g| {
            b.iter(|| black_box(strongly_connected_components(g)))
        });

        group.bench_with_input(
            BenchmarkId::new("bridges", tier.name),
            &undirected,
            |b, g| b.iter(|| black_box(find_bridges(g))),
        );

        let scc = time_runs(16, || {
            black_box(strongly_connected_components(&directed));
        });
        eprintln!(
            "tier={} op=scc vertices={} fastest={:?} median={:?} slowest={:?}",
            tier.name, tier.vertices, scc.fastest, scc.median, scc.slowest
        );
    }

    group.finish();
}

fn bench_deep_chain(c: &mut Criterion) {
    let chain = deep_chain(100_000);
    c.bench_function("traversal.deep_chain_100k", |b| {
        b.iter(|| black_box(post_order(&chain).count()));
    });
}

criterion_group!(benches, bench_traversal, bench_deep_chain);
criterion_main!(benches);
