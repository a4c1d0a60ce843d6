/// AstraPrep Criterion Benchmark Suite
///
/// Covers:
///   - Full compile pipeline over random selections at several widths
///   - Dense selections (every basis state) where the tree is complete
///   - Partitioner traversal alone
///   - Fusion over a duplicate-heavy raw stream
use astraprep::compiler::{self, partition};
use astraprep::core::index_to_bitstring;
use astraprep::optimizer::fuse;
use astraprep::CompilerConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_indices(width: usize, count: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, 1usize << width, count)
        .into_iter()
        .map(|i| i as i64)
        .collect()
}

// ── Compile pipeline ──────────────────────────────────────────────────────

fn bench_compile_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_random");
    for width in [6usize, 9, 12, 16] {
        let indices = random_indices(width, 64, 42);
        group.bench_with_input(BenchmarkId::new("w", width), &indices, |b, indices| {
            b.iter(|| compiler::compile(black_box(indices), width).unwrap())
        });
    }
    group.finish();
}

fn bench_compile_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_dense");
    for width in [4usize, 8, 10] {
        let indices: Vec<i64> = (0..(1i64 << width)).collect();
        group.bench_with_input(BenchmarkId::new("w", width), &indices, |b, indices| {
            b.iter(|| compiler::compile(black_box(indices), width).unwrap())
        });
    }
    group.finish();
}

// ── Stages ────────────────────────────────────────────────────────────────

fn bench_partition(c: &mut Criterion) {
    let width = 12;
    let strings: Vec<_> = random_indices(width, 256, 7)
        .into_iter()
        .map(|i| index_to_bitstring(i, width).unwrap())
        .collect();
    c.bench_function("partition_w12_256", |b| {
        b.iter(|| partition(black_box(&strings), 0, width))
    });
}

fn bench_fuse_duplicates(c: &mut Criterion) {
    let width = 9;
    let mut indices = random_indices(width, 128, 11);
    indices.sort_unstable();
    let doubled: Vec<i64> = indices.iter().flat_map(|&i| [i, i, i]).collect();
    let config = CompilerConfig::default().with_width(width);
    let raw = compiler::raw_instructions(&doubled, &config).unwrap();
    c.bench_function("fuse_w9_tripled_128", |b| {
        b.iter(|| fuse(black_box(raw.clone())))
    });
}

// ── Groups ────────────────────────────────────────────────────────────────

criterion_group!(pipeline_benches, bench_compile_random, bench_compile_dense);
criterion_group!(stage_benches, bench_partition, bench_fuse_duplicates);

criterion_main!(pipeline_benches, stage_benches);
