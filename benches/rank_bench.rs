//! Benchmarks for rank generation, insertion and stepping.
//!
//! Run with: cargo bench --bench rank_bench

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ranked::RankEngine;
use ranked::Ranker;

/// Insert `count` items at random positions into a list seeded with two ranks.
fn random_inserts(engine: &RankEngine, count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = engine.ranks(2);
    for _ in 0..count {
        let pos = rng.gen_range(0..=list.len());
        let rank = match pos {
            0 => engine.insert(ranked::RANK_MIN, &list[0]),
            p if p == list.len() => engine.insert(&list[p - 1], ranked::RANK_MAX),
            p => engine.insert(&list[p - 1], &list[p]),
        };
        list.insert(pos, rank);
    }
    return list;
}

fn bench_batch(c: &mut Criterion) {
    let engine = RankEngine::new(10).unwrap();
    let mut group = c.benchmark_group("batch");

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("ranks", size), &size, |b, &size| {
            b.iter(|| engine.ranks(black_box(size)));
        });
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let engine = RankEngine::new(10).unwrap();
    let mut group = c.benchmark_group("insert");

    group.bench_function("full_range", |b| {
        b.iter(|| engine.insert(black_box("0"), black_box("Z")));
    });

    // Always inserting at the front is the worst case for rank length.
    group.bench_function("front_1000", |b| {
        b.iter(|| {
            let mut hi = "1".to_string();
            for _ in 0..1_000 {
                hi = engine.insert("0", &hi);
            }
            hi
        });
    });

    for size in [100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("random", size), &size, |b, &size| {
            b.iter(|| random_inserts(&engine, size, 42));
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let engine = RankEngine::new(10).unwrap();
    let mut group = c.benchmark_group("step");

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("next_10000", |b| {
        b.iter(|| {
            let mut rank = "UMI".to_string();
            for _ in 0..10_000 {
                rank = engine.next(&rank).unwrap();
            }
            rank
        });
    });
    group.bench_function("prev_10000", |b| {
        b.iter(|| {
            let mut rank = "4DI".to_string();
            for _ in 0..10_000 {
                rank = engine.prev(&rank).unwrap();
            }
            rank
        });
    });

    group.finish();
}

criterion_group!(benches, bench_batch, bench_insert, bench_step);
criterion_main!(benches);
