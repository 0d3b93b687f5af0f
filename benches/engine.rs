//! Benchmarks for the cube engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rubik_engine::scramble::batch;
use rubik_engine::*;

/// Benchmark a single quarter turn on a scrambled cube.
fn bench_apply(c: &mut Criterion) {
    let cube = random_scramble(25, 1234).cube;
    let mv = Move(Face::Right, Turn::Cw);

    c.bench_function("apply_move", |b| b.iter(|| black_box(&cube).apply(black_box(mv))));
}

fn bench_scramble(c: &mut Criterion) {
    c.bench_function("random_scramble_25", |b| {
        b.iter(|| random_scramble(25, black_box(1234)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let seeds = (0..64).collect::<Vec<u32>>();
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);
    group.bench_function("batch_64x25", |b| b.iter(|| batch(25, black_box(&seeds))));
    group.finish();
}

/// Benchmark simplifying a sequence that cancels back to nothing.
fn bench_simplify(c: &mut Criterion) {
    let mut movs = random_scramble(50, 7).movs;
    movs.extend(movs.clone().iter().rev().map(|mv| mv.inverse()));

    c.bench_function("simplify_moves", |b| {
        b.iter(|| simplify_moves(black_box(&movs)))
    });
}

criterion_group!(benches, bench_apply, bench_scramble, bench_batch, bench_simplify);
criterion_main!(benches);
