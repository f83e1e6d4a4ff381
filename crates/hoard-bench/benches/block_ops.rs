//! Criterion micro-benchmarks for block construction, duplication,
//! transfer, and concatenation.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hoard::Block;
use hoard_bench::{sequential_block, striped_block};

fn bench_zeroed(c: &mut Criterion) {
    c.bench_function("zeroed_10k", |b| {
        b.iter(|| Block::zeroed(black_box(10_000)))
    });
}

fn bench_clone(c: &mut Criterion) {
    let block = sequential_block(10_000);
    c.bench_function("clone_10k", |b| b.iter(|| Block::clone(black_box(&block))));
}

fn bench_clone_from_same_len(c: &mut Criterion) {
    let source = sequential_block(10_000);
    let mut dest = Block::zeroed(10_000);
    c.bench_function("clone_from_same_len_10k", |b| {
        b.iter(|| dest.clone_from(black_box(&source)))
    });
}

fn bench_concat(c: &mut Criterion) {
    let lhs = sequential_block(5_000);
    let rhs = striped_block(5_000);
    c.bench_function("concat_5k_5k", |b| {
        b.iter(|| black_box(&lhs).concat(black_box(&rhs)))
    });
}

fn bench_take(c: &mut Criterion) {
    c.bench_function("take_10k", |b| {
        b.iter_batched(
            || sequential_block(10_000),
            |mut block| block.take(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_zeroed,
    bench_clone,
    bench_clone_from_same_len,
    bench_concat,
    bench_take
);
criterion_main!(benches);
