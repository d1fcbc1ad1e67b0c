use cla_multiplier::{
    Bit, Bits, Counters, Multiplier, Signal, Tick,
    adder::{add_middle, carry_select_add, lookahead_add},
};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::hint::black_box;

/// Operand widths to benchmark the multiplier at.
const WIDTHS: [usize; 4] = [8, 32, 128, 512];

/// Width of adder operands.
const ADD_BITS: usize = 1024;

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let multiplier = Multiplier::default();

    for width in WIDTHS {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter_batched(
                || (Bits::random(&mut rng, width), Bits::random(&mut rng, width)),
                |(x, y)| black_box(multiplier.multiply(&x, &y)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_adders(c: &mut Criterion) {
    let mut group = c.benchmark_group("adders");
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    group.bench_function("lookahead_add", |b| {
        b.iter_batched(
            || (Bits::random(&mut rng, ADD_BITS), Bits::random(&mut rng, ADD_BITS)),
            |(x, y)| black_box(lookahead_add(&x, &y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("carry_select_add", |b| {
        b.iter_batched(
            || (Bits::random(&mut rng, ADD_BITS), Bits::random(&mut rng, ADD_BITS)),
            |(x, y)| black_box(carry_select_add(&x, &y, Signal::new(Bit::ONE, Tick::new(6)))),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("add_middle", |b| {
        b.iter_batched(
            || {
                (
                    Bits::random(&mut rng, ADD_BITS),
                    Bits::random(&mut rng, ADD_BITS / 2),
                )
            },
            |(x, y)| black_box(add_middle(&x, &y, Tick::ZERO, &mut Counters::new())),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_adders);

criterion_main!(benches);
