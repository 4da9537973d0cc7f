//! Full-reduction benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench reduce
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use petrick_rs::function::Function;
use petrick_rs::reduce::{minimize, reduce};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random function of `width` inputs: each combination is required with
/// probability 3/8 and a don't-care with probability 1/8.
fn random_function(rng: &mut impl Rng, width: u32) -> (Vec<u32>, Vec<u32>) {
    let mut minterms = Vec::new();
    let mut dont_cares = Vec::new();
    for value in 0..(1u32 << width) {
        match rng.gen_range(0..8) {
            0..=2 => minterms.push(value),
            3 => dont_cares.push(value),
            _ => {}
        }
    }
    (minterms, dont_cares)
}

fn bench_random_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_functions");

    for width in [3, 4, 5, 6] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let functions: Vec<_> = (0..16).map(|_| random_function(&mut rng, width)).collect();
        group.throughput(Throughput::Elements(functions.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(width), &functions, |b, functions| {
            b.iter(|| {
                for (minterms, dont_cares) in functions {
                    let r = minimize("Q", width, minterms, dont_cares).unwrap();
                    std::hint::black_box(r.operation_count);
                }
            });
        });
    }

    group.finish();
}

fn bench_parity(c: &mut Criterion) {
    let mut group = c.benchmark_group("parity");

    // Parity has no adjacent minterms: 2^(n-1) primes, all essential
    for width in [4, 6, 8] {
        let minterms: Vec<u32> = (0..(1u32 << width)).filter(|v| v.count_ones() % 2 == 1).collect();
        group.bench_with_input(BenchmarkId::from_parameter(width), &minterms, |b, minterms| {
            b.iter(|| minimize("Q", width, minterms, &[]).unwrap());
        });
    }

    group.finish();
}

fn bench_cyclic_chart(c: &mut Criterion) {
    // Σm(0,1,2,5,6,7) has no essential prime, forcing a real Petrick expansion
    c.bench_function("cyclic_chart", |b| {
        b.iter(|| {
            let mut f = Function::new("Q", 3, &[0, 1, 2, 5, 6, 7], &[]).unwrap();
            reduce(&mut f).unwrap()
        });
    });
}

criterion_group!(benches, bench_random_functions, bench_parity, bench_cyclic_chart);

criterion_main!(benches);
