use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use algebra::{
    fields::{bls12_381, bn254, curve25519, goldilocks, mf254},
    Fp, FpParameters,
};

const SEED: u64 = 1231275789;

fn bench_field<P: FpParameters<N, B>, const N: usize, const B: u32>(
    c: &mut Criterion,
    name: &str,
) {
    let mut rng = XorShiftRng::seed_from_u64(SEED);
    let a: Fp<P, N, B> = rand::Rng::gen(&mut rng);
    let b: Fp<P, N, B> = rand::Rng::gen(&mut rng);
    let mut e = P::MODULUS;
    e.dec(2);

    let mut group = c.benchmark_group("Prime field");
    group.bench_with_input(BenchmarkId::new("mul", name), &(a, b), |bencher, (a, b)| {
        bencher.iter(|| *a * b)
    });
    group.bench_with_input(BenchmarkId::new("square", name), &a, |bencher, a| {
        bencher.iter(|| a.square())
    });
    group.bench_with_input(BenchmarkId::new("add", name), &(a, b), |bencher, (a, b)| {
        bencher.iter(|| *a + b)
    });
    group.bench_with_input(BenchmarkId::new("inverse", name), &a, |bencher, a| {
        bencher.iter(|| a.inverse())
    });
    group.bench_with_input(BenchmarkId::new("pow p-2", name), &a, |bencher, a| {
        bencher.iter(|| a.pow(&e))
    });
    group.finish();
}

pub fn benchmark(c: &mut Criterion) {
    bench_field::<bn254::FqParameters, 5, 56>(c, "BN254 (not special)");
    bench_field::<bls12_381::FqParameters, 7, 58>(c, "BLS12-381 (not special)");
    bench_field::<curve25519::FqParameters, 5, 56>(c, "Curve25519 (pseudo-Mersenne)");
    bench_field::<goldilocks::FqParameters, 8, 58>(c, "Goldilocks (generalised Mersenne)");
    bench_field::<mf254::FqParameters, 5, 56>(c, "MF254 (Montgomery-friendly)");
}

criterion_group!(
name = field_benchmark;
config = Criterion::default().sample_size(50);
targets = benchmark
);

criterion_main!(field_benchmark);
