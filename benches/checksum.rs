use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rut::{Generator, Rut, compute_expected_check, normalize, validate_str};

fn bench_compute_expected_check(c: &mut Criterion) {
    c.bench_function("compute_expected_check", |b| {
        b.iter(|| compute_expected_check(black_box("12345678")));
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_grouped", |b| {
        b.iter(|| normalize(black_box("12.345.678-k")));
    });
}

fn bench_validate_str(c: &mut Criterion) {
    c.bench_function("validate_str", |b| {
        b.iter(|| validate_str(black_box("11.111.111-1")));
    });
}

fn bench_decimal_format(c: &mut Criterion) {
    let rut = Rut::parse("12345678-5").unwrap();
    c.bench_function("decimal_format", |b| {
        b.iter(|| black_box(&rut).decimal_format());
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut generator = Generator::with_seed(42);
    c.bench_function("generate", |b| {
        b.iter(|| generator.generate(black_box(5_000_000), black_box(23_000_000)));
    });
}

criterion_group!(
    benches,
    bench_compute_expected_check,
    bench_normalize,
    bench_validate_str,
    bench_decimal_format,
    bench_generate
);
criterion_main!(benches);
