//! Benchmarks for card_brand performance testing.
//!
//! Run with: cargo bench

use card_brand::{
    batch::{count_valid, summarize, validate_batch},
    detect, luhn,
    stream::ValidateExt,
    validate,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111-1111-1111-1111";
const MASTERCARD: &str = "5500000000000004";
const AMEX: &str = "378282246310005";
const DINERS: &str = "30569309025904";
const UNKNOWN: &str = "1234567890123456";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

/// Benchmark single card validation
fn bench_single_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_validation");

    group.bench_function("visa_16_raw", |b| b.iter(|| validate(black_box(VISA_16))));

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| validate(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("mastercard", |b| b.iter(|| validate(black_box(MASTERCARD))));

    group.bench_function("amex_15", |b| b.iter(|| validate(black_box(AMEX))));

    group.bench_function("diners_14", |b| b.iter(|| validate(black_box(DINERS))));

    group.bench_function("unknown_brand", |b| b.iter(|| validate(black_box(UNKNOWN))));

    group.finish();
}

/// Benchmark the classifier on its own
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("first_rule", |b| {
        b.iter(|| detect::classify(black_box(VISA_16)))
    });

    group.bench_function("last_rule", |b| {
        b.iter(|| detect::classify(black_box(DINERS)))
    });

    group.bench_function("no_match", |b| {
        b.iter(|| detect::classify(black_box(UNKNOWN)))
    });

    group.finish();
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("luhn_16_digits", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("luhn_16_str", |b| {
        b.iter(|| luhn::luhn_check(black_box(VISA_16)))
    });

    group.finish();
}

/// Benchmark batch validation with various sizes
fn bench_batch_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_validation");

    for size in [100, 1_000, 10_000] {
        let cards: Vec<&str> = (0..size)
            .map(|i| match i % 5 {
                0 => VISA_16,
                1 => MASTERCARD,
                2 => AMEX,
                3 => DINERS,
                _ => UNKNOWN,
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("validate_batch", size), &cards, |b, cards| {
            b.iter(|| validate_batch(black_box(cards)))
        });

        group.bench_with_input(BenchmarkId::new("count_valid", size), &cards, |b, cards| {
            b.iter(|| count_valid(black_box(cards)))
        });

        group.bench_with_input(BenchmarkId::new("summarize", size), &cards, |b, cards| {
            b.iter(|| summarize(black_box(cards)))
        });

        group.bench_with_input(BenchmarkId::new("stream", size), &cards, |b, cards| {
            b.iter(|| {
                black_box(cards)
                    .iter()
                    .copied()
                    .validate_cards()
                    .filter(|r| r.is_valid())
                    .count()
            })
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("count_valid_parallel", size),
            &cards,
            |b, cards| b.iter(|| card_brand::batch::count_valid_parallel(black_box(cards))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_validation,
    bench_classify,
    bench_luhn,
    bench_batch_validation
);
criterion_main!(benches);
