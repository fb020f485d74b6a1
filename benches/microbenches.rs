//! Criterion microbenches for particlekit lookups.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - symbol parsing and the three public lookups
//! - a full fuzz-driver round (decode + lookups)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use particlekit::driver::{init, lookup_round};
use particlekit::{atomic_number, element_name, particle_mass};

const SYMBOLS: [&str; 6] = ["H", "Fe 3+", "He-4 2+", "alpha", "oganesson", "not-a-particle"];

/// Benchmark the atomic-number lookup across symbol shapes.
fn bench_atomic_number(c: &mut Criterion) {
    init();
    let mut group = c.benchmark_group("lookups");

    group.bench_function("atomic_number", |b| {
        b.iter(|| {
            for symbol in SYMBOLS {
                let _ = atomic_number(black_box(symbol));
            }
        })
    });

    group.finish();
}

/// Benchmark the mass lookup across symbol shapes.
fn bench_particle_mass(c: &mut Criterion) {
    init();
    let mut group = c.benchmark_group("lookups");

    group.bench_function("particle_mass", |b| {
        b.iter(|| {
            for symbol in SYMBOLS {
                let _ = particle_mass(black_box(symbol));
            }
        })
    });

    group.finish();
}

/// Benchmark the element-name lookup, in and out of range.
fn bench_element_name(c: &mut Criterion) {
    init();
    let mut group = c.benchmark_group("lookups");

    group.bench_function("element_name", |b| {
        b.iter(|| {
            for z in [0u64, 1, 26, 118, 119, u64::MAX] {
                let _ = element_name(black_box(z));
            }
        })
    });

    group.finish();
}

/// Benchmark one full fuzz-driver round over a fixed buffer.
fn bench_lookup_round(c: &mut Criterion) {
    init();
    let data = b"He-4 2+";
    let mut group = c.benchmark_group("driver");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("lookup_round", |b| {
        b.iter(|| {
            let _ = lookup_round(black_box(data));
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_atomic_number,
    bench_particle_mass,
    bench_element_name,
    bench_lookup_round
);
criterion_main!(benches);
