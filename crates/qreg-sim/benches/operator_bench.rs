//! Benchmarks for operator expansion and sampling
//!
//! Run with: cargo bench -p qreg-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qreg_gates::{GateCatalog, GateDefinition};
use qreg_sim::Register;
use qreg_sim::operator::{expand_controlled, expand_single};

/// Benchmark building the full-register operator
fn bench_expansion(c: &mut Criterion) {
    let catalog = GateCatalog::standard();
    let Ok(GateDefinition::Single { matrix: h }) = catalog.get("h") else {
        return;
    };
    let Ok(GateDefinition::Controlled { base: x }) = catalog.get("cx") else {
        return;
    };

    let mut group = c.benchmark_group("operator_expansion");
    for num_qubits in &[2, 4, 6, 8] {
        group.bench_with_input(
            BenchmarkId::new("single", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| expand_single(black_box(h), black_box(n / 2), n).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("controlled", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| expand_controlled(black_box(x), 0, black_box(n - 1), n).unwrap());
            },
        );
    }
    group.finish();
}

/// Benchmark a GHZ preparation end to end
fn bench_ghz(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz");
    for num_qubits in &[3, 6, 8] {
        group.bench_with_input(BenchmarkId::new("prepare", num_qubits), num_qubits, |b, &n| {
            b.iter(|| {
                let mut reg = Register::new(n).unwrap();
                reg.h(0).unwrap();
                for q in 1..n {
                    reg.cx(q - 1, q).unwrap();
                }
                reg
            });
        });
    }
    group.finish();
}

/// Benchmark shot sampling
fn bench_sampling(c: &mut Criterion) {
    let mut reg = Register::new(8).unwrap();
    for q in 0..8 {
        reg.h(q).unwrap();
    }
    let mut group = c.benchmark_group("sampling");
    for shots in &[100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("uniform_8q", shots), shots, |b, &s| {
            b.iter(|| reg.sample_seeded(black_box(s), 42).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_expansion, bench_ghz, bench_sampling);
criterion_main!(benches);
