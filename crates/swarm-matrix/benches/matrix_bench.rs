//! Benchmarks for the swarm node matrix
//!
//! Measures performance of:
//! - Entanglement graph construction
//! - Swarm coherence aggregation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use swarm_matrix::{catalog, entanglement, Layer, NodeMatrix, NodeSpec};

/// Synthetic matrix with every fifth node on the quantum layer.
fn synthetic(len: usize) -> Vec<NodeSpec> {
    (0..len)
        .map(|i| {
            let layer = if i % 5 == 0 { Layer::Quantum } else { Layer::ALL[i % 4] };
            NodeSpec::new(format!("N{i}"), "bench", layer, 0.8 + (i % 7) as f64 * 0.05)
        })
        .collect()
}

fn bench_entanglement(c: &mut Criterion) {
    let mut group = c.benchmark_group("entanglement_build");

    group.bench_function("canonical", |b| {
        let specs = catalog::canonical();
        b.iter(|| entanglement::build(black_box(&specs)))
    });

    for &len in &[26usize, 100, 500] {
        let specs = synthetic(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &specs, |b, specs| {
            b.iter(|| entanglement::build(black_box(specs)))
        });
    }
    group.finish();
}

fn bench_coherence(c: &mut Criterion) {
    let mut group = c.benchmark_group("swarm_coherence");

    for &len in &[26usize, 1_000, 10_000] {
        let matrix = match NodeMatrix::new(synthetic(len)) {
            Ok(matrix) => matrix,
            Err(e) => panic!("synthetic matrix: {e}"),
        };
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &matrix, |b, m| {
            b.iter(|| black_box(m).swarm_coherence())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_entanglement, bench_coherence);
criterion_main!(benches);
