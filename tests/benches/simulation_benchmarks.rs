//! # Qubit-Stream Simulation Benchmarks
//!
//! Per-request cost at the largest supported register:
//!
//! | Stage | Target (8 qubits) |
//! |-------|-------------------|
//! | Circuit build | < 10µs |
//! | Evolution, 64 gates | < 1ms |
//! | Observable extraction | < 1ms |
//! | Full JSON request | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qs_01_circuit_builder::{CircuitBuilderApi, CircuitBuilderService, GateOperationRecord};
use qs_02_state_evolution::{StateEvolutionApi, StateEvolutionEngine};
use qs_03_observables::{ObservableExtractor, ObservableExtractorApi};
use qs_04_session_gateway::{Session, SimulationPipeline};
use serde_json::json;

const MAX_QUBITS: usize = 8;

/// Layered circuit: H on every qubit, then a CNOT ladder and RY rotations.
fn layered_operations(num_qubits: usize, layers: usize) -> Vec<GateOperationRecord> {
    let mut ops = Vec::new();
    for layer in 0..layers {
        for q in 0..num_qubits as i64 {
            ops.push(GateOperationRecord::new("H").with_target(q));
        }
        for q in 0..num_qubits as i64 - 1 {
            ops.push(GateOperationRecord::new("CNOT").with_control(q).with_target(q + 1));
        }
        for q in 0..num_qubits as i64 {
            ops.push(
                GateOperationRecord::new("RY")
                    .with_target(q)
                    .with_angle(0.1 * (layer as f64 + 1.0)),
            );
        }
    }
    ops
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("qs-02-state-evolution");
    let builder = CircuitBuilderService::new();

    for n in [2, 4, 6, MAX_QUBITS] {
        let circuit = builder.build(n, &layered_operations(n, 4));
        let engine = StateEvolutionEngine::new(n).unwrap();

        group.throughput(Throughput::Elements(circuit.len() as u64));
        group.bench_with_input(BenchmarkId::new("evolve", n), &circuit, |b, circuit| {
            b.iter(|| black_box(engine.evolve(circuit).unwrap()))
        });
    }

    group.finish();
}

fn bench_observables(c: &mut Criterion) {
    let mut group = c.benchmark_group("qs-03-observables");
    let extractor = ObservableExtractor::new();

    for n in [2, 4, 6, MAX_QUBITS] {
        let circuit = CircuitBuilderService::new().build(n, &layered_operations(n, 2));
        let state = StateEvolutionEngine::new(n).unwrap().evolve(&circuit).unwrap();

        group.bench_with_input(BenchmarkId::new("probabilities", n), &state, |b, state| {
            b.iter(|| black_box(extractor.probabilities(state)))
        });
        group.bench_with_input(BenchmarkId::new("extract", n), &state, |b, state| {
            b.iter(|| black_box(extractor.extract(state)))
        });
    }

    group.finish();
}

fn bench_full_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("qs-04-session-gateway");
    let pipeline = SimulationPipeline::new();
    let mut session = Session::default();

    let request = json!({
        "numQubits": MAX_QUBITS,
        "operations": layered_operations(MAX_QUBITS, 3),
    })
    .to_string();

    group.throughput(Throughput::Bytes(request.len() as u64));
    group.bench_function("handle_text_8_qubits", |b| {
        b.iter(|| black_box(pipeline.handle_text(&mut session, black_box(&request))))
    });

    group.finish();
}

criterion_group!(benches, bench_evolution, bench_observables, bench_full_request);
criterion_main!(benches);
