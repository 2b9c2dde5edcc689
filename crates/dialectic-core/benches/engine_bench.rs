//! # Engine Benchmarks
//!
//! Evaluation, command handling and registry lookups.
//!
//! Run with: `cargo bench -p dialectic-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dialectic_core::aspect::command::kinds;
use dialectic_core::aspect::evaluate;
use dialectic_core::corpus::becoming_ir;
use dialectic_core::{AspectEngine, CommandEnvelope, InMemoryAspectStore, IrRegistry, StateGraph};
use serde_json::json;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let ir = becoming_ir();
    let mut group = c.benchmark_group("evaluate");

    for state in &ir.states {
        group.bench_with_input(BenchmarkId::from_parameter(&state.id), state, |b, state| {
            b.iter(|| evaluate(black_box(state), None).expect("evaluate"));
        });
    }

    group.finish();
}

fn bench_evaluate_command(c: &mut Criterion) {
    let ir = becoming_ir();
    let envelopes: Vec<_> = ir
        .states
        .iter()
        .map(|s| CommandEnvelope::new(kinds::EVALUATE, json!({"dialecticState": s})))
        .collect();

    c.bench_function("evaluate_command_in_memory", |b| {
        let mut engine = AspectEngine::new(InMemoryAspectStore::new());
        b.iter(|| {
            for envelope in &envelopes {
                black_box(engine.handle(envelope).expect("handle"));
            }
            engine.event_bus().clear_history();
        });
    });
}

fn bench_registry(c: &mut Criterion) {
    let registry = IrRegistry::generated();
    let keys: Vec<String> = registry.entries().map(|e| e.key.clone()).collect();
    let ids: Vec<String> = registry.entries().map(|e| e.id.clone()).collect();

    c.bench_function("registry_meta_all", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(registry.meta(key));
            }
        });
    });

    c.bench_function("registry_keys_by_id_all", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(registry.keys_by_id(id));
            }
        });
    });

    c.bench_function("registry_load_becoming", |b| {
        b.iter(|| registry.load_by_id(black_box("becoming-ir")).expect("load"));
    });
}

fn bench_graph(c: &mut Criterion) {
    let graph = StateGraph::from_ir(&becoming_ir());
    c.bench_function("graph_check", |b| b.iter(|| black_box(graph.check())));
    c.bench_function("graph_walk", |b| {
        b.iter(|| graph.walk(black_box("becoming-1"), 10));
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_evaluate_command,
    bench_registry,
    bench_graph
);
criterion_main!(benches);
