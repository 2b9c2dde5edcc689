//! # Property-Based Tests
//!
//! Integrity validators, registry indexing and state merging checked with
//! proptest.

use dialectic_core::aspect::command::kinds;
use dialectic_core::registry::{FactoryResolver, generated_entries};
use dialectic_core::{
    AspectEngine, Chunk, CommandEnvelope, InMemoryAspectStore, IrRegistry, LogicalOperation,
    validate_op_chunk_refs, validate_unique_ids,
};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;

fn chunk(id: String) -> Chunk {
    Chunk {
        id,
        title: "t".to_string(),
        text: "x".to_string(),
        concise: None,
    }
}

fn op(id: String, chunk_id: String) -> LogicalOperation {
    LogicalOperation {
        id,
        chunk_id,
        label: "l".to_string(),
        candidate_summary: None,
        clauses: Vec::new(),
        predicates: Vec::new(),
        relations: Vec::new(),
    }
}

fn to_bag(map: &std::collections::BTreeMap<String, i64>) -> Map<String, Value> {
    map.iter().map(|(k, v)| (k.clone(), json!(v))).collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The duplicate report is empty exactly when all ids are distinct.
    #[test]
    fn unique_ids_iff_no_duplicates(
        chunk_ids in vec("[a-e]", 0..12),
        op_ids in vec("[a-e]", 0..12),
    ) {
        let chunks: Vec<_> = chunk_ids.iter().cloned().map(chunk).collect();
        let ops: Vec<_> = op_ids.iter().cloned().map(|id| op(id, "a".to_string())).collect();
        let report = validate_unique_ids(&chunks, &ops);

        let chunks_distinct = chunk_ids.iter().collect::<BTreeSet<_>>().len() == chunk_ids.len();
        let ops_distinct = op_ids.iter().collect::<BTreeSet<_>>().len() == op_ids.len();
        prop_assert_eq!(report.chunks.is_empty(), chunks_distinct);
        prop_assert_eq!(report.operations.is_empty(), ops_distinct);

        for dup in &report.chunks {
            let count = chunk_ids.iter().filter(|id| **id == dup.id).count();
            prop_assert_eq!(dup.count, count);
        }
    }

    /// No dangling refs exactly when every op points at an existing chunk.
    #[test]
    fn referential_integrity_iff_all_refs_resolve(
        chunk_ids in vec("[a-f]", 0..6),
        refs in vec("[a-h]", 0..10),
    ) {
        let chunks: Vec<_> = chunk_ids.iter().cloned().map(chunk).collect();
        let ops: Vec<_> = refs
            .iter()
            .enumerate()
            .map(|(i, r)| op(format!("op-{i}"), r.clone()))
            .collect();
        let dangling = validate_op_chunk_refs(&chunks, &ops);

        let known: BTreeSet<_> = chunk_ids.iter().collect();
        let expected = refs.iter().filter(|r| !known.contains(r)).count();
        prop_assert_eq!(dangling.len(), expected);
        for d in &dangling {
            prop_assert!(!known.contains(&d.chunk_id));
        }
    }

    /// Any registry index answers meta and keys_by_id consistently.
    #[test]
    fn registry_round_trip(picks in vec(0usize..89, 1..20)) {
        let all = generated_entries();
        let subset: Vec<_> = picks.iter().map(|i| all[i % all.len()].clone()).collect();
        let registry = IrRegistry::new(subset.clone(), FactoryResolver::new());

        for entry in &subset {
            prop_assert_eq!(registry.meta(&entry.key), Some(entry));
            prop_assert!(registry.keys_by_id(&entry.id).contains(&entry.key));
        }
        let distinct: BTreeSet<_> = subset.iter().map(|e| e.key.clone()).collect();
        prop_assert_eq!(registry.len(), distinct.len());
    }

    /// patchState is a shallow merge; setState is a full replace.
    #[test]
    fn patch_merges_and_set_replaces(
        initial in btree_map("[a-d]", any::<i64>(), 0..4),
        patch in btree_map("[a-d]", any::<i64>(), 0..4),
    ) {
        let mut engine = AspectEngine::new(InMemoryAspectStore::new());
        engine
            .handle(&CommandEnvelope::new(
                kinds::CREATE,
                json!({"id": "p", "type": "T", "state": to_bag(&initial)}),
            ))
            .expect("create");
        engine
            .handle(&CommandEnvelope::new(
                kinds::PATCH_STATE,
                json!({"id": "p", "patch": to_bag(&patch)}),
            ))
            .expect("patch");

        let mut expected = initial.clone();
        expected.extend(patch.clone());
        let merged = engine.get_aspect("p").expect("get").expect("present").state().clone();
        prop_assert_eq!(Value::Object(merged), Value::Object(to_bag(&expected)));

        engine
            .handle(&CommandEnvelope::new(
                kinds::SET_STATE,
                json!({"id": "p", "state": to_bag(&patch)}),
            ))
            .expect("set");
        let replaced = engine.get_aspect("p").expect("get").expect("present").state().clone();
        prop_assert_eq!(Value::Object(replaced), Value::Object(to_bag(&patch)));
    }
}
