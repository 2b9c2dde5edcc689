//! # Integrity Validators
//!
//! Batch checks over chunks and logical operations. They never fail: an empty
//! list means nothing was found.

use crate::content::{Chunk, LogicalOperation};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// An id that occurs more than once within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateId {
    pub id: String,
    pub count: usize,
}

/// Duplicated ids per collection, sorted by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueIdReport {
    pub chunks: Vec<DuplicateId>,
    pub operations: Vec<DuplicateId>,
}

impl UniqueIdReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty() && self.operations.is_empty()
    }
}

/// An operation whose `chunkId` matches no chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingChunkRef {
    pub operation_id: String,
    pub chunk_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    pub duplicates: UniqueIdReport,
    pub dangling_refs: Vec<DanglingChunkRef>,
}

impl IntegrityReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.dangling_refs.is_empty()
    }
}

fn duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<DuplicateId> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for id in ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, count)| DuplicateId {
            id: id.to_string(),
            count,
        })
        .collect()
}

#[must_use]
pub fn validate_unique_ids(chunks: &[Chunk], ops: &[LogicalOperation]) -> UniqueIdReport {
    UniqueIdReport {
        chunks: duplicates(chunks.iter().map(|c| c.id.as_str())),
        operations: duplicates(ops.iter().map(|o| o.id.as_str())),
    }
}

/// Operations referencing a missing chunk, in input order.
#[must_use]
pub fn validate_op_chunk_refs(chunks: &[Chunk], ops: &[LogicalOperation]) -> Vec<DanglingChunkRef> {
    let known: BTreeSet<&str> = chunks.iter().map(|c| c.id.as_str()).collect();
    ops.iter()
        .filter(|op| !known.contains(op.chunk_id.as_str()))
        .map(|op| DanglingChunkRef {
            operation_id: op.id.clone(),
            chunk_id: op.chunk_id.clone(),
        })
        .collect()
}

#[must_use]
pub fn integrity_report(chunks: &[Chunk], ops: &[LogicalOperation]) -> IntegrityReport {
    IntegrityReport {
        duplicates: validate_unique_ids(chunks, ops),
        dangling_refs: validate_op_chunk_refs(chunks, ops),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: &str) -> Chunk {
        Chunk {
            id: id.to_string(),
            title: String::new(),
            text: String::new(),
            concise: None,
        }
    }

    fn op(id: &str, chunk_id: &str) -> LogicalOperation {
        LogicalOperation {
            id: id.to_string(),
            chunk_id: chunk_id.to_string(),
            label: String::new(),
            candidate_summary: None,
            clauses: Vec::new(),
            predicates: Vec::new(),
            relations: Vec::new(),
        }
    }

    #[test]
    fn unique_ids_produce_empty_report() {
        let report = validate_unique_ids(&[chunk("a"), chunk("b")], &[op("x", "a")]);
        assert!(report.is_empty());
    }

    #[test]
    fn duplicates_are_counted_per_collection() {
        let chunks = [chunk("a"), chunk("b"), chunk("a"), chunk("a")];
        let ops = [op("a", "a"), op("y", "b"), op("y", "b")];
        let report = validate_unique_ids(&chunks, &ops);
        assert_eq!(
            report.chunks,
            vec![DuplicateId {
                id: "a".to_string(),
                count: 3
            }]
        );
        assert_eq!(
            report.operations,
            vec![DuplicateId {
                id: "y".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn dangling_refs_name_operation_and_chunk() {
        let dangling = validate_op_chunk_refs(&[chunk("a")], &[op("x", "a"), op("z", "missing")]);
        assert_eq!(
            dangling,
            vec![DanglingChunkRef {
                operation_id: "z".to_string(),
                chunk_id: "missing".to_string(),
            }]
        );
    }

    #[test]
    fn report_combines_both_checks() {
        let report = integrity_report(&[chunk("a"), chunk("a")], &[op("x", "b")]);
        assert!(!report.is_clean());
        assert_eq!(report.duplicates.chunks.len(), 1);
        assert_eq!(report.dangling_refs.len(), 1);

        assert!(integrity_report(&[], &[]).is_clean());
    }
}
