//! # Content
//!
//! Canonical text chunks and the logical operations derived from them.

use crate::integrity::{IntegrityReport, integrity_report};
use serde::{Deserialize, Serialize};

/// A canonical unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concise: Option<String>,
}

/// A predicate application inside a logical operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSpec {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// A labeled relation between two terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSpec {
    pub predicate: String,
    pub from: String,
    pub to: String,
}

/// A symbolic annotation derived from one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalOperation {
    pub id: String,
    pub chunk_id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_summary: Option<String>,
    #[serde(default)]
    pub clauses: Vec<String>,
    #[serde(default)]
    pub predicates: Vec<PredicateSpec>,
    #[serde(default)]
    pub relations: Vec<RelationSpec>,
}

/// Chunks and their operations for one topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSet {
    pub chunks: Vec<Chunk>,
    pub operations: Vec<LogicalOperation>,
}

impl ContentSet {
    #[must_use]
    pub fn new(chunks: Vec<Chunk>, operations: Vec<LogicalOperation>) -> Self {
        Self { chunks, operations }
    }

    /// Chunk at a one-based position. Zero and out-of-range give `None`.
    #[must_use]
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        index.checked_sub(1).and_then(|i| self.chunks.get(i))
    }

    #[must_use]
    pub fn chunk_by_id(&self, id: &str) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.id == id)
    }

    /// Operations attached to the chunk at a one-based position.
    #[must_use]
    pub fn operations_for_chunk(&self, index: usize) -> Vec<&LogicalOperation> {
        match self.chunk(index) {
            Some(chunk) => self
                .operations
                .iter()
                .filter(|op| op.chunk_id == chunk.id)
                .collect(),
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn integrity_report(&self) -> IntegrityReport {
        integrity_report(&self.chunks, &self.operations)
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
            title: id.to_string(),
            text: String::new(),
            concise: None,
        }
    }

    fn op(id: &str, chunk_id: &str) -> LogicalOperation {
        LogicalOperation {
            id: id.to_string(),
            chunk_id: chunk_id.to_string(),
            label: id.to_string(),
            candidate_summary: None,
            clauses: Vec::new(),
            predicates: Vec::new(),
            relations: Vec::new(),
        }
    }

    #[test]
    fn chunk_lookup_is_one_based() {
        let set = ContentSet::new(vec![chunk("c1"), chunk("c2")], Vec::new());
        assert_eq!(set.chunk(1).map(|c| c.id.as_str()), Some("c1"));
        assert_eq!(set.chunk(2).map(|c| c.id.as_str()), Some("c2"));
        assert!(set.chunk(0).is_none());
        assert!(set.chunk(3).is_none());
    }

    #[test]
    fn operations_follow_their_chunk() {
        let set = ContentSet::new(
            vec![chunk("c1"), chunk("c2")],
            vec![op("o1", "c1"), op("o2", "c2"), op("o3", "c1")],
        );
        let ids: Vec<_> = set
            .operations_for_chunk(1)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["o1", "o3"]);
        assert!(set.operations_for_chunk(9).is_empty());
    }

    #[test]
    fn operation_decodes_camel_case() {
        let json = r#"{"id":"op","chunkId":"c1","label":"L","clauses":["a = b"],
            "predicates":[{"name":"P","args":["x"]}],"relations":[{"predicate":"r","from":"a","to":"b"}]}"#;
        let op: LogicalOperation = serde_json::from_str(json).expect("decode");
        assert_eq!(op.chunk_id, "c1");
        assert_eq!(op.predicates[0].args, vec!["x".to_string()]);
        assert_eq!(op.relations[0].to, "b");
    }
}
