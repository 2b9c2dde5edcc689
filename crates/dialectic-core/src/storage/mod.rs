//! # Aspect Storage
//!
//! The repository the engine writes aspects to.
//!
//! - [`InMemoryAspectStore`]: `BTreeMap`, last write wins.
//! - [`RedbAspectStore`]: redb, each save is one write transaction.
//! - [`AspectBackend`]: runtime choice between the two.

mod redb_store;

pub use redb_store::RedbAspectStore;

use crate::DialecticError;
use crate::aspect::{AspectDraft, AspectRecord};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::Path;

/// Key/value repository for aspect records.
pub trait AspectStore {
    fn get_aspect_by_id(&self, id: &str) -> Result<Option<AspectRecord>, DialecticError>;

    /// Upsert. Fills id and timestamps when missing, otherwise preserves them.
    fn save_aspect(&mut self, draft: AspectDraft) -> Result<AspectRecord, DialecticError>;

    /// Whether [`AspectStore::delete_aspect`] is available.
    fn supports_delete(&self) -> bool {
        false
    }

    /// Remove a record; `true` when one existed.
    fn delete_aspect(&mut self, id: &str) -> Result<bool, DialecticError> {
        Err(DialecticError::Storage(format!(
            "deletion not supported (aspect {id})"
        )))
    }

    /// Stored ids in ascending order.
    fn aspect_ids(&self) -> Result<Vec<String>, DialecticError>;
}

/// Volatile store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAspectStore {
    records: BTreeMap<String, AspectRecord>,
}

impl InMemoryAspectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AspectStore for InMemoryAspectStore {
    fn get_aspect_by_id(&self, id: &str) -> Result<Option<AspectRecord>, DialecticError> {
        Ok(self.records.get(id).cloned())
    }

    fn save_aspect(&mut self, draft: AspectDraft) -> Result<AspectRecord, DialecticError> {
        let existing = draft.id.as_deref().and_then(|id| self.records.get(id));
        let record = draft.resolve(existing, Utc::now())?;
        self.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn supports_delete(&self) -> bool {
        true
    }

    fn delete_aspect(&mut self, id: &str) -> Result<bool, DialecticError> {
        Ok(self.records.remove(id).is_some())
    }

    fn aspect_ids(&self) -> Result<Vec<String>, DialecticError> {
        Ok(self.records.keys().cloned().collect())
    }
}

/// Store selected at runtime.
#[derive(Debug)]
pub enum AspectBackend {
    InMemory(InMemoryAspectStore),
    Persistent(RedbAspectStore),
}

impl AspectBackend {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::InMemory(InMemoryAspectStore::new())
    }

    pub fn open_persistent(path: impl AsRef<Path>) -> Result<Self, DialecticError> {
        RedbAspectStore::open(path).map(Self::Persistent)
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Persistent(_))
    }
}

impl AspectStore for AspectBackend {
    fn get_aspect_by_id(&self, id: &str) -> Result<Option<AspectRecord>, DialecticError> {
        match self {
            Self::InMemory(store) => store.get_aspect_by_id(id),
            Self::Persistent(store) => store.get_aspect_by_id(id),
        }
    }

    fn save_aspect(&mut self, draft: AspectDraft) -> Result<AspectRecord, DialecticError> {
        match self {
            Self::InMemory(store) => store.save_aspect(draft),
            Self::Persistent(store) => store.save_aspect(draft),
        }
    }

    fn supports_delete(&self) -> bool {
        match self {
            Self::InMemory(store) => store.supports_delete(),
            Self::Persistent(store) => store.supports_delete(),
        }
    }

    fn delete_aspect(&mut self, id: &str) -> Result<bool, DialecticError> {
        match self {
            Self::InMemory(store) => store.delete_aspect(id),
            Self::Persistent(store) => store.delete_aspect(id),
        }
    }

    fn aspect_ids(&self) -> Result<Vec<String>, DialecticError> {
        match self {
            Self::InMemory(store) => store.aspect_ids(),
            Self::Persistent(store) => store.aspect_ids(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str, kind: &str) -> AspectDraft {
        AspectDraft {
            id: Some(id.to_string()),
            kind: Some(kind.to_string()),
            ..AspectDraft::default()
        }
    }

    #[test]
    fn save_then_get() {
        let mut store = InMemoryAspectStore::new();
        let saved = store.save_aspect(draft("a", "x")).expect("save");
        assert_eq!(store.get_aspect_by_id("a").expect("get"), Some(saved));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resave_preserves_created_at() {
        let mut store = InMemoryAspectStore::new();
        let first = store.save_aspect(draft("a", "x")).expect("save");
        let second = store
            .save_aspect(AspectDraft {
                id: Some("a".to_string()),
                ..AspectDraft::default()
            })
            .expect("save");
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.kind, "x");
    }

    #[test]
    fn delete_reports_existence() {
        let mut store = InMemoryAspectStore::new();
        store.save_aspect(draft("a", "x")).expect("save");
        assert!(store.delete_aspect("a").expect("delete"));
        assert!(!store.delete_aspect("a").expect("delete"));
        assert!(store.is_empty());
    }

    #[test]
    fn backend_dispatches() {
        let mut backend = AspectBackend::in_memory();
        assert!(!backend.is_persistent());
        backend.save_aspect(draft("b", "y")).expect("save");
        backend.save_aspect(draft("a", "y")).expect("save");
        assert_eq!(
            backend.aspect_ids().expect("ids"),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(backend.supports_delete());
    }
}
