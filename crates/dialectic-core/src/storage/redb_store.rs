//! # redb-backed Aspect Store
//!
//! Aspects persisted in a redb database, one JSON document per id.
//!
//! A save reads the existing record and writes the resolved one inside the
//! same write transaction, so the upsert is atomic with respect to other
//! writers of the same database.

use super::AspectStore;
use crate::DialecticError;
use crate::aspect::{AspectDraft, AspectRecord};
use chrono::Utc;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;

/// Table for aspects: id -> JSON-encoded `AspectRecord`.
const ASPECTS: TableDefinition<&str, &[u8]> = TableDefinition::new("aspects");

fn storage(e: impl std::fmt::Display) -> DialecticError {
    DialecticError::Storage(e.to_string())
}

fn decode(bytes: &[u8]) -> Result<AspectRecord, DialecticError> {
    serde_json::from_slice(bytes).map_err(|e| DialecticError::DeserializationError(e.to_string()))
}

pub struct RedbAspectStore {
    db: Database,
}

impl std::fmt::Debug for RedbAspectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbAspectStore").finish_non_exhaustive()
    }
}

impl RedbAspectStore {
    /// Open or create a database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DialecticError> {
        let db = Database::create(path.as_ref()).map_err(storage)?;

        {
            let write_txn = db.begin_write().map_err(storage)?;
            let _ = write_txn.open_table(ASPECTS).map_err(storage)?;
            write_txn.commit().map_err(storage)?;
        }

        tracing::debug!(path = %path.as_ref().display(), "opened aspect database");
        Ok(Self { db })
    }

    /// Number of stored aspects.
    pub fn count(&self) -> Result<u64, DialecticError> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(ASPECTS).map_err(storage)?;
        table.len().map_err(storage)
    }
}

impl AspectStore for RedbAspectStore {
    fn get_aspect_by_id(&self, id: &str) -> Result<Option<AspectRecord>, DialecticError> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(ASPECTS).map_err(storage)?;
        match table.get(id).map_err(storage)? {
            Some(guard) => decode(guard.value()).map(Some),
            None => Ok(None),
        }
    }

    fn save_aspect(&mut self, draft: AspectDraft) -> Result<AspectRecord, DialecticError> {
        let write_txn = self.db.begin_write().map_err(storage)?;
        let record = {
            let mut table = write_txn.open_table(ASPECTS).map_err(storage)?;

            let existing = match draft.id.as_deref() {
                Some(id) => match table.get(id).map_err(storage)? {
                    Some(guard) => Some(decode(guard.value())?),
                    None => None,
                },
                None => None,
            };

            let record = draft.resolve(existing.as_ref(), Utc::now())?;
            let bytes = serde_json::to_vec(&record)
                .map_err(|e| DialecticError::SerializationError(e.to_string()))?;
            table
                .insert(record.id.as_str(), bytes.as_slice())
                .map_err(storage)?;
            record
        };
        write_txn.commit().map_err(storage)?;
        Ok(record)
    }

    fn supports_delete(&self) -> bool {
        true
    }

    fn delete_aspect(&mut self, id: &str) -> Result<bool, DialecticError> {
        let write_txn = self.db.begin_write().map_err(storage)?;
        let existed = {
            let mut table = write_txn.open_table(ASPECTS).map_err(storage)?;
            table.remove(id).map_err(storage)?.is_some()
        };
        write_txn.commit().map_err(storage)?;
        Ok(existed)
    }

    fn aspect_ids(&self) -> Result<Vec<String>, DialecticError> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(ASPECTS).map_err(storage)?;

        let mut ids = Vec::new();
        for entry in table.iter().map_err(storage)? {
            let (key, _) = entry.map_err(storage)?;
            ids.push(key.value().to_string());
        }
        Ok(ids)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(id: &str) -> AspectDraft {
        let mut state = serde_json::Map::new();
        state.insert("a".to_string(), json!(1));
        AspectDraft {
            id: Some(id.to_string()),
            kind: Some("concept".to_string()),
            name: Some("Being".to_string()),
            state,
            ..AspectDraft::default()
        }
    }

    #[test]
    fn roundtrip_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("aspects.redb");

        let saved = {
            let mut store = RedbAspectStore::open(&path).expect("open");
            store.save_aspect(draft("a-1")).expect("save")
        };

        let store = RedbAspectStore::open(&path).expect("reopen");
        let loaded = store.get_aspect_by_id("a-1").expect("get");
        assert_eq!(loaded, Some(saved));
        assert_eq!(store.count().expect("count"), 1);
    }

    #[test]
    fn upsert_preserves_created_at() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = RedbAspectStore::open(dir.path().join("a.redb")).expect("open");
        let first = store.save_aspect(draft("a-1")).expect("save");
        let second = store
            .save_aspect(AspectDraft {
                id: Some("a-1".to_string()),
                ..AspectDraft::default()
            })
            .expect("save");
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.kind, "concept");
        assert!(second.state.is_empty());
    }

    #[test]
    fn delete_and_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = RedbAspectStore::open(dir.path().join("a.redb")).expect("open");
        store.save_aspect(draft("b")).expect("save");
        store.save_aspect(draft("a")).expect("save");
        assert_eq!(
            store.aspect_ids().expect("ids"),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(store.delete_aspect("a").expect("delete"));
        assert!(!store.delete_aspect("a").expect("delete"));
        assert_eq!(store.get_aspect_by_id("a").expect("get"), None);
    }
}
