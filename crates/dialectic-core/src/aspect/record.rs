//! Persisted aspect records and the partial records handed to a store.

use crate::DialecticError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Open key/value bag.
pub type Bag = Map<String, Value>;

/// An aspect as the store keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Bag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Bag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets: Option<Bag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Bag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record as written by a caller of `save_aspect`.
///
/// `id`, `kind` and `created_at` may be left out; [`AspectDraft::resolve`]
/// fills them. Every other field is taken as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Bag,
    #[serde(default)]
    pub signature: Option<Bag>,
    #[serde(default)]
    pub facets: Option<Bag>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meta: Option<Bag>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AspectDraft {
    /// Complete the draft against the stored record for the same id.
    ///
    /// - missing id: a fresh UUID
    /// - missing kind: the existing record's kind, else a validation error
    /// - missing `created_at`: the existing record's, else `now`
    /// - `updated_at` is always `now`
    pub fn resolve(
        self,
        existing: Option<&AspectRecord>,
        now: DateTime<Utc>,
    ) -> Result<AspectRecord, DialecticError> {
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let kind = self
            .kind
            .or_else(|| existing.map(|r| r.kind.clone()))
            .ok_or_else(|| DialecticError::validation(format!("aspect {id}: type is required")))?;
        let created_at = self
            .created_at
            .or_else(|| existing.map(|r| r.created_at))
            .unwrap_or(now);

        Ok(AspectRecord {
            id,
            kind,
            name: self.name,
            state: self.state,
            signature: self.signature,
            facets: self.facets,
            status: self.status,
            tags: self.tags,
            meta: self.meta,
            created_at,
            updated_at: now,
        })
    }
}

impl From<AspectRecord> for AspectDraft {
    fn from(record: AspectRecord) -> Self {
        Self {
            id: Some(record.id),
            kind: Some(record.kind),
            name: record.name,
            state: record.state,
            signature: record.signature,
            facets: record.facets,
            status: record.status,
            tags: record.tags,
            meta: record.meta,
            created_at: Some(record.created_at),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
