//! The validated aspect value.
//!
//! Every update returns a new `Aspect` and re-runs validation, so an `Aspect`
//! held anywhere is always well-formed.

use super::record::{AspectDraft, AspectRecord, Bag};
use crate::DialecticError;
use crate::primitives::MAX_ID_LENGTH;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields accepted when creating an aspect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewAspect {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<Bag>,
    #[serde(default)]
    pub signature: Option<Bag>,
    #[serde(default)]
    pub facets: Option<Bag>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub meta: Option<Bag>,
}

/// Read-only projection returned by `describe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    pub state: Bag,
    pub signature_keys: Vec<String>,
    pub facets_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aspect {
    record: AspectRecord,
}

impl Aspect {
    /// Build a new aspect. A missing id gets a fresh UUID.
    pub fn create(fields: NewAspect) -> Result<Self, DialecticError> {
        let now = Utc::now();
        Self::from_record(AspectRecord {
            id: fields.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            kind: fields.kind,
            name: fields.name,
            state: fields.state.unwrap_or_default(),
            signature: fields.signature,
            facets: fields.facets,
            status: fields.status,
            tags: fields.tags.unwrap_or_default(),
            meta: fields.meta,
            created_at: now,
            updated_at: now,
        })
    }

    /// Wrap a stored record, validating it.
    pub fn from_record(record: AspectRecord) -> Result<Self, DialecticError> {
        validate(&record)?;
        Ok(Self { record })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.id
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.record.kind
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.record.name.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> &Bag {
        &self.record.state
    }

    #[must_use]
    pub fn signature(&self) -> Option<&Bag> {
        self.record.signature.as_ref()
    }

    #[must_use]
    pub fn facets(&self) -> Option<&Bag> {
        self.record.facets.as_ref()
    }

    #[must_use]
    pub fn record(&self) -> &AspectRecord {
        &self.record
    }

    #[must_use]
    pub fn into_record(self) -> AspectRecord {
        self.record
    }

    /// Replace name and/or kind; `None` keeps the current value.
    pub fn with_core(self, name: Option<String>, kind: Option<String>) -> Result<Self, DialecticError> {
        let mut record = self.record;
        if let Some(name) = name {
            record.name = Some(name);
        }
        if let Some(kind) = kind {
            record.kind = kind;
        }
        Self::from_record(record)
    }

    /// Replace the whole state bag.
    pub fn with_state(self, state: Bag) -> Result<Self, DialecticError> {
        Self::from_record(AspectRecord {
            state,
            ..self.record
        })
    }

    /// Shallow-merge `patch` onto the state bag.
    pub fn with_patched_state(self, patch: Bag) -> Result<Self, DialecticError> {
        let mut record = self.record;
        record.state.extend(patch);
        Self::from_record(record)
    }

    pub fn with_signature(self, signature: Bag) -> Result<Self, DialecticError> {
        Self::from_record(AspectRecord {
            signature: Some(signature),
            ..self.record
        })
    }

    pub fn with_facets(self, facets: Bag) -> Result<Self, DialecticError> {
        Self::from_record(AspectRecord {
            facets: Some(facets),
            ..self.record
        })
    }

    #[must_use]
    pub fn summary(&self) -> AspectSummary {
        AspectSummary {
            id: self.record.id.clone(),
            kind: self.record.kind.clone(),
            name: self.record.name.clone(),
            state: self.record.state.clone(),
            signature_keys: bag_keys(self.record.signature.as_ref()),
            facets_keys: bag_keys(self.record.facets.as_ref()),
        }
    }

    /// The record as a store draft. `createdAt` is left to the store, which
    /// keeps the stored value for an existing id.
    #[must_use]
    pub fn to_draft(&self) -> AspectDraft {
        AspectDraft {
            created_at: None,
            ..AspectDraft::from(self.record.clone())
        }
    }
}

fn bag_keys(bag: Option<&Bag>) -> Vec<String> {
    bag.map(|b| b.keys().cloned().collect()).unwrap_or_default()
}

fn validate(record: &AspectRecord) -> Result<(), DialecticError> {
    if record.id.trim().is_empty() {
        return Err(DialecticError::validation("aspect id is empty"));
    }
    if record.id.len() > MAX_ID_LENGTH {
        return Err(DialecticError::validation(format!(
            "aspect id exceeds {MAX_ID_LENGTH} bytes"
        )));
    }
    if record.kind.trim().is_empty() {
        return Err(DialecticError::validation(format!(
            "aspect {}: type is empty",
            record.id
        )));
    }
    if record.tags.iter().any(|t| t.trim().is_empty()) {
        return Err(DialecticError::validation(format!(
            "aspect {}: empty tag",
            record.id
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: serde_json::Value) -> Bag {
        value.as_object().cloned().expect("object")
    }

    fn aspect() -> Aspect {
        Aspect::create(NewAspect {
            kind: "x".to_string(),
            name: Some("n".to_string()),
            state: Some(bag(json!({"a": 1, "b": 2}))),
            ..NewAspect::default()
        })
        .expect("create")
    }

    #[test]
    fn create_assigns_id() {
        let a = aspect();
        assert!(Uuid::parse_str(a.id()).is_ok());
        assert_eq!(a.kind(), "x");
        assert_eq!(a.name(), Some("n"));
    }

    #[test]
    fn empty_kind_is_rejected() {
        let err = Aspect::create(NewAspect::default()).expect_err("empty type");
        assert!(err.is_validation());
    }

    #[test]
    fn core_update_keeps_omitted_fields() {
        let a = aspect().with_core(Some("n2".to_string()), None).expect("update");
        assert_eq!(a.name(), Some("n2"));
        assert_eq!(a.kind(), "x");

        assert!(aspect().with_core(None, Some(" ".to_string())).is_err());
    }

    #[test]
    fn patch_merges_and_state_replaces() {
        let patched = aspect()
            .with_patched_state(bag(json!({"b": 3})))
            .expect("patch");
        assert_eq!(serde_json::Value::Object(patched.state().clone()), json!({"a": 1, "b": 3}));

        let replaced = patched.with_state(bag(json!({"c": 4}))).expect("replace");
        assert_eq!(serde_json::Value::Object(replaced.state().clone()), json!({"c": 4}));
    }

    #[test]
    fn summary_lists_bag_keys() {
        let a = aspect()
            .with_signature(bag(json!({"s1": {}, "s2": {}})))
            .and_then(|a| a.with_facets(bag(json!({"f": 1}))))
            .expect("update");
        let summary = a.summary();
        assert_eq!(summary.signature_keys, vec!["s1".to_string(), "s2".to_string()]);
        assert_eq!(summary.facets_keys, vec!["f".to_string()]);
    }

    #[test]
    fn unknown_create_fields_are_rejected() {
        let parsed: Result<NewAspect, _> = serde_json::from_value(json!({"type": "x", "colour": 1}));
        assert!(parsed.is_err());
    }
}
