//! # IR Registry
//!
//! Knows which IR aggregates exist and where, without holding them.
//!
//! An [`IrRegistry`] is built once from a table of [`RegistryEntry`] records and
//! is immutable afterwards; share it by reference (or `Arc`). It keeps two
//! indexes:
//! - `key → entry` (exact)
//! - `id → keys` (one logical id may be authored under several modules)
//!
//! Loading goes through an [`IrResolver`]. Nothing is cached: every
//! [`IrRegistry::load`] call resolves again.

mod resolver;
mod table;

pub use resolver::{DirectoryResolver, FallbackResolver, FactoryResolver, IrFactory};

use crate::DialecticError;
use crate::model::DialecticIR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pointer to an exported IR aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub key: String,
    pub id: String,
    pub title: String,
    pub section: String,
    pub module: String,
    pub export: String,
}

impl RegistryEntry {
    /// Build an entry; the key is `module#export`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        module: impl Into<String>,
        export: impl Into<String>,
    ) -> Self {
        let module = module.into();
        let export = export.into();
        Self {
            key: format!("{module}#{export}"),
            id: id.into(),
            title: title.into(),
            section: section.into(),
            module,
            export,
        }
    }
}

/// Static row of the generated table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegistryRecord {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) section: &'static str,
    pub(crate) module: &'static str,
    pub(crate) export: &'static str,
}

impl From<&RegistryRecord> for RegistryEntry {
    fn from(record: &RegistryRecord) -> Self {
        Self::new(
            record.id,
            record.title,
            record.section,
            record.module,
            record.export,
        )
    }
}

/// Every entry of the generated table, in table order.
#[must_use]
pub fn generated_entries() -> Vec<RegistryEntry> {
    table::GENERATED_RECORDS
        .iter()
        .map(RegistryEntry::from)
        .collect()
}

/// Turns a registry entry into the aggregate it points at.
///
/// `Ok(None)` means this resolver does not provide the module; the registry
/// reports that as unresolved.
pub trait IrResolver: Send + Sync {
    fn resolve(&self, entry: &RegistryEntry) -> Result<Option<DialecticIR>, DialecticError>;
}

/// Immutable key/id index over registry entries.
pub struct IrRegistry {
    entries: BTreeMap<String, RegistryEntry>,
    id_index: BTreeMap<String, Vec<String>>,
    resolver: Box<dyn IrResolver>,
}

impl std::fmt::Debug for IrRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IrRegistry")
            .field("entries", &self.entries.len())
            .field("ids", &self.id_index.len())
            .finish_non_exhaustive()
    }
}

impl IrRegistry {
    /// Index `entries`. A repeated key keeps the last entry.
    pub fn new(
        entries: impl IntoIterator<Item = RegistryEntry>,
        resolver: impl IrResolver + 'static,
    ) -> Self {
        let mut by_key = BTreeMap::new();
        for entry in entries {
            if let Some(previous) = by_key.insert(entry.key.clone(), entry) {
                tracing::warn!(key = %previous.key, "duplicate registry key replaced");
            }
        }

        let mut id_index: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in by_key.values() {
            id_index
                .entry(entry.id.clone())
                .or_default()
                .push(entry.key.clone());
        }

        Self {
            entries: by_key,
            id_index,
            resolver: Box::new(resolver),
        }
    }

    /// The generated table, resolved through the bundled corpus.
    #[must_use]
    pub fn generated() -> Self {
        Self::new(generated_entries(), crate::corpus::bundled_resolver())
    }

    /// Same index, different resolver.
    #[must_use]
    pub fn with_resolver(self, resolver: impl IrResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            ..self
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Exact lookup by key.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    /// Keys sharing a logical id, sorted. Empty when the id is unknown.
    #[must_use]
    pub fn keys_by_id(&self, id: &str) -> &[String] {
        self.id_index
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Resolve the aggregate behind `key`.
    pub fn load(&self, key: &str) -> Result<DialecticIR, DialecticError> {
        let entry = self
            .meta(key)
            .ok_or_else(|| DialecticError::UnknownRegistryKey(key.to_string()))?;

        tracing::debug!(key, module = %entry.module, "resolving dialectic IR");
        let ir = self
            .resolver
            .resolve(entry)?
            .ok_or_else(|| DialecticError::ModuleUnresolved {
                key: entry.key.clone(),
                module: entry.module.clone(),
            })?;

        ir.validate()?;
        if ir.id != entry.id {
            return Err(DialecticError::validation(format!(
                "{key} resolved to IR '{}', registry records '{}'",
                ir.id, entry.id
            )));
        }
        Ok(ir)
    }

    /// Resolve by logical id when exactly one key carries it.
    pub fn load_by_id(&self, id: &str) -> Result<DialecticIR, DialecticError> {
        match self.keys_by_id(id) {
            [] => Err(DialecticError::UnknownRegistryId(id.to_string())),
            [key] => self.load(key),
            keys => Err(DialecticError::AmbiguousRegistryId {
                id: id.to_string(),
                keys: keys.to_vec(),
            }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    struct Nothing;

    impl IrResolver for Nothing {
        fn resolve(&self, _: &RegistryEntry) -> Result<Option<DialecticIR>, DialecticError> {
            Ok(None)
        }
    }

    #[test]
    fn generated_table_has_unique_keys() {
        let entries = generated_entries();
        assert_eq!(entries.len(), 89);
        let registry = IrRegistry::new(entries, Nothing);
        assert_eq!(registry.len(), 89);
    }

    #[test]
    fn keys_follow_module_and_export() {
        for entry in generated_entries() {
            assert_eq!(entry.key, format!("{}#{}", entry.module, entry.export));
        }
    }

    #[test]
    fn homonymous_ids_map_to_several_keys() {
        let registry = IrRegistry::new(generated_entries(), Nothing);
        for id in ["existence-ir", "infinity-ir", "quality-ir", "reflection-ir"] {
            let keys = registry.keys_by_id(id);
            assert_eq!(keys.len(), 2, "{id}");
            assert!(keys.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(registry.keys_by_id("no-such-ir").is_empty());
    }

    #[test]
    fn meta_misses_without_error() {
        let registry = IrRegistry::new(generated_entries(), Nothing);
        assert!(registry.meta("@relative/nowhere#x").is_none());
    }

    #[test]
    fn load_unknown_key_is_not_found() {
        let registry = IrRegistry::new(generated_entries(), Nothing);
        let err = registry.load("@relative/nowhere#x").expect_err("unknown");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Unknown DialecticIR key: @relative/nowhere#x");
    }

    #[test]
    fn unresolved_module_names_key() {
        let registry = IrRegistry::new(generated_entries(), Nothing);
        let key = "@relative/being/quality/being/being-ir#beingIR";
        match registry.load(key) {
            Err(DialecticError::ModuleUnresolved { key: k, module }) => {
                assert_eq!(k, key);
                assert_eq!(module, "@relative/being/quality/being/being-ir");
            }
            other => panic!("expected unresolved module, got {other:?}"),
        }
    }

    #[test]
    fn load_by_id_requires_a_single_key() {
        let registry = IrRegistry::new(generated_entries(), Nothing);
        match registry.load_by_id("quality-ir") {
            Err(DialecticError::AmbiguousRegistryId { keys, .. }) => assert_eq!(keys.len(), 2),
            other => panic!("expected ambiguity, got {other:?}"),
        }
        let err = registry.load_by_id("missing-ir").expect_err("unknown id");
        assert!(matches!(err, DialecticError::UnknownRegistryId(ref id) if id == "missing-ir"));
        assert!(err.is_not_found());
    }
}
