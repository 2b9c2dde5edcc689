//! Resolvers turning registry entries into IR aggregates.

use super::{IrResolver, RegistryEntry};
use crate::DialecticError;
use crate::formats::persistence::ir_from_bytes;
use crate::model::DialecticIR;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Constructor for one bundled aggregate.
pub type IrFactory = fn() -> DialecticIR;

/// Resolves keys through compiled-in factory functions.
#[derive(Debug, Clone, Default)]
pub struct FactoryResolver {
    factories: BTreeMap<String, IrFactory>,
}

impl FactoryResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for the entry keyed `module#export`.
    #[must_use]
    pub fn with(mut self, module: &str, export: &str, factory: IrFactory) -> Self {
        self.factories.insert(format!("{module}#{export}"), factory);
        self
    }

    /// Keys with a registered factory.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl IrResolver for FactoryResolver {
    fn resolve(&self, entry: &RegistryEntry) -> Result<Option<DialecticIR>, DialecticError> {
        Ok(self.factories.get(&entry.key).map(|factory| factory()))
    }
}

/// Resolves keys from files under a root directory.
///
/// The module path (leading `@` stripped) names a directory; the export names
/// the file inside it: `<root>/<module>/<export>.json` or `<export>.ir` for a
/// binary snapshot. JSON wins when both exist.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn module_dir(&self, entry: &RegistryEntry) -> Result<PathBuf, DialecticError> {
        let relative = Path::new(entry.module.trim_start_matches('@'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes || entry.export.contains(['/', '\\']) || entry.export.starts_with('.') {
            return Err(DialecticError::validation(format!(
                "registry entry {} does not name a path under the corpus root",
                entry.key
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl IrResolver for DirectoryResolver {
    fn resolve(&self, entry: &RegistryEntry) -> Result<Option<DialecticIR>, DialecticError> {
        let dir = self.module_dir(entry)?;

        let json_path = dir.join(format!("{}.json", entry.export));
        if json_path.is_file() {
            let text = std::fs::read_to_string(&json_path)
                .map_err(|e| DialecticError::IoError(format!("{}: {e}", json_path.display())))?;
            return DialecticIR::from_json_str(&text).map(Some);
        }

        let snapshot_path = dir.join(format!("{}.ir", entry.export));
        if snapshot_path.is_file() {
            let bytes = std::fs::read(&snapshot_path).map_err(|e| {
                DialecticError::IoError(format!("{}: {e}", snapshot_path.display()))
            })?;
            return ir_from_bytes(&bytes).map(Some);
        }

        Ok(None)
    }
}

/// Tries each resolver in order; the first to provide the module wins.
#[derive(Default)]
pub struct FallbackResolver {
    chain: Vec<Box<dyn IrResolver>>,
}

impl std::fmt::Debug for FallbackResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackResolver")
            .field("resolvers", &self.chain.len())
            .finish()
    }
}

impl FallbackResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, resolver: impl IrResolver + 'static) -> Self {
        self.chain.push(Box::new(resolver));
        self
    }
}

impl IrResolver for FallbackResolver {
    fn resolve(&self, entry: &RegistryEntry) -> Result<Option<DialecticIR>, DialecticError> {
        for resolver in &self.chain {
            if let Some(ir) = resolver.resolve(entry)? {
                return Ok(Some(ir));
            }
        }
        Ok(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================
