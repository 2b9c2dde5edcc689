//! # Error Types
//!
//! A single error enum for the whole core.
//!
//! - Validation errors are raised before any I/O happens.
//! - Not-found errors name the missing id or key.
//! - Collaborator failures (store, bus, files) carry the collaborator's message unchanged.

use thiserror::Error;

/// Errors that can occur in the dialectic core.
#[derive(Debug, Error)]
pub enum DialecticError {
    /// A payload or aggregate failed shape validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A mutating operation targeted an aspect that does not exist.
    #[error("Aspect not found: {0}")]
    AspectNotFound(String),

    /// A registry key has no entry.
    #[error("Unknown DialecticIR key: {0}")]
    UnknownRegistryKey(String),

    /// No registry key carries a logical id.
    #[error("Unknown DialecticIR id: {0}")]
    UnknownRegistryId(String),

    /// A logical id resolves to more than one key.
    #[error("DialecticIR id {id} resolves to {} keys: [{}]", .keys.len(), .keys.join(", "))]
    AmbiguousRegistryId {
        /// The requested id.
        id: String,
        /// Every key carrying the id.
        keys: Vec<String>,
    },

    /// No resolver provides the module behind a registry entry.
    #[error("Module not resolvable for {key}: {module}")]
    ModuleUnresolved {
        /// Registry key.
        key: String,
        /// Module path recorded in the entry.
        module: String,
    },

    /// The command kind is not handled by the engine.
    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    /// The aspect store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The event bus failed.
    #[error("Event bus error: {0}")]
    Bus(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl DialecticError {
    /// Whether the error reports a missing aspect, registry key or id.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AspectNotFound(_) | Self::UnknownRegistryKey(_) | Self::UnknownRegistryId(_)
        )
    }

    /// Whether the error was raised by validation before any I/O.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnsupportedCommand(_))
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// =============================================================================
// TESTS
// =============================================================================
