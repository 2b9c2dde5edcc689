//! # Fixed Constants
//!
//! Compiled-in limits and names shared across the model, registry and engine.
//! These are immutable at runtime.

/// Magic bytes for the IR snapshot header.
///
/// - File Header = Magic Bytes ("DIAL") + Version (u8) before payload.
pub const MAGIC_BYTES: &[u8; 4] = b"DIAL";

/// Current snapshot format version.
///
/// Increment this when making breaking changes to the snapshot layout.
pub const FORMAT_VERSION: u8 = 1;

/// Maximum size of an IR snapshot accepted by the decoder (64 MiB).
pub const MAX_SNAPSHOT_SIZE: usize = 64 * 1024 * 1024;

/// Maximum traversal depth for state-graph walks.
///
/// All walks are bounded; a larger requested depth is clamped.
pub const MAX_TRAVERSAL_DEPTH: usize = 100;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length for identifiers (state ids, aspect ids, registry keys).
pub const MAX_ID_LENGTH: usize = 256;

/// Maximum number of states in a single IR aggregate.
pub const MAX_STATES_PER_IR: usize = 10_000;

// =============================================================================
// ENGINE NAMES
// =============================================================================

/// Trace source recorded by the Aspect engine when it starts a trace.
pub const ENGINE_SOURCE: &str = "AspectEngine";

/// Default scope attached to spans emitted by the engine.
pub const DEFAULT_SCOPE: &str = "aspect";

/// Kind assigned to reconciled aspects that carry no explicit kind.
pub const DEFAULT_ASPECT_KIND: &str = "system.Aspect";

/// Prefix for aspect ids derived from a name during reconciliation.
pub const DERIVED_ID_PREFIX: &str = "aspect:";

/// Appearing mode reported when no externality/reflection/passover force exists.
pub const IMMANENT_MODE: &str = "immanent";

/// Default number of events retained by the in-memory bus history.
pub const DEFAULT_EVENT_HISTORY: usize = 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_bytes_are_ascii() {
        assert!(MAGIC_BYTES.iter().all(u8::is_ascii_uppercase));
    }

    #[test]
    fn derived_prefix_ends_with_separator() {
        assert!(DERIVED_ID_PREFIX.ends_with(':'));
    }
}
