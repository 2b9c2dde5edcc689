//! # dialectic-core
//!
//! The dialectical state graph and the aspect engine that evaluates it.
//!
//! ## Layers (leaf to root)
//!
//! - `model`: states, moments, invariants, forces, transitions, IR aggregates
//! - `content` / `integrity`: chunk and operation sets and their validators
//! - `registry`: generated index of IR modules, resolved on demand
//! - `extract` / `graph`: projections of one state, traversal of many
//! - `aspect`: commands, evaluation transform and the engine
//! - `storage` / `bus` / `trace`: the engine's collaborators
//!
//! ## Constraints
//!
//! - No async, no network: every call completes before it returns
//! - Validation happens before any I/O
//! - The registry is an explicit value; nothing is cached or global

// =============================================================================
// MODULES
// =============================================================================

pub mod aspect;
pub mod bus;
pub mod content;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod formats;
pub mod graph;
pub mod integrity;
pub mod model;
pub mod primitives;
pub mod registry;
pub mod storage;
pub mod trace;

// =============================================================================
// RE-EXPORTS: Data Model
// =============================================================================

pub use error::DialecticError;
pub use model::{
    DialecticIR, DialecticState, Force, ForceType, Invariant, IrMetadata, LineRange, Mechanism,
    Moment, MomentRelation, MomentType, Phase, Provenance, Transition,
};

// =============================================================================
// RE-EXPORTS: Content, Registry, Graph
// =============================================================================

pub use content::{Chunk, ContentSet, LogicalOperation};
pub use graph::{GraphReport, StateGraph};
pub use integrity::{IntegrityReport, integrity_report, validate_op_chunk_refs, validate_unique_ids};
pub use registry::{IrRegistry, IrResolver, RegistryEntry};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use aspect::{Aspect, AspectEngine, AspectRecord, Command, CommandEnvelope};
pub use bus::{Event, EventBus, InMemoryEventBus};
pub use storage::{AspectBackend, AspectStore, InMemoryAspectStore, RedbAspectStore};
pub use trace::{TraceMeta, child_span, start_trace};

// =============================================================================
// RE-EXPORTS: Formats
// =============================================================================

pub use formats::{SnapshotHeader, ir_from_bytes, ir_to_bytes};
