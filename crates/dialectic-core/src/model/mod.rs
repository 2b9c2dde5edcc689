//! # Graph Data Model
//!
//! States, moments, invariants, forces, transitions, provenance and the IR
//! aggregate that bundles them. No behavior beyond validation.

mod state;
mod vocabulary;

pub use state::{
    DialecticIR, DialecticState, Force, Invariant, IrMetadata, LineRange, Moment, Provenance,
    Transition,
};
pub use vocabulary::{ForceType, Mechanism, MomentRelation, MomentType, Phase};
