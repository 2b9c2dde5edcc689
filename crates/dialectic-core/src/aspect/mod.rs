//! # Aspects
//!
//! The entity managed by the engine: a record with open `state`, `signature`
//! and `facets` bags, created and changed only through commands.
//!
//! ```text
//! absent -> created -> (setCore | setState | patchState)* -> deleted
//! ```
//!
//! `describe` is a read-only projection valid in any state.

pub mod command;
mod engine;
mod evaluate;
mod form;
mod reconcile;
mod record;

pub use command::{
    AspectRef, Command, CommandEnvelope, EvaluateDialectic, PatchState, SetCore, SetState,
};
pub use engine::AspectEngine;
pub use evaluate::{Evaluation, EvaluationSummary, evaluate};
pub use form::{Aspect, AspectSummary, NewAspect};
pub use reconcile::{ActiveAspect, CommitOutcome, ReconcileAction, ReconcilePlan, derived_id, plan};
pub use record::{AspectDraft, AspectRecord, Bag};
