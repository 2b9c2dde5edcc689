//! # Reconciliation
//!
//! Brings the store in line with a list of active aspects: revoked entries
//! are deleted, everything else is created or updated in place. Planning is
//! pure; [`AspectEngine::commit`] applies a plan through the command surface,
//! so every applied action emits its usual event.

use super::command::{AspectRef, Command, SetCore};
use super::engine::AspectEngine;
use super::form::NewAspect;
use super::record::Bag;
use crate::DialecticError;
use crate::bus::{Event, EventBus};
use crate::primitives::{DEFAULT_ASPECT_KIND, DERIVED_ID_PREFIX};
use crate::storage::AspectStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An aspect as reported by whatever owns the active set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveAspect {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub revoked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReconcileAction {
    #[serde(rename = "aspect.delete")]
    Delete { id: String },
    #[serde(rename = "aspect.upsert")]
    Upsert {
        id: String,
        name: Option<String>,
        #[serde(rename = "aspectType")]
        kind: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcilePlan {
    pub actions: Vec<ReconcileAction>,
    /// Number of active aspects the plan was built from.
    pub count: usize,
}

/// Result of applying a plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitOutcome {
    pub success: bool,
    pub errors: Vec<String>,
    pub events: Vec<Event>,
}

/// `aspect:<slug>` for a named aspect, `aspect:<random>` otherwise.
#[must_use]
pub fn derived_id(name: Option<&str>) -> String {
    let slug = name
        .map(|n| {
            n.trim()
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string().chars().take(8).collect());
    format!("{DERIVED_ID_PREFIX}{slug}")
}

/// Plan the actions for `active`. Revoked aspects without an id are skipped.
#[must_use]
pub fn plan(active: &[ActiveAspect]) -> ReconcilePlan {
    let mut actions = Vec::with_capacity(active.len());
    for aspect in active {
        if aspect.revoked {
            if let Some(id) = &aspect.id {
                actions.push(ReconcileAction::Delete { id: id.clone() });
            }
            continue;
        }
        actions.push(ReconcileAction::Upsert {
            id: aspect
                .id
                .clone()
                .unwrap_or_else(|| derived_id(aspect.name.as_deref())),
            name: aspect.name.clone(),
            kind: aspect
                .kind
                .clone()
                .unwrap_or_else(|| DEFAULT_ASPECT_KIND.to_string()),
        });
    }
    ReconcilePlan {
        actions,
        count: active.len(),
    }
}

impl<S: AspectStore, B: EventBus> AspectEngine<S, B> {
    /// Apply `plan` action by action.
    ///
    /// An upsert creates the aspect when absent and sets its core otherwise.
    /// A failing action is recorded in `errors` and the rest still run.
    pub fn commit(&mut self, plan: &ReconcilePlan, meta: Option<&Bag>) -> CommitOutcome {
        let mut outcome = CommitOutcome::default();
        for action in &plan.actions {
            match self.apply(action, meta) {
                Ok(events) => outcome.events.extend(events),
                Err(e) => {
                    tracing::warn!(error = %e, "reconcile action failed");
                    outcome.errors.push(e.to_string());
                }
            }
        }
        outcome.success = outcome.errors.is_empty();
        outcome
    }

    fn apply(
        &mut self,
        action: &ReconcileAction,
        meta: Option<&Bag>,
    ) -> Result<Vec<Event>, DialecticError> {
        let command = match action {
            ReconcileAction::Delete { id } => Command::Delete(AspectRef { id: id.clone() }),
            ReconcileAction::Upsert { id, name, kind } => {
                if self.store().get_aspect_by_id(id)?.is_some() {
                    Command::SetCore(SetCore {
                        id: id.clone(),
                        name: name.clone(),
                        kind: Some(kind.clone()),
                    })
                } else {
                    Command::Create(NewAspect {
                        id: Some(id.clone()),
                        kind: kind.clone(),
                        name: name.clone(),
                        ..NewAspect::default()
                    })
                }
            }
        };
        self.execute(command, meta)
    }
}

// =============================================================================
// TESTS
// =============================================================================
