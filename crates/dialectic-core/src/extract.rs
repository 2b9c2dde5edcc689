//! # Projections
//!
//! Pure functions deriving relational structure from a single state.
//! The evaluation transform is assembled from these; the CLI uses them to
//! inspect states directly.

use crate::model::{DialecticState, Mechanism, MomentRelation, MomentType};
use crate::primitives::IMMANENT_MODE;
use serde::{Deserialize, Serialize};

/// An edge between two moments of the same state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentEdge {
    pub from: String,
    pub to: Option<String>,
    pub relation: MomentRelation,
    #[serde(rename = "type")]
    pub kind: MomentType,
}

/// One pole of a spectrum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pole {
    pub name: String,
    pub definition: String,
    pub opposite_to: Option<String>,
}

/// The polarity/negation moments of a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spectrum {
    pub poles: Vec<Pole>,
    pub range: usize,
    /// True when any pole stands in an `opposite` relation.
    pub dialectical: bool,
}

/// How a state shows itself, from its externality/reflection/passover forces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearing {
    pub mode: String,
    pub triggers: Vec<String>,
    pub effects: Vec<String>,
}

/// Whether an invariant holds unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Universality {
    Necessary,
    Conditional,
}

/// An invariant as a constraint record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub id: String,
    pub constraint: String,
    pub predicate: Option<String>,
    pub universality: Universality,
}

/// A transition seen from the state that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    pub id: String,
    pub from: String,
    pub to: String,
    pub mechanism: Mechanism,
    pub middle_term: Option<String>,
    pub reason: String,
}

/// Moments carrying a relation, flattened to edges.
#[must_use]
pub fn relations(state: &DialecticState) -> Vec<MomentEdge> {
    state
        .moments
        .iter()
        .filter_map(|m| {
            m.relation.as_ref().map(|relation| MomentEdge {
                from: m.name.clone(),
                to: m.related_to.clone(),
                relation: relation.clone(),
                kind: m.kind.clone(),
            })
        })
        .collect()
}

#[must_use]
pub fn spectrum(state: &DialecticState) -> Spectrum {
    let spectral: Vec<_> = state
        .moments
        .iter()
        .filter(|m| m.kind.is_spectral())
        .collect();

    let dialectical = spectral
        .iter()
        .any(|m| m.relation.as_ref().is_some_and(MomentRelation::is_opposition));

    let poles: Vec<Pole> = spectral
        .into_iter()
        .map(|m| Pole {
            name: m.name.clone(),
            definition: m.definition.clone(),
            opposite_to: m.related_to.clone(),
        })
        .collect();

    Spectrum {
        range: poles.len(),
        poles,
        dialectical,
    }
}

#[must_use]
pub fn appearing(state: &DialecticState) -> Appearing {
    let forces: Vec<_> = state
        .forces
        .iter()
        .filter(|f| f.kind.is_appearing())
        .collect();

    Appearing {
        mode: forces
            .first()
            .map_or_else(|| IMMANENT_MODE.to_string(), |f| f.kind.to_string()),
        triggers: forces.iter().map(|f| f.trigger.clone()).collect(),
        effects: forces.iter().map(|f| f.effect.clone()).collect(),
    }
}

/// Invariants as constraints. An invariant with conditions is conditional.
#[must_use]
pub fn constraints(state: &DialecticState) -> Vec<Constraint> {
    state
        .invariants
        .iter()
        .map(|inv| Constraint {
            id: inv.id.clone(),
            constraint: inv.constraint.clone(),
            predicate: inv.predicate.clone(),
            universality: if inv.conditions.is_empty() {
                Universality::Necessary
            } else {
                Universality::Conditional
            },
        })
        .collect()
}

#[must_use]
pub fn transformations(state: &DialecticState) -> Vec<Transformation> {
    state
        .transitions
        .iter()
        .map(|t| Transformation {
            id: t.id.clone(),
            from: t.from.clone(),
            to: t.to.clone(),
            mechanism: t.mechanism.clone(),
            middle_term: t.middle_term.clone(),
            reason: t.description.clone(),
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Force, ForceType, Invariant, LineRange, Moment, Phase, Provenance, Transition,
    };

    fn state() -> DialecticState {
        DialecticState {
            id: "s".to_string(),
            title: "S".to_string(),
            concept: "C".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("being", "immediacy", MomentType::Polarity)
                    .related(MomentRelation::Opposite, "nothing"),
                Moment::new("nothing", "empty", MomentType::Negation),
                Moment::new("unity", "one", MomentType::Sublation)
                    .related(MomentRelation::Contains, "being"),
            ],
            invariants: vec![Invariant {
                conditions: vec!["when reflected".to_string()],
                ..Invariant::new("inv-1", "unity holds", "holds(unity)")
            }],
            forces: vec![
                Force {
                    id: "f-1".to_string(),
                    description: "d".to_string(),
                    kind: ForceType::Contradiction,
                    trigger: "t0".to_string(),
                    effect: "e0".to_string(),
                    target_state: "x".to_string(),
                },
                Force {
                    id: "f-2".to_string(),
                    description: "d".to_string(),
                    kind: ForceType::Passover,
                    trigger: "t1".to_string(),
                    effect: "e1".to_string(),
                    target_state: "x".to_string(),
                },
            ],
            transitions: vec![Transition {
                id: "t-1".to_string(),
                from: "s".to_string(),
                to: "x".to_string(),
                mechanism: Mechanism::Passover,
                middle_term: Some("becoming".to_string()),
                conditions: Vec::new(),
                description: "passes over".to_string(),
            }],
            next_states: vec!["x".to_string()],
            previous_states: Vec::new(),
            provenance: Provenance {
                topic_map_id: "tm".to_string(),
                chunk_id: None,
                line_range: LineRange { start: 1, end: 2 },
                section: None,
                order: None,
            },
            description: None,
            key_points: Vec::new(),
        }
    }

    #[test]
    fn relations_keep_only_related_moments() {
        let edges = relations(&state());
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].from, "being");
        assert_eq!(edges[0].to.as_deref(), Some("nothing"));
        assert_eq!(edges[1].relation, MomentRelation::Contains);
    }

    #[test]
    fn spectrum_counts_poles_and_detects_opposition() {
        let spectrum = spectrum(&state());
        assert_eq!(spectrum.range, 2);
        assert!(spectrum.dialectical);
        assert_eq!(spectrum.poles[0].opposite_to.as_deref(), Some("nothing"));
    }

    #[test]
    fn appearing_uses_first_matching_force() {
        let appearing = appearing(&state());
        assert_eq!(appearing.mode, "passover");
        assert_eq!(appearing.triggers, vec!["t1".to_string()]);
        assert_eq!(appearing.effects, vec!["e1".to_string()]);
    }

    #[test]
    fn appearing_defaults_to_immanent() {
        let mut s = state();
        s.forces.clear();
        let appearing = appearing(&s);
        assert_eq!(appearing.mode, IMMANENT_MODE);
        assert!(appearing.triggers.is_empty());
    }

    #[test]
    fn conditional_invariants() {
        let constraints = constraints(&state());
        assert_eq!(constraints[0].universality, Universality::Conditional);
    }

    #[test]
    fn transformations_carry_middle_term() {
        let t = transformations(&state());
        assert_eq!(t[0].middle_term.as_deref(), Some("becoming"));
        assert_eq!(t[0].reason, "passes over");
    }
}
