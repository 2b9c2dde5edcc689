//! # States and IR Aggregates
//!
//! Pure data describing a dialectic state graph. Values are checked by
//! [`DialecticState::validate`] and [`DialecticIR::validate`]; the `from_json`
//! constructors combine shape decoding with those checks.
//!
//! Optional fields use `#[serde(default)]` rather than skipping on output so the
//! same types encode with postcard for snapshots.

use super::vocabulary::{ForceType, Mechanism, MomentRelation, MomentType, Phase};
use crate::DialecticError;
use crate::primitives::{MAX_ID_LENGTH, MAX_STATES_PER_IR};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// An attribute owned by exactly one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    pub name: String,
    pub definition: String,
    #[serde(rename = "type")]
    pub kind: MomentType,
    #[serde(default)]
    pub relation: Option<MomentRelation>,
    #[serde(default)]
    pub related_to: Option<String>,
}

impl Moment {
    #[must_use]
    pub fn new(name: impl Into<String>, definition: impl Into<String>, kind: MomentType) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            kind,
            relation: None,
            related_to: None,
        }
    }

    /// Attach a directed relation to another moment of the same state.
    #[must_use]
    pub fn related(mut self, relation: MomentRelation, target: impl Into<String>) -> Self {
        self.relation = Some(relation);
        self.related_to = Some(target.into());
        self
    }
}

/// A named constraint asserted for the lifetime of a state.
///
/// The predicate is descriptive; nothing in the core evaluates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invariant {
    pub id: String,
    pub constraint: String,
    #[serde(default)]
    pub predicate: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl Invariant {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        constraint: impl Into<String>,
        predicate: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            constraint: constraint.into(),
            predicate: Some(predicate.into()),
            conditions: Vec::new(),
        }
    }
}

/// A candidate transition driver. The realized edge is a [`Transition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Force {
    pub id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ForceType,
    pub trigger: String,
    pub effect: String,
    pub target_state: String,
}

/// A directed edge between two states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub id: String,
    pub from: String,
    pub to: String,
    pub mechanism: Mechanism,
    #[serde(default)]
    pub middle_term: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    pub description: String,
}

/// Inclusive line range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

/// Where a state was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub topic_map_id: String,
    #[serde(default)]
    pub chunk_id: Option<String>,
    pub line_range: LineRange,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

/// A node in the dialectic graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialecticState {
    pub id: String,
    pub title: String,
    pub concept: String,
    pub phase: Phase,
    pub moments: Vec<Moment>,
    pub invariants: Vec<Invariant>,
    #[serde(default)]
    pub forces: Vec<Force>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub next_states: Vec<String>,
    #[serde(default)]
    pub previous_states: Vec<String>,
    pub provenance: Provenance,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl DialecticState {
    /// Decode a state from JSON and validate it.
    pub fn from_json(value: serde_json::Value) -> Result<Self, DialecticError> {
        let state: Self = serde_json::from_value(value)
            .map_err(|e| DialecticError::validation(format!("dialectic state: {e}")))?;
        state.validate()?;
        Ok(state)
    }

    /// Check shape constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), DialecticError> {
        check_id("state id", &self.id)?;
        check_non_empty(&self.id, "title", &self.title)?;
        check_non_empty(&self.id, "concept", &self.concept)?;

        let mut names = BTreeSet::new();
        for moment in &self.moments {
            check_non_empty(&self.id, "moment name", &moment.name)?;
            if !names.insert(moment.name.as_str()) {
                return Err(DialecticError::validation(format!(
                    "state {}: duplicate moment '{}'",
                    self.id, moment.name
                )));
            }
        }
        for invariant in &self.invariants {
            check_non_empty(&self.id, "invariant id", &invariant.id)?;
        }
        for force in &self.forces {
            check_non_empty(&self.id, "force id", &force.id)?;
            check_non_empty(&self.id, "force target", &force.target_state)?;
        }
        for transition in &self.transitions {
            check_non_empty(&self.id, "transition id", &transition.id)?;
            check_non_empty(&self.id, "transition from", &transition.from)?;
            check_non_empty(&self.id, "transition to", &transition.to)?;
        }

        let range = self.provenance.line_range;
        if range.start > range.end {
            return Err(DialecticError::validation(format!(
                "state {}: line range {}..{} is reversed",
                self.id, range.start, range.end
            )));
        }
        Ok(())
    }

    /// Look up a moment by name.
    #[must_use]
    pub fn moment(&self, name: &str) -> Option<&Moment> {
        self.moments.iter().find(|m| m.name == name)
    }
}

/// Metadata recorded alongside an IR aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrMetadata {
    #[serde(default)]
    pub source_file: Option<String>,
    pub total_states: usize,
    /// Per-state phase classification.
    #[serde(default, rename = "phaseMap", alias = "cpuGpuMapping")]
    pub phase_map: BTreeMap<String, Phase>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A titled, sectioned, ordered set of states.
///
/// Built once by its defining factory and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialecticIR {
    pub id: String,
    pub title: String,
    pub section: String,
    pub states: Vec<DialecticState>,
    #[serde(default)]
    pub metadata: Option<IrMetadata>,
}

impl DialecticIR {
    /// Decode an IR from JSON text and validate it.
    pub fn from_json_str(text: &str) -> Result<Self, DialecticError> {
        let ir: Self = serde_json::from_str(text)
            .map_err(|e| DialecticError::validation(format!("dialectic IR: {e}")))?;
        ir.validate()?;
        Ok(ir)
    }

    /// Validate the aggregate and every state it owns.
    pub fn validate(&self) -> Result<(), DialecticError> {
        check_id("IR id", &self.id)?;
        if self.states.len() > MAX_STATES_PER_IR {
            return Err(DialecticError::validation(format!(
                "IR {}: {} states exceeds limit of {}",
                self.id,
                self.states.len(),
                MAX_STATES_PER_IR
            )));
        }
        for state in &self.states {
            state.validate()?;
        }
        if let Some(metadata) = &self.metadata
            && metadata.total_states != self.states.len()
        {
            return Err(DialecticError::validation(format!(
                "IR {}: metadata declares {} states, found {}",
                self.id,
                metadata.total_states,
                self.states.len()
            )));
        }
        Ok(())
    }

    /// Look up a state by id.
    #[must_use]
    pub fn state(&self, id: &str) -> Option<&DialecticState> {
        self.states.iter().find(|s| s.id == id)
    }

    /// State ids in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|s| s.id.as_str())
    }
}

fn check_id(what: &str, id: &str) -> Result<(), DialecticError> {
    if id.trim().is_empty() {
        return Err(DialecticError::validation(format!("{what} is empty")));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(DialecticError::validation(format!(
            "{what} exceeds {MAX_ID_LENGTH} bytes"
        )));
    }
    Ok(())
}

fn check_non_empty(owner: &str, what: &str, value: &str) -> Result<(), DialecticError> {
    if value.trim().is_empty() {
        return Err(DialecticError::validation(format!(
            "state {owner}: {what} is empty"
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

    fn state_json() -> serde_json::Value {
        json!({
            "id": "s-1",
            "title": "Being",
            "concept": "Being",
            "phase": "quality",
            "moments": [
                {"name": "being", "definition": "pure being", "type": "polarity",
                 "relation": "opposite", "relatedTo": "nothing"},
                {"name": "nothing", "definition": "pure nothing", "type": "negation"}
            ],
            "invariants": [{"id": "s-1-inv-1", "constraint": "being = nothing", "predicate": "equal(being, nothing)"}],
            "nextStates": ["s-2"],
            "provenance": {"topicMapId": "being", "lineRange": {"start": 1, "end": 10}}
        })
    }

    #[test]
    fn decodes_with_defaults() {
        let state = DialecticState::from_json(state_json()).expect("valid state");
        assert_eq!(state.phase, Phase::Quality);
        assert_eq!(state.moments[0].relation, Some(MomentRelation::Opposite));
        assert!(state.forces.is_empty());
        assert!(state.previous_states.is_empty());
        assert_eq!(state.provenance.chunk_id, None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut value = state_json();
        value.as_object_mut().expect("object").remove("concept");
        let err = DialecticState::from_json(value).expect_err("missing concept");
        assert!(err.is_validation());
        assert!(err.to_string().contains("concept"));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let mut value = state_json();
        value["moments"] = json!("not a list");
        assert!(DialecticState::from_json(value).is_err());
    }

    #[test]
    fn duplicate_moment_names_are_rejected() {
        let mut value = state_json();
        value["moments"][1]["name"] = json!("being");
        let err = DialecticState::from_json(value).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate moment"));
    }

    #[test]
    fn reversed_line_range_is_rejected() {
        let mut value = state_json();
        value["provenance"]["lineRange"] = json!({"start": 9, "end": 2});
        assert!(DialecticState::from_json(value).is_err());
    }

    #[test]
    fn ir_total_states_must_match() {
        let state = DialecticState::from_json(state_json()).expect("valid state");
        let mut ir = DialecticIR {
            id: "ir".to_string(),
            title: "IR".to_string(),
            section: "A".to_string(),
            states: vec![state],
            metadata: Some(IrMetadata {
                total_states: 1,
                ..IrMetadata::default()
            }),
        };
        assert!(ir.validate().is_ok());

        if let Some(metadata) = ir.metadata.as_mut() {
            metadata.total_states = 3;
        }
        assert!(ir.validate().is_err());
    }

    #[test]
    fn legacy_mapping_alias_is_accepted() {
        let text = r#"{"id":"ir","title":"t","section":"s","states":[],
            "metadata":{"totalStates":0,"cpuGpuMapping":{"s-1":"quality"}}}"#;
        let ir = DialecticIR::from_json_str(text).expect("valid ir");
        let metadata = ir.metadata.expect("metadata");
        assert_eq!(metadata.phase_map.get("s-1"), Some(&Phase::Quality));
    }
}
