//! # Dialectic Evaluation
//!
//! Turns one [`DialecticState`] into the aspect that represents it:
//!
//! - `signature`: one entry per moment, keyed by moment name.
//! - `facets`: the projections from [`crate::extract`] plus the essential
//!   relation that ties spectrum, connections and appearing together.
//! - `state`: the active status and the counts used by the summary event.
//!
//! Pure: the same state and context always produce the same aspect body.

use super::form::{Aspect, NewAspect};
use super::record::{AspectDraft, Bag};
use crate::DialecticError;
use crate::extract;
use crate::model::{DialecticState, MomentRelation, MomentType, Phase};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Payload of the `dialectic.evaluated` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    pub state_id: String,
    pub concept: String,
    pub phase: Phase,
    pub kind: String,
    pub pole_count: usize,
    pub relation_count: usize,
    pub appearing_mode: String,
    pub is_dialectical: bool,
}

/// The aspect to persist and the summary to announce.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub aspect: AspectDraft,
    pub summary: EvaluationSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignatureEntry<'a> {
    definition: &'a str,
    #[serde(rename = "type")]
    kind: &'a MomentType,
    relation: Option<&'a MomentRelation>,
    related_to: Option<&'a str>,
    spectral: bool,
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, DialecticError> {
    serde_json::to_value(value).map_err(|e| DialecticError::SerializationError(e.to_string()))
}

fn object(value: Value) -> Bag {
    match value {
        Value::Object(map) => map,
        _ => Bag::new(),
    }
}

/// Evaluate `state` under an optional `context`.
///
/// `context.groundId`, when a string, names the ground; otherwise the first
/// previous state does.
pub fn evaluate(state: &DialecticState, context: Option<&Bag>) -> Result<Evaluation, DialecticError> {
    state.validate()?;

    let mut signature = Bag::new();
    for moment in &state.moments {
        let entry = SignatureEntry {
            definition: &moment.definition,
            kind: &moment.kind,
            relation: moment.relation.as_ref(),
            related_to: moment.related_to.as_deref(),
            spectral: moment.kind.is_spectral(),
        };
        signature.insert(moment.name.clone(), to_value(&entry)?);
    }

    let spectrum = extract::spectrum(state);
    let relations = extract::relations(state);
    let appearing = extract::appearing(state);
    let constraints = extract::constraints(state);

    let grounded_in = context
        .and_then(|c| c.get("groundId"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| state.previous_states.first().cloned());

    let spectrum_value = to_value(&spectrum)?;
    let relations_value = to_value(&relations)?;
    let appearing_value = to_value(&appearing)?;

    let mut facets = object(json!({
        "dialecticState": to_value(state)?,
        "phase": state.phase,
        "essentialRelation": {
            "spectrum": spectrum_value,
            "connections": relations_value,
            "appearing": appearing_value,
            "groundedIn": grounded_in,
        },
        "spectrum": spectrum_value,
        "relations": relations_value,
        "appearing": appearing_value,
        "constraints": to_value(&constraints)?,
    }));
    if let Some(context) = context {
        facets.insert("context".to_string(), Value::Object(context.clone()));
    }

    let aspect_state = object(json!({
        "status": "active",
        "meta": {
            "isSpectral": true,
            "poleCount": spectrum.range,
            "relationCount": relations.len(),
            "appearingMode": appearing.mode,
        },
    }));

    let aspect = Aspect::create(NewAspect {
        id: Some(state.id.clone()),
        kind: state.concept.clone(),
        name: Some(state.title.clone()),
        state: Some(aspect_state),
        signature: Some(signature),
        facets: Some(facets),
        ..NewAspect::default()
    })?;

    let summary = EvaluationSummary {
        state_id: state.id.clone(),
        concept: state.concept.clone(),
        phase: state.phase,
        kind: "aspect".to_string(),
        pole_count: spectrum.range,
        relation_count: relations.len(),
        appearing_mode: appearing.mode,
        is_dialectical: spectrum.dialectical,
    };

    Ok(Evaluation {
        aspect: aspect.to_draft(),
        summary,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Force, ForceType, LineRange, Moment, Provenance};

    fn state() -> DialecticState {
        DialecticState {
            id: "being-1".to_string(),
            title: "Pure being".to_string(),
            concept: "Being".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("being", "indeterminate immediacy", MomentType::Polarity)
                    .related(MomentRelation::Opposite, "nothing"),
                Moment::new("nothing", "empty", MomentType::Negation)
                    .related(MomentRelation::Opposite, "being"),
                Moment::new("emptiness", "intuiting nothing", MomentType::Quality),
            ],
            invariants: Vec::new(),
            forces: vec![Force {
                id: "f".to_string(),
                description: "passes".to_string(),
                kind: ForceType::Passover,
                trigger: "thinking being".to_string(),
                effect: "nothing".to_string(),
                target_state: "nothing-1".to_string(),
            }],
            transitions: Vec::new(),
            next_states: vec!["nothing-1".to_string()],
            previous_states: vec!["prior".to_string()],
            provenance: Provenance {
                topic_map_id: "being-1".to_string(),
                chunk_id: None,
                line_range: LineRange { start: 1, end: 9 },
                section: None,
                order: Some(1),
            },
            description: None,
            key_points: Vec::new(),
        }
    }

    #[test]
    fn aspect_mirrors_state_identity() {
        let evaluation = evaluate(&state(), None).expect("evaluate");
        assert_eq!(evaluation.aspect.id.as_deref(), Some("being-1"));
        assert_eq!(evaluation.aspect.kind.as_deref(), Some("Being"));
        assert_eq!(evaluation.aspect.name.as_deref(), Some("Pure being"));
        assert!(evaluation.aspect.created_at.is_none());
    }

    #[test]
    fn signature_marks_spectral_moments() {
        let evaluation = evaluate(&state(), None).expect("evaluate");
        let signature = evaluation.aspect.signature.expect("signature");
        assert_eq!(signature.len(), 3);
        assert_eq!(signature["being"]["spectral"], true);
        assert_eq!(signature["being"]["relatedTo"], "nothing");
        assert_eq!(signature["emptiness"]["spectral"], false);
        assert_eq!(signature["emptiness"]["relation"], Value::Null);
    }

    #[test]
    fn summary_counts() {
        let summary = evaluate(&state(), None).expect("evaluate").summary;
        assert_eq!(summary.pole_count, 2);
        assert_eq!(summary.relation_count, 2);
        assert_eq!(summary.appearing_mode, "passover");
        assert!(summary.is_dialectical);
        assert_eq!(
            serde_json::to_value(&summary).expect("json")["phase"],
            "quality"
        );
    }

    #[test]
    fn ground_prefers_context() {
        let facets = evaluate(&state(), None).expect("evaluate").aspect.facets.expect("facets");
        assert_eq!(facets["essentialRelation"]["groundedIn"], "prior");
        assert!(facets.get("context").is_none());

        let context = object(json!({"groundId": "ground"}));
        let facets = evaluate(&state(), Some(&context))
            .expect("evaluate")
            .aspect
            .facets
            .expect("facets");
        assert_eq!(facets["essentialRelation"]["groundedIn"], "ground");
        assert_eq!(facets["context"]["groundId"], "ground");
    }

    #[test]
    fn facets_carry_the_whole_state() {
        let input = state();
        let facets = evaluate(&input, None).expect("evaluate").aspect.facets.expect("facets");
        assert_eq!(facets["dialecticState"]["id"], "being-1");
        assert_eq!(facets["dialecticState"]["moments"][1]["name"], "nothing");

        let back: DialecticState =
            serde_json::from_value(facets["dialecticState"].clone()).expect("state");
        assert_eq!(back, input);
    }

    #[test]
    fn state_bag_is_active() {
        let state_bag = evaluate(&state(), None).expect("evaluate").aspect.state;
        assert_eq!(state_bag["status"], "active");
        assert_eq!(state_bag["meta"]["isSpectral"], true);
        assert_eq!(state_bag["meta"]["poleCount"], 2);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = evaluate(&state(), None).expect("evaluate");
        let b = evaluate(&state(), None).expect("evaluate");
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.aspect.signature, b.aspect.signature);
        assert_eq!(a.aspect.facets, b.aspect.facets);
    }
}
