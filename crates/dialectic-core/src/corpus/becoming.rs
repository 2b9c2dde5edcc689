//! The Becoming section: unity of being and nothing, its moments, and its
//! sublation into existence.

use crate::content::ContentSet;
use crate::model::{
    DialecticIR, DialecticState, Force, ForceType, Invariant, IrMetadata, LineRange, Mechanism,
    Moment, MomentType, Phase, Provenance, Transition,
};
use crate::DialecticError;

/// Registry module of the Becoming aggregate.
pub const MODULE: &str = "@relative/being/quality/being/becoming-ir";

/// Export name of the Becoming aggregate.
pub const EXPORT: &str = "becomingIR";

const CONTENT_JSON: &str = include_str!("becoming_content.json");

fn force(
    id: &str,
    description: &str,
    kind: ForceType,
    trigger: &str,
    effect: &str,
    target_state: &str,
) -> Force {
    Force {
        id: id.to_string(),
        description: description.to_string(),
        kind,
        trigger: trigger.to_string(),
        effect: effect.to_string(),
        target_state: target_state.to_string(),
    }
}

fn transition(id: &str, from: &str, to: &str, mechanism: Mechanism, description: &str) -> Transition {
    Transition {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        mechanism,
        middle_term: None,
        conditions: Vec::new(),
        description: description.to_string(),
    }
}

fn provenance(topic_map_id: &str, start: u32, end: u32, section: &str, order: u32) -> Provenance {
    Provenance {
        topic_map_id: topic_map_id.to_string(),
        chunk_id: None,
        line_range: LineRange { start, end },
        section: Some(section.to_string()),
        order: Some(order),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn states() -> Vec<DialecticState> {
    vec![
        DialecticState {
            id: "becoming-1".to_string(),
            title: "C.1. Unity of being and nothing — same yet distinct".to_string(),
            concept: "UnityBeingNothing".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("being", "Pure being passing over into nothing", MomentType::Determination),
                Moment::new("nothing", "Pure nothing passing over into being", MomentType::Negation),
                Moment::new("movement", "Immediate vanishing of one into the other", MomentType::Mediation),
            ],
            invariants: vec![
                Invariant::new("becoming-1-inv-1", "being = nothing", "equals(being, nothing)"),
                Invariant::new("becoming-1-inv-2", "being ≠ nothing (distinct yet inseparable)", "distinctYetInseparable(being, nothing)"),
                Invariant::new("becoming-1-inv-3", "movement = immediateVanishing", "equals(movement, immediateVanishing)"),
            ],
            forces: vec![
                force(
                    "becoming-1-force-1",
                    "Movement of vanishing establishes determinate unity",
                    ForceType::Passover,
                    "movement.present = true",
                    "determinateUnity.emerges = true",
                    "becoming-2",
                ),
            ],
            transitions: vec![
                transition(
                    "becoming-1-trans-1",
                    "becoming-1",
                    "becoming-2",
                    Mechanism::Passover,
                    "From abstract unity to determinate unity",
                ),
            ],
            next_states: strings(&["becoming-2"]),
            previous_states: strings(&["nothing-2"]),
            provenance: provenance("becoming-1", 11, 30, "C.1. Unity of being and nothing", 1),
            description: Some("Pure being and pure nothing are therefore the same. The truth is neither being nor nothing, but rather that being has passed over into nothing and nothing into being; 'has passed over,' not passes over. But the truth is just as much that they are not without distinction; it is rather that they are not the same, that they are absolutely distinct yet equally unseparated and inseparable, and that each immediately vanishes in its opposite. Their truth is therefore this movement of the immediate vanishing of the one into the other: becoming, a movement in which the two are distinguished, but by a distinction which has just as immediately dissolved itself.".to_string()),
            key_points: strings(&[
                "Pure being and pure nothing are the same",
                "Truth is neither being nor nothing",
                "Being has passed over into nothing and nothing into being",
                "'Has passed over,' not passes over",
                "They are not without distinction",
                "They are not the same, absolutely distinct",
                "Yet equally unseparated and inseparable",
                "Each immediately vanishes in its opposite",
                "Truth is movement of immediate vanishing of one into the other",
                "Becoming: movement in which two are distinguished",
                "Distinction has just as immediately dissolved itself",
            ]),
        },
        DialecticState {
            id: "becoming-2".to_string(),
            title: "C.2. Becoming as unseparatedness — determinate unity".to_string(),
            concept: "Unseparatedness".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("determinateUnity", "Being and nothing equally are in unity", MomentType::Mediation),
                Moment::new("vanishing", "Each only as vanishing moment", MomentType::Process),
                Moment::new("moments", "Still distinguished yet sublated", MomentType::Moment),
            ],
            invariants: vec![
                Invariant::new("becoming-2-inv-1", "determinateUnity.includes = {being, nothing}", "includes(determinateUnity, {being, nothing})"),
                Invariant::new("becoming-2-inv-2", "vanishing = sublatedBeingNothing", "equals(vanishing, sublatedBeingNothing)"),
            ],
            forces: vec![
                force(
                    "becoming-2-force-1",
                    "Distinction of moments drives to double determination",
                    ForceType::Mediation,
                    "moments.distinguished = true",
                    "doubleUnity.emerges = true",
                    "becoming-3",
                ),
            ],
            transitions: vec![
                transition(
                    "becoming-2-trans-1",
                    "becoming-2",
                    "becoming-3",
                    Mechanism::Mediation,
                    "From simple unseparatedness to two unities",
                ),
            ],
            next_states: strings(&["becoming-3"]),
            previous_states: strings(&["becoming-1"]),
            provenance: provenance("becoming-2", 33, 44, "C.2. The moments of becoming", 1),
            description: Some("Becoming is the unseparatedness of being and nothing, not the unity that abstracts from being and nothing; as the unity of being and nothing it is rather this determinate unity, or one in which being and nothing equally are. However, inasmuch as being and nothing are each unseparated from its other, each is not. In this unity, therefore, they are, but as vanishing, only as sublated. They sink from their initially represented self-subsistence into moments which are still distinguished but at the same time sublated.".to_string()),
            key_points: strings(&[
                "Becoming is unseparatedness of being and nothing",
                "Not unity that abstracts from being and nothing",
                "Unity of being and nothing is determinate unity",
                "One in which being and nothing equally are",
                "Each unseparated from its other, each is not",
                "In unity they are, but as vanishing, only as sublated",
                "Sink from self-subsistence into moments still distinguished but sublated",
            ]),
        },
        DialecticState {
            id: "becoming-3".to_string(),
            title: "C.2. Two unities — being and nothing as moments".to_string(),
            concept: "DoubleUnity".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("unityBeing", "Being immediate referencing nothing", MomentType::Determination),
                Moment::new("unityNothing", "Nothing immediate referencing being", MomentType::Negation),
                Moment::new("directions", "Coming-to-be and ceasing-to-be", MomentType::Process),
            ],
            invariants: vec![
                Invariant::new("becoming-3-inv-1", "directions = {comingToBe, ceasingToBe}", "equals(directions, {comingToBe, ceasingToBe})"),
            ],
            forces: vec![
                force(
                    "becoming-3-force-1",
                    "Unequal determinations produce interpenetration",
                    ForceType::Contradiction,
                    "directions.unequal = true",
                    "interpenetration.emerges = true",
                    "becoming-4",
                ),
            ],
            transitions: vec![
                transition(
                    "becoming-3-trans-1",
                    "becoming-3",
                    "becoming-4",
                    Mechanism::Contradiction,
                    "From double unity to interpenetration",
                ),
            ],
            next_states: strings(&["becoming-4"]),
            previous_states: strings(&["becoming-2"]),
            provenance: provenance("becoming-3", 46, 60, "C.2. The moments of becoming", 2),
            description: Some("Grasped as thus distinguished, each is in their distinguishedness a unity with the other. Becoming thus contains being and nothing as two such unities, each of which is itself unity of being and nothing; the one is being as immediate and as reference to nothing; the other is nothing as immediate and as reference to being; in these unities the determinations are of unequal value. Becoming is in this way doubly determined. In one determination, nothing is the immediate, that is, the determination begins with nothing and this refers to being; that is to say, it passes over into it. In the other determination, being is the immediate, that is, the determination begins with being and this passes over into nothing: coming-to-be and ceasing-to-be.".to_string()),
            key_points: strings(&[
                "Each in distinguishedness is unity with the other",
                "Becoming contains being and nothing as two unities",
                "Each unity is itself unity of being and nothing",
                "One: being as immediate and reference to nothing",
                "Other: nothing as immediate and reference to being",
                "Determinations of unequal value",
                "Becoming doubly determined: coming-to-be and ceasing-to-be",
            ]),
        },
        DialecticState {
            id: "becoming-4".to_string(),
            title: "C.2. Coming-to-be and ceasing-to-be — interpenetration".to_string(),
            concept: "Interpenetration".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("comingToBe", "Nothing passes over into being", MomentType::Process),
                Moment::new("ceasingToBe", "Being passes over into nothing", MomentType::Process),
                Moment::new("selfSublation", "Each sublates itself within itself", MomentType::Sublation),
            ],
            invariants: vec![
                Invariant::new("becoming-4-inv-1", "comingToBe = ceasingToBe (same becoming)", "equals(comingToBe, ceasingToBe)"),
                Invariant::new("becoming-4-inv-2", "selfSublation.internal = true", "internal(selfSublation)"),
            ],
            forces: vec![
                force(
                    "becoming-4-force-1",
                    "Mutual sublation drives toward equilibrium",
                    ForceType::Mediation,
                    "selfSublation.active = true",
                    "equilibrium.emerges = true",
                    "becoming-5",
                ),
            ],
            transitions: vec![
                transition(
                    "becoming-4-trans-1",
                    "becoming-4",
                    "becoming-5",
                    Mechanism::Mediation,
                    "From interpenetration to equilibrium",
                ),
            ],
            next_states: strings(&["becoming-5"]),
            previous_states: strings(&["becoming-3"]),
            provenance: provenance("becoming-4", 62, 82, "C.2. The moments of becoming", 3),
            description: Some("Both are the same, becoming, and even as directions that are so different they interpenetrate and paralyze each other. The one is ceasing-to-be; being passes over into nothing, but nothing is just as much the opposite of itself, the passing-over into being, coming-to-be. This coming-to-be is the other direction; nothing goes over into being, but being equally sublates itself and is rather the passing-over into nothing; it is ceasing-to-be. They do not sublate themselves reciprocally [the one sublating the other externally] but each rather sublates itself in itself and is within it the opposite of itself.".to_string()),
            key_points: strings(&[
                "Both are the same, becoming",
                "Directions interpenetrate and paralyze each other",
                "One is ceasing-to-be: being passes over into nothing",
                "Nothing is opposite of itself: passing-over into being, coming-to-be",
                "Coming-to-be is other direction: nothing goes over into being",
                "Being equally sublates itself: passing-over into nothing, ceasing-to-be",
                "They do not sublate themselves reciprocally",
                "Each rather sublates itself in itself",
                "Each is within it the opposite of itself",
            ]),
        },
        DialecticState {
            id: "becoming-5".to_string(),
            title: "C.3. Equilibrium and quiescent unity — vanishing of becoming".to_string(),
            concept: "Equilibrium".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("equilibrium", "Balance of coming-to-be and ceasing-to-be", MomentType::Mediation),
                Moment::new("quiescentUnity", "Becoming collects into quiescent unity", MomentType::Quality),
                Moment::new("vanishing", "Vanishing of vanishing itself", MomentType::Process),
            ],
            invariants: vec![
                Invariant::new("becoming-5-inv-1", "equilibrium = becoming", "equals(equilibrium, becoming)"),
                Invariant::new("becoming-5-inv-2", "vanishing = vanishingOfVanishing", "equals(vanishing, vanishingOfVanishing)"),
            ],
            forces: vec![
                force(
                    "becoming-5-force-1",
                    "Quiescent unity hints at contradiction of becoming",
                    ForceType::Reflection,
                    "quiescentUnity.present = true",
                    "contradiction.emerges = true",
                    "becoming-6",
                ),
            ],
            transitions: vec![
                transition(
                    "becoming-5-trans-1",
                    "becoming-5",
                    "becoming-6",
                    Mechanism::Reflection,
                    "From equilibrium to contradiction of becoming",
                ),
            ],
            next_states: strings(&["becoming-6"]),
            previous_states: strings(&["becoming-4"]),
            provenance: provenance("becoming-5", 85, 91, "C.3. Sublation of becoming", 1),
            description: Some("The equilibrium in which coming-to-be and ceasing-to-be are poised is in the first place becoming itself. But this becoming equally collects itself in quiescent unity. Being and nothing are in it only as vanishing; becoming itself, however, is only by virtue of their being distinguished. Their vanishing is therefore the vanishing of becoming, or the vanishing of the vanishing itself. Becoming is a ceaseless unrest that collapses into a quiescent result.".to_string()),
            key_points: strings(&[
                "Equilibrium of coming-to-be and ceasing-to-be is becoming itself",
                "Becoming collects itself in quiescent unity",
                "Being and nothing are in it only as vanishing",
                "Becoming only by virtue of their being distinguished",
                "Vanishing is vanishing of becoming, vanishing of vanishing itself",
                "Becoming is ceaseless unrest that collapses into quiescent result",
            ]),
        },
        DialecticState {
            id: "becoming-6".to_string(),
            title: "C.3. Contradiction and vanishedness — not nothing".to_string(),
            concept: "Vanishedness".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("contradiction", "Union of distinct being & nothing destroys itself", MomentType::Negation),
                Moment::new("vanishedness", "Result of becoming, but not nothing", MomentType::Determination),
                Moment::new("distinction", "Becoming rests on being distinct", MomentType::Determination),
            ],
            invariants: vec![
                Invariant::new("becoming-6-inv-1", "vanishedness ≠ nothing", "notEquals(vanishedness, nothing)"),
            ],
            forces: vec![
                force(
                    "becoming-6-force-1",
                    "Vanishedness prepares quiescent simplicity",
                    ForceType::Sublation,
                    "vanishedness.established = true",
                    "quiescentSimplicity.emerges = true",
                    "becoming-7",
                ),
            ],
            transitions: vec![
                transition(
                    "becoming-6-trans-1",
                    "becoming-6",
                    "becoming-7",
                    Mechanism::Sublation,
                    "From contradiction to quiescent simplicity",
                ),
            ],
            next_states: strings(&["becoming-7"]),
            previous_states: strings(&["becoming-5"]),
            provenance: provenance("becoming-6", 93, 99, "C.3. Sublation of becoming", 2),
            description: Some("This can also be expressed thus: becoming is the vanishing of being into nothing, and of nothing into being, and the vanishing of being and nothing in general; but at the same time it rests on their being distinct. It therefore contradicts itself in itself, because what it unites within itself is self-opposed; but such a union destroys itself. This result is a vanishedness, but it is not nothing; as such, it would be only a relapse into one of the already sublated determinations and not the result of nothing and of being.".to_string()),
            key_points: strings(&[
                "Becoming is vanishing of being into nothing, nothing into being",
                "Vanishing of being and nothing in general",
                "Rests on their being distinct",
                "Contradicts itself in itself",
                "Union destroys itself",
                "Result is vanishedness, but not nothing",
                "Would be relapse into already sublated determinations",
                "Not result of nothing and of being",
            ]),
        },
        DialecticState {
            id: "becoming-7".to_string(),
            title: "C.3. Transition to existence — quiescent simplicity".to_string(),
            concept: "TransitionToExistence".to_string(),
            phase: Phase::Quality,
            moments: vec![
                Moment::new("quiescentSimplicity", "Unity of being and nothing become simple", MomentType::Quality),
                Moment::new("beingAsDetermination", "Being as determination of whole", MomentType::Determination),
                Moment::new("existence", "Unity as existent immediate result", MomentType::Determination),
            ],
            invariants: vec![
                Invariant::new("becoming-7-inv-1", "quiescentSimplicity = being (determination of whole)", "equals(quiescentSimplicity, beingDetermination)"),
                Invariant::new("becoming-7-inv-2", "unity.asExistent = existence", "equals(unityAsExistent, existence)"),
            ],
            forces: vec![
                force(
                    "becoming-7-force-1",
                    "Quiescent unity transitions to existence chapter",
                    ForceType::Passover,
                    "existence.result = true",
                    "existenceSection.initiated = true",
                    "existence-1",
                ),
            ],
            transitions: vec![
                transition(
                    "becoming-7-trans-1",
                    "becoming-7",
                    "existence-1",
                    Mechanism::Passover,
                    "Becoming collapses into Existence",
                ),
            ],
            next_states: strings(&["existence-1"]),
            previous_states: strings(&["becoming-6"]),
            provenance: provenance("becoming-7", 101, 108, "C.3. Sublation of becoming", 3),
            description: Some("It is the unity of being and nothing that has become quiescent simplicity. But this quiescent simplicity is being, yet no longer for itself but as determination of the whole. Becoming, as transition into the unity of being and nothing, a unity which is as existent or has the shape of the one-sided immediate unity of these moments, is existence.".to_string()),
            key_points: strings(&[
                "Unity of being and nothing that has become quiescent simplicity",
                "Quiescent simplicity is being",
                "No longer for itself but as determination of whole",
                "Becoming as transition into unity of being and nothing",
                "Unity which is as existent",
                "Has shape of one-sided immediate unity of these moments",
                "Is existence",
            ]),
        },
    ]
}

/// The Becoming aggregate: seven states from the unity of being and nothing
/// to the transition into existence.
#[must_use]
pub fn becoming_ir() -> DialecticIR {
    let states = states();
    let metadata = IrMetadata {
        source_file: Some("becoming.txt".to_string()),
        total_states: states.len(),
        phase_map: states.iter().map(|s| (s.id.clone(), s.phase)).collect(),
        created_at: None,
        updated_at: None,
    };
    DialecticIR {
        id: "becoming-ir".to_string(),
        title: "Becoming IR: Unity of Being and Nothing".to_string(),
        section: "C. BECOMING".to_string(),
        states,
        metadata: Some(metadata),
    }
}

/// Canonical chunks and logical operations for Becoming.
pub fn becoming_content() -> Result<ContentSet, DialecticError> {
    serde_json::from_str(CONTENT_JSON)
        .map_err(|e| DialecticError::DeserializationError(format!("becoming content: {e}")))
}
