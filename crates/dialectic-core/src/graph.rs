//! # State Graph
//!
//! A read-only view over the states of one or more IR aggregates, with
//! traversal and a consistency check of the declared links.
//!
//! Edges are the realized transitions. `nextStates`/`previousStates` are
//! declarations that must agree with those edges; [`StateGraph::check`]
//! reports every disagreement. All maps are `BTreeMap`/`BTreeSet` so reports
//! are ordered deterministically.

use crate::model::{DialecticIR, DialecticState};
use crate::primitives::MAX_TRAVERSAL_DEPTH;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Directed graph of dialectic states keyed by state id.
#[derive(Debug, Clone, Default)]
pub struct StateGraph {
    states: BTreeMap<String, DialecticState>,
    edges: BTreeMap<String, BTreeSet<String>>,
    reverse: BTreeMap<String, BTreeSet<String>>,
    duplicates: BTreeSet<String>,
}

/// A link between two state ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Link {
    pub from: String,
    pub to: String,
}

/// A transition or force that does not fit the state declaring it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationIssue {
    pub state_id: String,
    pub item_id: String,
    pub target: String,
}

/// Result of [`StateGraph::check`]. Empty lists mean no problem of that kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphReport {
    /// State ids declared more than once across the loaded aggregates.
    pub duplicate_states: Vec<String>,
    /// Transitions whose `from` is not the state declaring them.
    pub misplaced_transitions: Vec<DeclarationIssue>,
    /// Transitions whose `to` is absent from the declaring state's `nextStates`.
    pub undeclared_next: Vec<Link>,
    /// next/previous declarations without the matching back-reference.
    pub asymmetric_links: Vec<Link>,
    /// Links pointing at states that are not loaded.
    pub unresolved_links: Vec<Link>,
    /// Forces with no transition to their target state.
    pub unrealized_forces: Vec<DeclarationIssue>,
}

impl GraphReport {
    /// No contradiction between transitions and declarations among loaded states.
    ///
    /// Unresolved links and unrealized forces are not counted: a graph may point
    /// into a neighbouring IR that is not loaded, and forces are only candidates.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.duplicate_states.is_empty()
            && self.misplaced_transitions.is_empty()
            && self.undeclared_next.is_empty()
            && self.asymmetric_links.is_empty()
    }

    /// Consistent, and every link resolves to a loaded state.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.is_consistent() && self.unresolved_links.is_empty()
    }
}

impl StateGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_ir(ir: &DialecticIR) -> Self {
        let mut graph = Self::new();
        graph.add_ir(ir);
        graph
    }

    /// Build one graph over several aggregates, e.g. neighbouring sections.
    pub fn from_irs<'a>(irs: impl IntoIterator<Item = &'a DialecticIR>) -> Self {
        let mut graph = Self::new();
        for ir in irs {
            graph.add_ir(ir);
        }
        graph
    }

    /// Add every state of an aggregate. A repeated state id keeps the first
    /// declaration and is reported as a duplicate.
    pub fn add_ir(&mut self, ir: &DialecticIR) {
        for state in &ir.states {
            self.add_state(state.clone());
        }
    }

    pub fn add_state(&mut self, state: DialecticState) {
        if self.states.contains_key(&state.id) {
            self.duplicates.insert(state.id);
            return;
        }
        for transition in &state.transitions {
            self.edges
                .entry(transition.from.clone())
                .or_default()
                .insert(transition.to.clone());
            self.reverse
                .entry(transition.to.clone())
                .or_default()
                .insert(transition.from.clone());
        }
        self.states.insert(state.id.clone(), state);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    #[must_use]
    pub fn state(&self, id: &str) -> Option<&DialecticState> {
        self.states.get(id)
    }

    pub fn states(&self) -> impl Iterator<Item = &DialecticState> {
        self.states.values()
    }

    /// Transition targets of a state, in id order. Targets may be unloaded.
    #[must_use]
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.edges
            .get(id)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Transition sources pointing at a state, in id order.
    #[must_use]
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.reverse
            .get(id)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Breadth-first walk along transitions, bounded by `depth`.
    ///
    /// Returns `None` when `start` is not loaded. Unloaded targets are included
    /// in the walk but not expanded.
    #[must_use]
    pub fn walk(&self, start: &str, depth: usize) -> Option<Vec<String>> {
        let depth = depth.min(MAX_TRAVERSAL_DEPTH);
        if !self.contains(start) {
            return None;
        }

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited.insert(start.to_string());
        queue.push_back((start.to_string(), 0usize));

        while let Some((current, current_depth)) = queue.pop_front() {
            order.push(current.clone());
            if current_depth >= depth || !self.contains(&current) {
                continue;
            }
            for next in self.successors(&current) {
                if visited.insert(next.to_string()) {
                    queue.push_back((next.to_string(), current_depth.saturating_add(1)));
                }
            }
        }
        Some(order)
    }

    /// Shortest transition path from `start` to `end`, both inclusive.
    #[must_use]
    pub fn path(&self, start: &str, end: &str) -> Option<Vec<String>> {
        if !self.contains(start) {
            return None;
        }
        if start == end {
            return Some(vec![start.to_string()]);
        }

        let mut parent: BTreeMap<String, String> = BTreeMap::new();
        let mut queue = VecDeque::new();
        queue.push_back((start.to_string(), 0usize));

        while let Some((current, hops)) = queue.pop_front() {
            if hops >= MAX_TRAVERSAL_DEPTH {
                continue;
            }
            for next in self.successors(&current) {
                if next == start || parent.contains_key(next) {
                    continue;
                }
                parent.insert(next.to_string(), current.clone());
                if next == end {
                    return Some(Self::unwind(&parent, start, end));
                }
                queue.push_back((next.to_string(), hops.saturating_add(1)));
            }
        }
        None
    }

    fn unwind(parent: &BTreeMap<String, String>, start: &str, end: &str) -> Vec<String> {
        let mut path = vec![end.to_string()];
        let mut cursor = end;
        while let Some(prev) = parent.get(cursor) {
            path.push(prev.clone());
            if prev == start {
                break;
            }
            cursor = prev.as_str();
        }
        path.reverse();
        path
    }

    /// Check transitions and next/previous declarations against each other.
    #[must_use]
    pub fn check(&self) -> GraphReport {
        let mut misplaced = BTreeSet::new();
        let mut undeclared = BTreeSet::new();
        let mut asymmetric = BTreeSet::new();
        let mut unresolved = BTreeSet::new();
        let mut unrealized = BTreeSet::new();

        for state in self.states.values() {
            for transition in &state.transitions {
                if transition.from != state.id {
                    misplaced.insert(DeclarationIssue {
                        state_id: state.id.clone(),
                        item_id: transition.id.clone(),
                        target: transition.to.clone(),
                    });
                }
                if !state.next_states.contains(&transition.to) {
                    undeclared.insert(link(&state.id, &transition.to));
                }
                if !self.contains(&transition.to) {
                    unresolved.insert(link(&state.id, &transition.to));
                }
            }

            for next in &state.next_states {
                match self.states.get(next) {
                    Some(target) if !target.previous_states.contains(&state.id) => {
                        asymmetric.insert(link(&state.id, next));
                    }
                    Some(_) => {}
                    None => {
                        unresolved.insert(link(&state.id, next));
                    }
                }
            }

            for previous in &state.previous_states {
                match self.states.get(previous) {
                    Some(source) if !source.next_states.contains(&state.id) => {
                        asymmetric.insert(link(previous, &state.id));
                    }
                    Some(_) => {}
                    None => {
                        unresolved.insert(link(previous, &state.id));
                    }
                }
            }

            for force in &state.forces {
                let realized = state
                    .transitions
                    .iter()
                    .any(|t| t.to == force.target_state);
                if !realized {
                    unrealized.insert(DeclarationIssue {
                        state_id: state.id.clone(),
                        item_id: force.id.clone(),
                        target: force.target_state.clone(),
                    });
                }
            }
        }

        GraphReport {
            duplicate_states: self.duplicates.iter().cloned().collect(),
            misplaced_transitions: misplaced.into_iter().collect(),
            undeclared_next: undeclared.into_iter().collect(),
            asymmetric_links: asymmetric.into_iter().collect(),
            unresolved_links: unresolved.into_iter().collect(),
            unrealized_forces: unrealized.into_iter().collect(),
        }
    }
}

fn link(from: &str, to: &str) -> Link {
    Link {
        from: from.to_string(),
        to: to.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineRange, Mechanism, Phase, Provenance, Transition};

    fn state(id: &str, next: &[&str], previous: &[&str]) -> DialecticState {
        DialecticState {
            id: id.to_string(),
            title: id.to_uppercase(),
            concept: "C".to_string(),
            phase: Phase::Quality,
            moments: Vec::new(),
            invariants: Vec::new(),
            forces: Vec::new(),
            transitions: next
                .iter()
                .map(|to| Transition {
                    id: format!("{id}->{to}"),
                    from: id.to_string(),
                    to: (*to).to_string(),
                    mechanism: Mechanism::Sublation,
                    middle_term: None,
                    conditions: Vec::new(),
                    description: String::new(),
                })
                .collect(),
            next_states: next.iter().map(|s| (*s).to_string()).collect(),
            previous_states: previous.iter().map(|s| (*s).to_string()).collect(),
            provenance: Provenance {
                topic_map_id: "tm".to_string(),
                chunk_id: None,
                line_range: LineRange { start: 0, end: 0 },
                section: None,
                order: None,
            },
            description: None,
            key_points: Vec::new(),
        }
    }

    fn ir(states: Vec<DialecticState>) -> DialecticIR {
        DialecticIR {
            id: "ir".to_string(),
            title: "IR".to_string(),
            section: "A".to_string(),
            states,
            metadata: None,
        }
    }

    fn chain() -> StateGraph {
        StateGraph::from_ir(&ir(vec![
            state("a", &["b"], &[]),
            state("b", &["c"], &["a"]),
            state("c", &[], &["b"]),
        ]))
    }

    #[test]
    fn consistent_chain_is_closed() {
        let report = chain().check();
        assert!(report.is_consistent());
        assert!(report.is_closed());
    }

    #[test]
    fn neighbours() {
        let graph = chain();
        assert_eq!(graph.successors("a"), vec!["b"]);
        assert_eq!(graph.predecessors("c"), vec!["b"]);
        assert!(graph.successors("c").is_empty());
    }

    #[test]
    fn walk_is_bounded() {
        let graph = chain();
        assert_eq!(
            graph.walk("a", 1),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(graph.walk("a", 10).map(|w| w.len()), Some(3));
        assert_eq!(graph.walk("zzz", 3), None);
    }

    #[test]
    fn shortest_path() {
        let graph = chain();
        assert_eq!(
            graph.path("a", "c"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(graph.path("c", "a"), None);
        assert_eq!(graph.path("b", "b"), Some(vec!["b".to_string()]));
    }

    #[test]
    fn missing_back_reference_is_asymmetric() {
        let graph = StateGraph::from_ir(&ir(vec![state("a", &["b"], &[]), state("b", &[], &[])]));
        let report = graph.check();
        assert_eq!(report.asymmetric_links, vec![link("a", "b")]);
        assert!(!report.is_consistent());
    }

    #[test]
    fn transition_outside_next_states_is_reported() {
        let mut a = state("a", &["b"], &[]);
        a.next_states.clear();
        let graph = StateGraph::from_ir(&ir(vec![a, state("b", &[], &["a"])]));
        let report = graph.check();
        assert_eq!(report.undeclared_next, vec![link("a", "b")]);
        assert_eq!(report.asymmetric_links, vec![link("a", "b")]);
    }

    #[test]
    fn unloaded_neighbours_are_unresolved_not_inconsistent() {
        let graph = StateGraph::from_ir(&ir(vec![state("a", &["elsewhere"], &["before"])]));
        let report = graph.check();
        assert!(report.is_consistent());
        assert!(!report.is_closed());
        assert_eq!(
            report.unresolved_links,
            vec![link("a", "elsewhere"), link("before", "a")]
        );
    }

    #[test]
    fn duplicates_keep_first_declaration() {
        let mut graph = chain();
        let mut other = state("a", &[], &[]);
        other.title = "second".to_string();
        graph.add_state(other);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.state("a").map(|s| s.title.as_str()), Some("A"));
        assert_eq!(graph.check().duplicate_states, vec!["a".to_string()]);
    }
}
