//! # Aspect Engine
//!
//! Applies commands to the aspect store and announces the result on the
//! event bus.
//!
//! Per command: parse (no I/O), at most one read, at most one write, then
//! one event. Events are published only after the write succeeded, so a
//! failed command leaves no trace on the bus.

use super::command::{Command, CommandEnvelope, events};
use super::evaluate::evaluate;
use super::form::Aspect;
use super::record::{AspectRecord, Bag};
use crate::DialecticError;
use crate::bus::{Event, EventBus, InMemoryEventBus};
use crate::primitives::{DEFAULT_SCOPE, ENGINE_SOURCE};
use crate::storage::AspectStore;
use crate::trace::{TraceMeta, child_span, start_trace};
use serde_json::{Value, json};

pub struct AspectEngine<S, B = InMemoryEventBus> {
    store: S,
    bus: B,
    scope: String,
}

impl<S, B> std::fmt::Debug for AspectEngine<S, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AspectEngine")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<S: AspectStore> AspectEngine<S> {
    /// Engine over `store` with a fresh in-memory bus.
    pub fn new(store: S) -> Self {
        Self::with_bus(store, InMemoryEventBus::new())
    }
}

impl<S: AspectStore, B: EventBus> AspectEngine<S, B> {
    pub fn with_bus(store: S, bus: B) -> Self {
        Self {
            store,
            bus,
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    /// Scope recorded on every emitted span.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn event_bus(&self) -> &B {
        &self.bus
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// The stored aspect for `id`, validated.
    pub fn get_aspect(&self, id: &str) -> Result<Option<Aspect>, DialecticError> {
        self.store
            .get_aspect_by_id(id)?
            .map(Aspect::from_record)
            .transpose()
    }

    /// Parse and execute an envelope.
    ///
    /// # Errors
    ///
    /// Parse errors before any I/O, `AspectNotFound` for mutations of an
    /// absent aspect, store and bus errors unchanged.
    pub fn handle(&mut self, envelope: &CommandEnvelope) -> Result<Vec<Event>, DialecticError> {
        let command = envelope.command()?;
        self.execute(command, envelope.meta.as_ref())
    }

    /// Execute an already parsed command.
    pub fn execute(
        &mut self,
        command: Command,
        meta: Option<&Bag>,
    ) -> Result<Vec<Event>, DialecticError> {
        let base = start_trace(ENGINE_SOURCE, meta);
        tracing::debug!(
            kind = command.kind(),
            id = command.target_id().unwrap_or_default(),
            trace_id = %base.trace_id,
            "handling command"
        );

        let event = match command {
            Command::Create(fields) => {
                let aspect = Aspect::create(fields)?;
                let record = self.persist(&aspect)?;
                self.emit(
                    &base,
                    events::CREATED,
                    json!({"id": record.id, "type": record.kind, "name": record.name}),
                )?
            }
            Command::Delete(target) => {
                let existed = self.store.get_aspect_by_id(&target.id)?.is_some();
                if existed && self.store.supports_delete() {
                    self.store.delete_aspect(&target.id)?;
                }
                self.emit(
                    &base,
                    events::DELETED,
                    json!({"id": target.id, "ok": existed}),
                )?
            }
            Command::SetCore(update) => {
                let aspect = self.must_get(&update.id)?.with_core(update.name, update.kind)?;
                let record = self.persist(&aspect)?;
                self.emit(
                    &base,
                    events::SET_CORE,
                    json!({"id": record.id, "name": record.name, "type": record.kind}),
                )?
            }
            Command::SetState(update) => {
                let aspect = self.must_get(&update.id)?.with_state(update.state)?;
                self.persist(&aspect)?;
                self.emit(&base, events::SET_STATE, json!({"id": update.id}))?
            }
            Command::PatchState(update) => {
                let aspect = self.must_get(&update.id)?.with_patched_state(update.patch)?;
                self.persist(&aspect)?;
                self.emit(&base, events::PATCH_STATE, json!({"id": update.id}))?
            }
            Command::Describe(target) => {
                let payload = match self.get_aspect(&target.id)? {
                    Some(aspect) => serde_json::to_value(aspect.summary())
                        .map_err(|e| DialecticError::SerializationError(e.to_string()))?,
                    None => json!({"id": target.id}),
                };
                self.emit(&base, events::DESCRIBE, payload)?
            }
            Command::Evaluate(request) => {
                let evaluation =
                    evaluate(&request.dialectic_state, request.context.as_ref())?;
                self.store.save_aspect(evaluation.aspect)?;
                let payload = serde_json::to_value(&evaluation.summary)
                    .map_err(|e| DialecticError::SerializationError(e.to_string()))?;
                self.emit(&base, events::EVALUATED, payload)?
            }
        };

        Ok(vec![event])
    }

    fn must_get(&self, id: &str) -> Result<Aspect, DialecticError> {
        self.get_aspect(id)?
            .ok_or_else(|| DialecticError::AspectNotFound(id.to_string()))
    }

    fn persist(&mut self, aspect: &Aspect) -> Result<AspectRecord, DialecticError> {
        self.store.save_aspect(aspect.to_draft())
    }

    fn emit(&self, base: &TraceMeta, kind: &str, payload: Value) -> Result<Event, DialecticError> {
        let event = Event {
            kind: kind.to_string(),
            payload,
            meta: child_span(base, kind, &self.scope),
        };
        self.bus.publish(&event)?;
        Ok(event)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::command::kinds;
    use crate::storage::InMemoryAspectStore;

    fn engine() -> AspectEngine<InMemoryAspectStore> {
        AspectEngine::new(InMemoryAspectStore::new())
    }

    fn run(engine: &mut AspectEngine<InMemoryAspectStore>, kind: &str, payload: Value) -> Vec<Event> {
        engine
            .handle(&CommandEnvelope::new(kind, payload))
            .expect("command")
    }

    #[test]
    fn create_then_describe() {
        let mut engine = engine();
        let created = run(&mut engine, kinds::CREATE, json!({"id": "a", "type": "x", "name": "n"}));
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].kind, events::CREATED);
        assert_eq!(created[0].payload, json!({"id": "a", "type": "x", "name": "n"}));

        let described = run(&mut engine, kinds::DESCRIBE, json!({"id": "a"}));
        assert_eq!(described[0].payload["type"], "x");
        assert_eq!(described[0].payload["signatureKeys"], json!([]));
    }

    #[test]
    fn create_without_name_reports_null() {
        let mut engine = engine();
        let created = run(&mut engine, kinds::CREATE, json!({"type": "x"}));
        assert_eq!(created[0].payload["name"], Value::Null);
        let id = created[0].payload["id"].as_str().expect("id");
        assert!(engine.get_aspect(id).expect("get").is_some());
    }

    #[test]
    fn missing_aspect_fails_without_events() {
        let mut engine = engine();
        let err = engine
            .handle(&CommandEnvelope::new(kinds::SET_STATE, json!({"id": "nope", "state": {}})))
            .expect_err("absent");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Aspect not found: nope");
        assert!(engine.event_bus().history().is_empty());
    }

    #[test]
    fn describe_absent_returns_id_only() {
        let mut engine = engine();
        let events = run(&mut engine, kinds::DESCRIBE, json!({"id": "ghost"}));
        assert_eq!(events[0].payload, json!({"id": "ghost"}));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut engine = engine();
        run(&mut engine, kinds::CREATE, json!({"id": "a", "type": "x"}));
        let first = run(&mut engine, kinds::DELETE, json!({"id": "a"}));
        let second = run(&mut engine, kinds::DELETE, json!({"id": "a"}));
        assert_eq!(first[0].payload["ok"], true);
        assert_eq!(second[0].payload["ok"], false);
    }

    #[test]
    fn events_are_child_spans_in_scope() {
        let mut engine = engine().with_scope("forms");
        let events = run(&mut engine, kinds::CREATE, json!({"id": "a", "type": "x"}));
        let meta = &events[0].meta;
        assert_eq!(meta.action.as_deref(), Some(events::CREATED));
        assert_eq!(meta.scope.as_deref(), Some("forms"));
        assert_eq!(meta.source.as_deref(), Some(ENGINE_SOURCE));
        assert!(meta.parent_span_id.is_some());
        assert_eq!(engine.event_bus().history().len(), 1);
    }

    #[test]
    fn recreate_keeps_created_at() {
        let mut engine = engine();
        run(&mut engine, kinds::CREATE, json!({"id": "a", "type": "x"}));
        let first = engine.store().get_aspect_by_id("a").expect("get").expect("stored");
        run(&mut engine, kinds::CREATE, json!({"id": "a", "type": "y"}));
        let second = engine.store().get_aspect_by_id("a").expect("get").expect("stored");
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.kind, "y");
    }
}
