//! # Commands
//!
//! The `{kind, payload, meta?}` envelope accepted by the engine and the typed
//! commands it parses into. Parsing is the validation step: a command that
//! parses is well-formed, and nothing has touched the store yet.

use super::form::NewAspect;
use super::record::Bag;
use crate::DialecticError;
use crate::model::DialecticState;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Command kinds.
pub mod kinds {
    pub const CREATE: &str = "aspect.create";
    pub const DELETE: &str = "aspect.delete";
    pub const SET_CORE: &str = "aspect.setCore";
    pub const SET_STATE: &str = "aspect.setState";
    pub const PATCH_STATE: &str = "aspect.patchState";
    pub const DESCRIBE: &str = "aspect.describe";
    pub const EVALUATE: &str = "dialectic.evaluate";

    pub const ALL: &[&str] = &[
        CREATE,
        DELETE,
        SET_CORE,
        SET_STATE,
        PATCH_STATE,
        DESCRIBE,
        EVALUATE,
    ];
}

/// Event kinds.
pub mod events {
    pub const CREATED: &str = "aspect.created";
    pub const DELETED: &str = "aspect.deleted";
    pub const SET_CORE: &str = "aspect.setCore";
    pub const SET_STATE: &str = "aspect.setState";
    pub const PATCH_STATE: &str = "aspect.patchState";
    pub const DESCRIBE: &str = "aspect.describe";
    pub const EVALUATED: &str = "dialectic.evaluated";

    /// The event a successful command of `kind` emits.
    #[must_use]
    pub fn for_command(kind: &str) -> Option<&'static str> {
        use super::kinds;
        let event = match kind {
            kinds::CREATE => CREATED,
            kinds::DELETE => DELETED,
            kinds::SET_CORE => SET_CORE,
            kinds::SET_STATE => SET_STATE,
            kinds::PATCH_STATE => PATCH_STATE,
            kinds::DESCRIBE => DESCRIBE,
            kinds::EVALUATE => EVALUATED,
            _ => return None,
        };
        Some(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AspectRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetCore {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetState {
    pub id: String,
    pub state: Bag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchState {
    pub id: String,
    pub patch: Bag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EvaluateDialectic {
    pub dialectic_state: DialecticState,
    #[serde(default)]
    pub context: Option<Bag>,
}

/// A parsed, well-formed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create(NewAspect),
    Delete(AspectRef),
    SetCore(SetCore),
    SetState(SetState),
    PatchState(PatchState),
    Describe(AspectRef),
    Evaluate(Box<EvaluateDialectic>),
}

fn payload<T: DeserializeOwned>(kind: &str, value: Value) -> Result<T, DialecticError> {
    serde_json::from_value(value)
        .map_err(|e| DialecticError::validation(format!("{kind} payload: {e}")))
}

fn require_type(kind: &str, value: &str) -> Result<(), DialecticError> {
    if value.trim().is_empty() {
        return Err(DialecticError::validation(format!("{kind} payload: type is empty")));
    }
    Ok(())
}

fn require_id(kind: &str, id: &str) -> Result<(), DialecticError> {
    if id.trim().is_empty() {
        return Err(DialecticError::validation(format!("{kind} payload: id is empty")));
    }
    Ok(())
}

impl Command {
    /// Parse a payload for `kind`.
    ///
    /// # Errors
    ///
    /// `UnsupportedCommand` for an unknown kind, `Validation` for a payload
    /// of the wrong shape.
    pub fn parse(kind: &str, value: Value) -> Result<Self, DialecticError> {
        let command = match kind {
            kinds::CREATE => {
                let fields: NewAspect = payload(kind, value)?;
                require_type(kind, &fields.kind)?;
                Self::Create(fields)
            }
            kinds::DELETE => Self::Delete(payload(kind, value)?),
            kinds::SET_CORE => {
                let core: SetCore = payload(kind, value)?;
                if let Some(t) = &core.kind {
                    require_type(kind, t)?;
                }
                Self::SetCore(core)
            }
            kinds::SET_STATE => Self::SetState(payload(kind, value)?),
            kinds::PATCH_STATE => Self::PatchState(payload(kind, value)?),
            kinds::DESCRIBE => Self::Describe(payload(kind, value)?),
            kinds::EVALUATE => {
                let evaluate: EvaluateDialectic = payload(kind, value)?;
                evaluate.dialectic_state.validate()?;
                Self::Evaluate(Box::new(evaluate))
            }
            other => return Err(DialecticError::UnsupportedCommand(other.to_string())),
        };

        if let Some(id) = command.target_id() {
            require_id(kind, id)?;
        }
        Ok(command)
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create(_) => kinds::CREATE,
            Self::Delete(_) => kinds::DELETE,
            Self::SetCore(_) => kinds::SET_CORE,
            Self::SetState(_) => kinds::SET_STATE,
            Self::PatchState(_) => kinds::PATCH_STATE,
            Self::Describe(_) => kinds::DESCRIBE,
            Self::Evaluate(_) => kinds::EVALUATE,
        }
    }

    /// The aspect the command addresses, when it names one.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Create(fields) => fields.id.as_deref(),
            Self::Delete(r) | Self::Describe(r) => Some(&r.id),
            Self::SetCore(c) => Some(&c.id),
            Self::SetState(c) => Some(&c.id),
            Self::PatchState(c) => Some(&c.id),
            Self::Evaluate(e) => Some(&e.dialectic_state.id),
        }
    }

    /// Serialize back to an envelope.
    pub fn to_envelope(&self) -> Result<CommandEnvelope, DialecticError> {
        let value = match self {
            Self::Create(c) => serde_json::to_value(c),
            Self::Delete(c) | Self::Describe(c) => serde_json::to_value(c),
            Self::SetCore(c) => serde_json::to_value(c),
            Self::SetState(c) => serde_json::to_value(c),
            Self::PatchState(c) => serde_json::to_value(c),
            Self::Evaluate(c) => serde_json::to_value(c),
        }
        .map_err(|e| DialecticError::SerializationError(e.to_string()))?;
        Ok(CommandEnvelope::new(self.kind(), value))
    }
}

/// A command as it travels: kind, raw payload and optional trace meta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Bag>,
}

impl CommandEnvelope {
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
            meta: None,
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: Bag) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn command(&self) -> Result<Command, DialecticError> {
        Command::parse(&self.kind, self.payload.clone())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_kind_is_unsupported() {
        let err = Command::parse("aspect.explode", json!({})).expect_err("unknown");
        assert!(matches!(err, DialecticError::UnsupportedCommand(ref k) if k == "aspect.explode"));
        assert!(err.is_validation());
    }

    #[test]
    fn create_requires_type() {
        assert!(Command::parse(kinds::CREATE, json!({"name": "n"})).is_err());
        assert!(Command::parse(kinds::CREATE, json!({"type": ""})).is_err());

        let Command::Create(fields) = Command::parse(kinds::CREATE, json!({"type": "x"})).expect("parse")
        else {
            panic!("expected create");
        };
        assert_eq!(fields.kind, "x");
        assert!(fields.id.is_none());
    }

    #[test]
    fn set_core_rejects_empty_type() {
        let err = Command::parse(kinds::SET_CORE, json!({"id": "a", "type": " "}))
            .expect_err("empty type");
        assert!(err.is_validation());
        assert!(Command::parse(kinds::SET_CORE, json!({"id": "a", "name": "n"})).is_ok());
    }

    #[test]
    fn targeted_commands_require_id() {
        assert!(Command::parse(kinds::DESCRIBE, json!({})).is_err());
        assert!(Command::parse(kinds::DELETE, json!({"id": " "})).is_err());
        assert!(Command::parse(kinds::SET_STATE, json!({"id": "a"})).is_err());
        assert!(Command::parse(kinds::PATCH_STATE, json!({"id": "a", "patch": 3})).is_err());
    }

    #[test]
    fn set_core_reads_type_key() {
        let command = Command::parse(kinds::SET_CORE, json!({"id": "a", "type": "t"})).expect("parse");
        assert_eq!(
            command,
            Command::SetCore(SetCore {
                id: "a".to_string(),
                name: None,
                kind: Some("t".to_string()),
            })
        );
    }

    #[test]
    fn evaluate_validates_state() {
        let err = Command::parse(
            kinds::EVALUATE,
            json!({"dialecticState": {"id": "s", "title": "", "concept": "c", "phase": "quality",
                "moments": [], "invariants": [],
                "provenance": {"topicMapId": "tm", "lineRange": {"start": 1, "end": 1}}}}),
        )
        .expect_err("empty title");
        assert!(err.is_validation());
    }

    #[test]
    fn envelope_roundtrip() {
        let envelope: CommandEnvelope = serde_json::from_value(json!({
            "kind": "aspect.describe",
            "payload": {"id": "a"},
            "meta": {"traceId": "t"}
        }))
        .expect("envelope");
        let command = envelope.command().expect("command");
        assert_eq!(command.kind(), kinds::DESCRIBE);
        assert_eq!(command.target_id(), Some("a"));
        assert_eq!(command.to_envelope().expect("envelope").payload, json!({"id": "a"}));
    }

    #[test]
    fn every_kind_has_an_event() {
        for kind in kinds::ALL {
            assert!(events::for_command(kind).is_some(), "{kind}");
        }
        assert_eq!(events::for_command(kinds::EVALUATE), Some(events::EVALUATED));
        assert_eq!(events::for_command("aspect.explode"), None);
    }
}
