//! # CLI Command Implementations
//!
//! Each `cmd_*` builds what it needs from the merged [`AppConfig`]: the
//! registry (bundled corpus, then the optional corpus directory) and, for
//! aspect commands, an engine over the configured backend.

use super::{AspectAction, RegistryAction};
use crate::api;
use crate::config::{AppConfig, BackendKind};
use dialectic_core::aspect::command::{events, kinds};
use dialectic_core::aspect::Bag;
use dialectic_core::corpus::{self, bundled_resolver};
use dialectic_core::formats::{ir_checksum, ir_to_bytes};
use dialectic_core::registry::{DirectoryResolver, FallbackResolver, generated_entries};
use dialectic_core::{
    AspectBackend, AspectEngine, CommandEnvelope, DialecticError, DialecticIR, Event, IrRegistry,
    StateGraph, extract,
};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Transition depth of `inspect` when none is given.
pub const DEFAULT_WALK_DEPTH: usize = 3;

/// Maximum size of an envelope file; matches the HTTP body limit.
const MAX_ENVELOPE_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), DialecticError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| DialecticError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(DialecticError::Validation(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize an input path and require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, DialecticError> {
    let canonical = path.canonicalize().map_err(|e| {
        DialecticError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(DialecticError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Canonical parent directory joined with the original file name.
fn validate_output_path(path: &Path) -> Result<PathBuf, DialecticError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        DialecticError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(DialecticError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| DialecticError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// OUTPUT
// =============================================================================

/// How results are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
    pub verbose: bool,
}

fn print_json(value: &impl serde::Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_events(out: Output, emitted: &[Event]) {
    if out.json {
        print_json(&emitted);
        return;
    }
    for event in emitted {
        println!("{}  {}", event.kind, event.payload);
        if out.verbose {
            println!(
                "    trace {} span {}",
                event.meta.trace_id, event.meta.span_id
            );
        }
    }
}

/// Parse `text` as a JSON object.
fn parse_object(text: &str, what: &str) -> Result<Bag, DialecticError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DialecticError::Validation(format!(
            "{what} must be a JSON object"
        ))),
        Err(e) => Err(DialecticError::Validation(format!("{what}: {e}"))),
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Generated registry resolved through the bundled corpus, then `corpus_dir`.
pub fn build_registry(config: &AppConfig) -> IrRegistry {
    let mut resolver = FallbackResolver::new().then(bundled_resolver());
    if let Some(dir) = &config.corpus_dir {
        tracing::debug!(root = %dir.display(), "directory resolver enabled");
        resolver = resolver.then(DirectoryResolver::new(dir.clone()));
    }
    IrRegistry::new(generated_entries(), resolver)
}

/// Engine over the configured aspect backend.
pub fn open_engine(config: &AppConfig) -> Result<AspectEngine<AspectBackend>, DialecticError> {
    let backend = match config.backend() {
        BackendKind::Memory => AspectBackend::in_memory(),
        BackendKind::Redb => AspectBackend::open_persistent(config.database())?,
    };
    Ok(AspectEngine::new(backend))
}

fn run_envelope(
    config: &AppConfig,
    out: Output,
    envelope: &CommandEnvelope,
) -> Result<(), DialecticError> {
    let mut engine = open_engine(config)?;
    let emitted = engine.handle(envelope)?;
    print_events(out, &emitted);
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(config: &AppConfig) -> Result<(), DialecticError> {
    let registry = build_registry(config);
    let engine = open_engine(config)?;

    println!("Dialectic Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", config.host());
    println!("  Port:     {}", config.port());
    println!("  Backend:  {}", config.backend());
    if config.backend() == BackendKind::Redb {
        println!("  Database: {:?}", config.database());
    }
    if let Some(dir) = &config.corpus_dir {
        println!("  Corpus:   {:?}", dir);
    }
    println!("  Registry: {} entries", registry.len());
    println!();
    println!("Endpoints:");
    println!("  POST /command          - Execute a command envelope");
    println!("  GET  /aspects/{{id}}     - Read a stored aspect");
    println!("  GET  /registry         - List registry entries");
    println!("  GET  /registry/{{key}}   - Load an aggregate by key");
    println!("  GET  /registry/id/{{id}} - Load an aggregate by id");
    println!("  POST /registry/export  - Export a snapshot");
    println!("  GET  /integrity        - Content integrity report");
    println!("  GET  /events           - Recent events");
    println!("  GET  /health           - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", config.host(), config.port());
    api::run_server(&addr, engine, registry).await
}

// =============================================================================
// REGISTRY COMMANDS
// =============================================================================

/// List, show or look up registry entries.
pub fn cmd_registry(
    config: &AppConfig,
    out: Output,
    action: RegistryAction,
) -> Result<(), DialecticError> {
    let registry = build_registry(config);

    match action {
        RegistryAction::List => {
            if out.json {
                let entries: Vec<_> = registry.entries().collect();
                print_json(&entries);
                return Ok(());
            }
            println!("Dialectic Registry ({} entries)", registry.len());
            println!("==================");
            for entry in registry.entries() {
                println!("{}  {}", entry.id, entry.title);
                if out.verbose {
                    println!("    section: {}", entry.section);
                    println!("    key:     {}", entry.key);
                }
            }
        }
        RegistryAction::Show { key } => {
            let entry = registry
                .meta(&key)
                .ok_or_else(|| DialecticError::UnknownRegistryKey(key.clone()))?;
            if out.json {
                print_json(entry);
                return Ok(());
            }
            println!("Key:     {}", entry.key);
            println!("Id:      {}", entry.id);
            println!("Title:   {}", entry.title);
            println!("Section: {}", entry.section);
            println!("Module:  {}", entry.module);
            println!("Export:  {}", entry.export);
        }
        RegistryAction::Keys { id } => {
            let keys = registry.keys_by_id(&id);
            if out.json {
                print_json(&json!({ "id": id, "keys": keys }));
                return Ok(());
            }
            if keys.is_empty() {
                println!("No keys carry id {id}");
            }
            for key in keys {
                println!("{key}");
            }
        }
    }

    Ok(())
}

/// Print the aggregate behind `key` as JSON.
pub fn cmd_load(config: &AppConfig, key: &str) -> Result<(), DialecticError> {
    let ir = build_registry(config).load(key)?;
    print_json(&ir);
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Integrity of the bundled content plus consistency of the loaded graph.
///
/// Without a key, every resolvable entry is loaded; entries no resolver
/// provides are counted and skipped.
pub fn cmd_check(config: &AppConfig, out: Output, key: Option<&str>) -> Result<(), DialecticError> {
    let registry = build_registry(config);
    let integrity = corpus::integrity_report()?;

    let mut irs: Vec<DialecticIR> = Vec::new();
    let mut unresolved = 0usize;
    match key {
        Some(key) => irs.push(registry.load(key)?),
        None => {
            for entry in registry.entries() {
                match registry.load(&entry.key) {
                    Ok(ir) => irs.push(ir),
                    Err(DialecticError::ModuleUnresolved { .. }) => unresolved += 1,
                    Err(e) => return Err(e),
                }
            }
        }
    }

    let graph = StateGraph::from_irs(&irs);
    let report = graph.check();

    if out.json {
        print_json(&json!({
            "integrity": integrity,
            "aggregates": irs.len(),
            "unresolved": unresolved,
            "states": graph.len(),
            "graph": report,
            "consistent": report.is_consistent(),
        }));
    } else {
        println!("Dialectic Check");
        println!("===============");
        println!(
            "Content:    {} duplicate chunk ids, {} duplicate operation ids, {} dangling refs",
            integrity.duplicates.chunks.len(),
            integrity.duplicates.operations.len(),
            integrity.dangling_refs.len()
        );
        println!("Aggregates: {} loaded, {} unresolved", irs.len(), unresolved);
        println!("States:     {}", graph.len());
        println!(
            "Graph:      {}",
            if report.is_consistent() {
                "consistent"
            } else {
                "INCONSISTENT"
            }
        );
        if out.verbose {
            for link in &report.unresolved_links {
                println!("  points outside loaded graph: {} -> {}", link.from, link.to);
            }
            for force in &report.unrealized_forces {
                println!(
                    "  unrealized force: {} in {} -> {}",
                    force.item_id, force.state_id, force.target
                );
            }
        }
    }

    if !integrity.is_clean() || !report.is_consistent() {
        return Err(DialecticError::Validation("check failed".to_string()));
    }
    Ok(())
}

// =============================================================================
// INSPECT / CHUNK COMMANDS
// =============================================================================

/// Projections of `state_id`, its transition walk and an optional path.
///
/// The walk and path run over the aggregate behind `key` only.
pub fn inspect_state(
    ir: &DialecticIR,
    state_id: &str,
    depth: usize,
    to: Option<&str>,
) -> Result<Value, DialecticError> {
    let graph = StateGraph::from_ir(ir);
    let state = graph
        .state(state_id)
        .ok_or_else(|| DialecticError::Validation(format!("state {state_id} is not in {}", ir.id)))?;

    let mut view = json!({
        "state": state_id,
        "relations": extract::relations(state),
        "spectrum": extract::spectrum(state),
        "appearing": extract::appearing(state),
        "constraints": extract::constraints(state),
        "transformations": extract::transformations(state),
        "predecessors": graph.predecessors(state_id),
        "walk": graph.walk(state_id, depth).unwrap_or_default(),
    });
    if let Some(target) = to {
        view["path"] = json!(graph.path(state_id, target));
    }
    Ok(view)
}

pub fn cmd_inspect(
    config: &AppConfig,
    out: Output,
    key: &str,
    state_id: &str,
    depth: usize,
    to: Option<&str>,
) -> Result<(), DialecticError> {
    let ir = build_registry(config).load(key)?;
    let view = inspect_state(&ir, state_id, depth, to)?;

    if out.json || out.verbose {
        print_json(&view);
        return Ok(());
    }

    let ids = |field: &str| -> String {
        view[field]
            .as_array()
            .map(|a| a.iter().filter_map(Value::as_str).collect::<Vec<_>>().join(" -> "))
            .unwrap_or_default()
    };
    let count = |field: &str| view[field].as_array().map_or(0, Vec::len);

    println!("State {state_id}");
    println!("  relations:       {}", count("relations"));
    println!("  poles:           {}", view["spectrum"]["range"]);
    println!("  appearing:       {}", view["appearing"]["mode"]);
    println!("  constraints:     {}", count("constraints"));
    println!("  transformations: {}", count("transformations"));
    println!("  walk:            {}", ids("walk"));
    if let Some(target) = to {
        match view["path"].as_array() {
            Some(_) => println!("  path:            {}", ids("path")),
            None => println!("  path:            no path to {target}"),
        }
    }
    Ok(())
}

/// A bundled chunk at a one-based position with its operations.
pub fn chunk_view(index: usize) -> Result<Value, DialecticError> {
    let content = corpus::becoming_content()?;
    let chunk = content.chunk(index).ok_or_else(|| {
        DialecticError::Validation(format!(
            "chunk {index} out of range (1..={})",
            content.chunks.len()
        ))
    })?;
    Ok(json!({
        "index": index,
        "chunk": chunk,
        "operations": content.operations_for_chunk(index),
    }))
}

pub fn cmd_chunk(out: Output, index: usize) -> Result<(), DialecticError> {
    let view = chunk_view(index)?;
    if out.json {
        print_json(&view);
        return Ok(());
    }

    println!(
        "[{}] {}",
        view["chunk"]["id"].as_str().unwrap_or_default(),
        view["chunk"]["title"].as_str().unwrap_or_default()
    );
    println!();
    println!("{}", view["chunk"]["text"].as_str().unwrap_or_default());
    for op in view["operations"].as_array().into_iter().flatten() {
        println!(
            "  - {}: {}",
            op["id"].as_str().unwrap_or_default(),
            op["label"].as_str().unwrap_or_default()
        );
    }
    Ok(())
}

// =============================================================================
// EVALUATE COMMAND
// =============================================================================

/// Evaluate `state_id` from the aggregate behind `key`.
pub fn cmd_evaluate(
    config: &AppConfig,
    out: Output,
    key: &str,
    state_id: &str,
    context: Option<&str>,
) -> Result<(), DialecticError> {
    let ir = build_registry(config).load(key)?;
    let state = ir
        .states
        .into_iter()
        .find(|s| s.id == state_id)
        .ok_or_else(|| DialecticError::Validation(format!("state {state_id} is not in {key}")))?;

    let mut payload = json!({ "dialecticState": state });
    if let Some(context) = context {
        payload["context"] = Value::Object(parse_object(context, "context")?);
    }

    run_envelope(config, out, &CommandEnvelope::new(kinds::EVALUATE, payload))
}

// =============================================================================
// ASPECT COMMANDS
// =============================================================================

fn aspect_envelope(action: AspectAction) -> Result<CommandEnvelope, DialecticError> {
    let envelope = match action {
        AspectAction::Create {
            id,
            kind,
            name,
            state,
        } => {
            let mut payload = json!({ "type": kind });
            if let Some(id) = id {
                payload["id"] = json!(id);
            }
            if let Some(name) = name {
                payload["name"] = json!(name);
            }
            if let Some(state) = state {
                payload["state"] = Value::Object(parse_object(&state, "state")?);
            }
            CommandEnvelope::new(kinds::CREATE, payload)
        }
        AspectAction::Describe { id } => CommandEnvelope::new(kinds::DESCRIBE, json!({ "id": id })),
        AspectAction::Delete { id } => CommandEnvelope::new(kinds::DELETE, json!({ "id": id })),
        AspectAction::SetCore { id, name, kind } => {
            let mut payload = json!({ "id": id });
            if let Some(name) = name {
                payload["name"] = json!(name);
            }
            if let Some(kind) = kind {
                payload["type"] = json!(kind);
            }
            CommandEnvelope::new(kinds::SET_CORE, payload)
        }
        AspectAction::SetState { id, state } => CommandEnvelope::new(
            kinds::SET_STATE,
            json!({ "id": id, "state": parse_object(&state, "state")? }),
        ),
        AspectAction::PatchState { id, patch } => CommandEnvelope::new(
            kinds::PATCH_STATE,
            json!({ "id": id, "patch": parse_object(&patch, "patch")? }),
        ),
    };
    Ok(envelope)
}

/// Run one aspect command and print its events.
pub fn cmd_aspect(
    config: &AppConfig,
    out: Output,
    action: AspectAction,
) -> Result<(), DialecticError> {
    let envelope = aspect_envelope(action)?;
    run_envelope(config, out, &envelope)
}

/// Run a raw envelope given inline or in a file.
pub fn cmd_command(
    config: &AppConfig,
    out: Output,
    envelope: Option<&str>,
    file: Option<&Path>,
) -> Result<(), DialecticError> {
    let text = match (envelope, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => {
            let validated = validate_file_path(path)?;
            validate_file_size(&validated, MAX_ENVELOPE_FILE_SIZE)?;
            std::fs::read_to_string(&validated)
                .map_err(|e| DialecticError::IoError(format!("Read file: {}", e)))?
        }
        (None, None) => {
            return Err(DialecticError::Validation(
                "an envelope or --file is required".to_string(),
            ));
        }
    };

    let envelope: CommandEnvelope = serde_json::from_str(&text)
        .map_err(|e| DialecticError::Validation(format!("envelope: {e}")))?;
    run_envelope(config, out, &envelope)
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Write the snapshot of the aggregate behind `key` to `output`.
pub fn cmd_export(
    config: &AppConfig,
    out: Output,
    key: &str,
    output: &Path,
) -> Result<(), DialecticError> {
    let validated = validate_output_path(output)?;
    let ir = build_registry(config).load(key)?;
    let data = ir_to_bytes(&ir)?;
    let checksum = ir_checksum(&ir)?;

    std::fs::write(&validated, &data)
        .map_err(|e| DialecticError::IoError(format!("Write snapshot: {}", e)))?;

    if out.json {
        print_json(&json!({
            "key": key,
            "path": validated.to_string_lossy(),
            "bytes": data.len(),
            "states": ir.states.len(),
            "checksum": checksum,
        }));
    } else {
        println!(
            "Exported {} ({} states, {} bytes) to {:?}",
            key,
            ir.states.len(),
            data.len(),
            validated
        );
        println!("BLAKE3: {checksum}");
    }
    Ok(())
}

// =============================================================================
// EVENTS COMMAND
// =============================================================================

/// Print the command → event catalogue.
pub fn cmd_events(out: Output) -> Result<(), DialecticError> {
    let catalogue: Vec<_> = kinds::ALL
        .iter()
        .map(|kind| (*kind, events::for_command(kind).unwrap_or_default()))
        .collect();

    if out.json {
        let map: serde_json::Map<String, Value> = catalogue
            .iter()
            .map(|(kind, event)| ((*kind).to_string(), json!(event)))
            .collect();
        print_json(&map);
        return Ok(());
    }

    for (kind, event) in catalogue {
        println!("{kind:<22} -> {event}");
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
